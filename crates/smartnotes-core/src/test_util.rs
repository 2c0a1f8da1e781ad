//! Shared test helpers for `smartnotes-core` unit tests.

use std::collections::BTreeSet;

use tempfile::TempDir;

use crate::notes::{Note, NoteStore};
use crate::paths::StorePaths;

/// Build a note with identical `created` and `modified` timestamps.
pub fn make_note(id: u64, content: &str, tags: &[&str], created: &str) -> Note {
    Note {
        id,
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
        created: created.to_string(),
        modified: created.to_string(),
    }
}

/// An empty store rooted in a fresh temporary directory. Keep the returned
/// `TempDir` alive for as long as the store is used.
pub fn temp_store() -> (TempDir, NoteStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = NoteStore::open(StorePaths::in_dir(dir.path()));
    (dir, store)
}

/// A store opened from a notes file pre-populated with `notes`.
pub fn seeded_store(notes: Vec<Note>) -> (TempDir, NoteStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let paths = StorePaths::in_dir(dir.path());
    let content = serde_json::to_string_pretty(&notes).expect("serialize seed notes");
    std::fs::write(&paths.notes_file, content).expect("write seed notes");
    let store = NoteStore::open(paths);
    (dir, store)
}
