//! `NoteStore` — the in-memory note collection and its on-disk JSON file.
//!
//! The whole collection is loaded on [`NoteStore::open`] and rewritten to
//! disk after every mutation. A mutation whose write fails is rolled back in
//! memory so the collection always matches the last successful write.
//!
//! Ordering: listings are newest-first by `created`, exports oldest-first.
//! Equal timestamps fall back to the note id so results are deterministic.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::export::{self, ExportFormat};
use crate::paths::StorePaths;
use crate::timestamp;

use super::json::{read_json, write_json};
use super::tagging::{extract_tags, normalize_tag};
use super::types::{LoadWarning, Note, NoteQuery, NoteStats, NoteStoreError, StoreConfig};

pub struct NoteStore {
    paths: StorePaths,
    notes: Vec<Note>,
    config: StoreConfig,
    load_warnings: Vec<LoadWarning>,
}

impl NoteStore {
    // ========================================================================
    // Loading
    // ========================================================================

    /// Load notes and config from `paths`. Missing files start empty;
    /// unreadable or corrupt files are recorded as [`LoadWarning`]s and
    /// replaced by empty defaults.
    pub fn open(paths: StorePaths) -> Self {
        let mut load_warnings = Vec::new();

        let notes: Vec<Note> = load_or_default(&paths.notes_file, &mut load_warnings);
        let config: StoreConfig = load_or_default(&paths.config_file, &mut load_warnings);

        tracing::debug!(
            path = %paths.notes_file.display(),
            notes = notes.len(),
            "opened note store"
        );

        Self {
            paths,
            notes,
            config,
            load_warnings,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn load_warnings(&self) -> &[LoadWarning] {
        &self.load_warnings
    }

    pub fn notes_path(&self) -> &Path {
        &self.paths.notes_file
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Create a note. Tags are the content's hashtags and keywords plus the
    /// normalized `explicit_tags`.
    pub fn add_note(
        &mut self,
        content: &str,
        explicit_tags: &[String],
    ) -> Result<Note, NoteStoreError> {
        if content.trim().is_empty() {
            return Err(NoteStoreError::EmptyContent);
        }

        let mut tags = extract_tags(content);
        tags.extend(explicit_tags.iter().filter_map(|t| normalize_tag(t)));

        let now = timestamp::now_iso()?;
        let note = Note {
            id: self.next_id(),
            content: content.to_string(),
            tags,
            created: now.clone(),
            modified: now,
        };

        self.notes.push(note.clone());
        if let Err(e) = self.persist() {
            self.notes.pop();
            return Err(e);
        }

        tracing::debug!(id = note.id, tags = note.tags.len(), "added note");
        Ok(note)
    }

    /// Replace a note's content. Tags are recomputed from the new content
    /// alone, so explicit and manually added tags are dropped unless the new
    /// text carries them as hashtags or keywords.
    pub fn edit_note(&mut self, id: u64, new_content: &str) -> Result<Note, NoteStoreError> {
        let idx = self.index_of(id).ok_or(NoteStoreError::NotFound(id))?;
        if new_content.trim().is_empty() {
            return Err(NoteStoreError::EmptyContent);
        }

        let now = timestamp::now_iso()?;
        let previous = self.notes[idx].clone();
        let note = &mut self.notes[idx];
        note.content = new_content.to_string();
        note.tags = extract_tags(new_content);
        note.modified = now;
        let updated = note.clone();

        if let Err(e) = self.persist() {
            self.notes[idx] = previous;
            return Err(e);
        }

        tracing::debug!(id, "edited note");
        Ok(updated)
    }

    /// Remove a note and return it.
    pub fn delete_note(&mut self, id: u64) -> Result<Note, NoteStoreError> {
        let idx = self.index_of(id).ok_or(NoteStoreError::NotFound(id))?;
        let removed = self.notes.remove(idx);

        if let Err(e) = self.persist() {
            self.notes.insert(idx, removed);
            return Err(e);
        }

        tracing::debug!(id, "deleted note");
        Ok(removed)
    }

    /// Add tags to a note. Returns the normalized tags that were requested
    /// (whether or not the note already had them).
    pub fn tag_note(&mut self, id: u64, tags: &[String]) -> Result<Vec<String>, NoteStoreError> {
        let idx = self.index_of(id).ok_or(NoteStoreError::NotFound(id))?;
        let normalized: Vec<String> = tags.iter().filter_map(|t| normalize_tag(t)).collect();

        let now = timestamp::now_iso()?;
        let previous = self.notes[idx].clone();
        let note = &mut self.notes[idx];
        note.tags.extend(normalized.iter().cloned());
        note.modified = now;

        if let Err(e) = self.persist() {
            self.notes[idx] = previous;
            return Err(e);
        }

        tracing::debug!(id, added = normalized.len(), "tagged note");
        Ok(normalized)
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Notes matching `query`, newest first.
    pub fn list_notes(&self, query: &NoteQuery) -> Vec<&Note> {
        let tag = query
            .tag
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);
        let search = query
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<&Note> = self
            .notes
            .iter()
            .filter(|note| tag.as_deref().is_none_or(|t| note.has_tag(t)))
            .filter(|note| {
                search
                    .as_deref()
                    .is_none_or(|s| note.content.to_lowercase().contains(s))
            })
            .collect();

        matches.sort_by(|a, b| newest_first(a, b));

        if let Some(limit) = query.limit.filter(|&n| n > 0) {
            matches.truncate(limit);
        }
        matches
    }

    pub fn get_note(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn show_note(&self, id: u64) -> Result<&Note, NoteStoreError> {
        self.get_note(id).ok_or(NoteStoreError::NotFound(id))
    }

    /// Every distinct tag with the number of notes carrying it, sorted by tag.
    pub fn list_tags(&self) -> BTreeMap<String, usize> {
        self.notes
            .iter()
            .flat_map(|note| note.tags.iter())
            .fold(BTreeMap::new(), |mut counts, tag| {
                *counts.entry(tag.clone()).or_insert(0) += 1;
                counts
            })
    }

    /// Summary statistics, or `None` when the store is empty.
    pub fn stats(&self) -> Option<NoteStats> {
        let most_recent = self.notes.iter().max_by(|a, b| newest_first(b, a))?;

        let total_notes = self.notes.len();
        let total_chars: usize = self.notes.iter().map(Note::char_len).sum();

        Some(NoteStats {
            total_notes,
            total_tags: self.list_tags().len(),
            average_length: total_chars / total_notes,
            most_recent: most_recent.clone(),
            storage_path: self.paths.notes_file.clone(),
        })
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Write every note, oldest first, to `output` or to a timestamped file
    /// in the current directory. Returns the path written.
    pub fn export_notes(
        &self,
        format: ExportFormat,
        output: Option<&Path>,
    ) -> Result<PathBuf, NoteStoreError> {
        if self.notes.is_empty() {
            return Err(NoteStoreError::NoNotes);
        }

        let path = match output {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(export::default_file_name(format)?),
        };

        let mut ordered: Vec<&Note> = self.notes.iter().collect();
        ordered.sort_by(|a, b| newest_first(b, a));

        let generated_at = timestamp::now_human()?;
        let rendered =
            export::render(format, &ordered, &generated_at).map_err(NoteStoreError::Export)?;

        std::fs::write(&path, rendered).map_err(|source| {
            NoteStoreError::Export(CoreError::Write {
                path: path.clone(),
                source,
            })
        })?;

        tracing::debug!(path = %path.display(), %format, notes = ordered.len(), "exported notes");
        Ok(path)
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// One past the highest id in use. Ids of deleted notes at the end of
    /// the sequence can be handed out again; ids of live notes never are.
    fn next_id(&self) -> u64 {
        self.notes.iter().map(|note| note.id).max().unwrap_or(0) + 1
    }

    fn index_of(&self, id: u64) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn persist(&self) -> Result<(), NoteStoreError> {
        write_json(&self.paths.notes_file, &self.notes).map_err(NoteStoreError::Persist)?;
        tracing::debug!(
            path = %self.paths.notes_file.display(),
            notes = self.notes.len(),
            "saved notes"
        );
        Ok(())
    }
}

/// Descending by `created`, then by id.
fn newest_first(a: &Note, b: &Note) -> Ordering {
    b.created.cmp(&a.created).then_with(|| b.id.cmp(&a.id))
}

fn load_or_default<T>(path: &Path, warnings: &mut Vec<LoadWarning>) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match read_json(path) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "falling back to empty data");
            warnings.push(LoadWarning {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
            T::default()
        }
    }
}
