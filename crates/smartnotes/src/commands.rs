//! Dispatch of parsed subcommands onto the note store.
//!
//! Store errors are reported here as `[X]` lines and turned into a failed
//! [`Outcome`]; only failures writing to the terminal propagate.

use std::io::{self, Write};

use smartnotes_core::{ExportFormat, NoteQuery, NoteStore, NoteStoreError};

use crate::cli::Command;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

pub fn run(command: Command, store: &mut NoteStore, out: &mut impl Write) -> io::Result<Outcome> {
    match command {
        Command::Add { content, tags } => match store.add_note(&content, &tags) {
            Ok(note) => {
                writeln!(out, "[OK] Note #{} added", note.id)?;
                if !note.tags.is_empty() {
                    let tags: Vec<&str> = note.tags.iter().map(String::as_str).collect();
                    writeln!(out, "     Tags: {}", tags.join(", "))?;
                }
                Ok(Outcome::Success)
            }
            Err(e) => report(out, &e),
        },

        Command::List { tag, limit } => {
            let query = NoteQuery {
                tag,
                search: None,
                limit,
            };
            write!(out, "{}", render::note_list(&store.list_notes(&query)))?;
            Ok(Outcome::Success)
        }

        Command::Search { term, limit } => {
            let query = NoteQuery::search(term).with_limit(limit);
            write!(out, "{}", render::note_list(&store.list_notes(&query)))?;
            Ok(Outcome::Success)
        }

        Command::Show { id } => match store.show_note(id) {
            Ok(note) => {
                write!(out, "{}", render::note_detail(note))?;
                Ok(Outcome::Success)
            }
            Err(e) => report(out, &e),
        },

        Command::Edit { id, content } => match store.edit_note(id, &content) {
            Ok(_) => {
                writeln!(out, "[OK] Note #{id} updated")?;
                Ok(Outcome::Success)
            }
            Err(e) => report(out, &e),
        },

        Command::Delete { id } => match store.delete_note(id) {
            Ok(_) => {
                writeln!(out, "[OK] Note #{id} deleted")?;
                Ok(Outcome::Success)
            }
            Err(e) => report(out, &e),
        },

        Command::Tag { id, tags } => match store.tag_note(id, &tags) {
            Ok(added) => {
                writeln!(out, "[OK] Tags added to note #{id}: {}", added.join(", "))?;
                Ok(Outcome::Success)
            }
            Err(e) => report(out, &e),
        },

        Command::Tags => {
            write!(out, "{}", render::tag_counts(&store.list_tags()))?;
            Ok(Outcome::Success)
        }

        Command::Export { format, output } => {
            let result = format
                .parse::<ExportFormat>()
                .and_then(|format| store.export_notes(format, output.as_deref()));
            match result {
                Ok(path) => {
                    writeln!(out, "[OK] Notes exported to: {}", path.display())?;
                    Ok(Outcome::Success)
                }
                Err(e) => report(out, &e),
            }
        }

        Command::Stats => {
            match store.stats() {
                Some(stats) => write!(out, "{}", render::stats(&stats))?,
                None => writeln!(
                    out,
                    "No notes yet. Add one with: smartnotes add \"Your note here\""
                )?,
            }
            Ok(Outcome::Success)
        }
    }
}

fn report(out: &mut impl Write, err: &NoteStoreError) -> io::Result<Outcome> {
    tracing::debug!(error = ?err, "command failed");
    writeln!(out, "[X] {}", failure_message(err))?;
    Ok(Outcome::Failure)
}

fn failure_message(err: &NoteStoreError) -> String {
    match err {
        NoteStoreError::EmptyContent => "Cannot add empty note!".to_string(),
        NoteStoreError::NotFound(id) => format!("Note #{id} not found!"),
        NoteStoreError::NoNotes => "No notes to export!".to_string(),
        NoteStoreError::UnsupportedFormat(format) => format!("Unsupported format: {format}"),
        NoteStoreError::Persist(_) | NoteStoreError::Export(_) | NoteStoreError::Core(_) => {
            capitalize(&err.to_string())
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartnotes_core::StorePaths;

    struct Harness {
        dir: tempfile::TempDir,
        store: NoteStore,
    }

    impl Harness {
        fn new() -> Self {
            let dir = tempfile::tempdir().expect("temp dir");
            let store = NoteStore::open(StorePaths::in_dir(dir.path()));
            Self { dir, store }
        }

        fn run(&mut self, command: Command) -> (Outcome, String) {
            let mut buf = Vec::new();
            let outcome = run(command, &mut self.store, &mut buf).expect("write to buffer");
            (outcome, String::from_utf8(buf).expect("utf-8 output"))
        }

        fn add(&mut self, content: &str) {
            let (outcome, _) = self.run(Command::Add {
                content: content.into(),
                tags: Vec::new(),
            });
            assert_eq!(outcome, Outcome::Success);
        }
    }

    #[test]
    fn add_reports_id_and_tags() {
        let mut h = Harness::new();
        let (outcome, out) = h.run(Command::Add {
            content: "Ship #release".into(),
            tags: vec!["Work".into()],
        });
        assert_eq!(outcome, Outcome::Success);
        assert!(out.starts_with("[OK] Note #1 added\n"));
        assert!(out.contains("Tags: release, ship, work"));
    }

    #[test]
    fn add_empty_note_fails() {
        let mut h = Harness::new();
        let (outcome, out) = h.run(Command::Add {
            content: "   ".into(),
            tags: Vec::new(),
        });
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(out, "[X] Cannot add empty note!\n");
    }

    #[test]
    fn missing_ids_are_echoed_back() {
        let mut h = Harness::new();
        for command in [
            Command::Show { id: 4 },
            Command::Edit {
                id: 4,
                content: "x".into(),
            },
            Command::Delete { id: 4 },
            Command::Tag {
                id: 4,
                tags: vec!["x".into()],
            },
        ] {
            let (outcome, out) = h.run(command);
            assert_eq!(outcome, Outcome::Failure);
            assert_eq!(out, "[X] Note #4 not found!\n");
        }
    }

    #[test]
    fn search_lists_matches() {
        let mut h = Harness::new();
        h.add("Learn Rust ownership");
        h.add("Buy groceries");

        let (outcome, out) = h.run(Command::Search {
            term: "rust".into(),
            limit: None,
        });
        assert_eq!(outcome, Outcome::Success);
        assert!(out.contains("[1 note(s) found]"));
        assert!(out.contains("Learn Rust ownership"));
        assert!(!out.contains("groceries"));
    }

    #[test]
    fn tag_then_tags_shows_counts() {
        let mut h = Harness::new();
        h.add("first");
        let (outcome, out) = h.run(Command::Tag {
            id: 1,
            tags: vec!["#Important".into(), "  URGENT  ".into()],
        });
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "[OK] Tags added to note #1: important, urgent\n");

        let (_, out) = h.run(Command::Tags);
        assert!(out.contains("#important (1 note(s))"));
        assert!(out.contains("#urgent (1 note(s))"));
    }

    #[test]
    fn export_rejects_unknown_format() {
        let mut h = Harness::new();
        h.add("something");
        let (outcome, out) = h.run(Command::Export {
            format: "pdf".into(),
            output: None,
        });
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(out, "[X] Unsupported format: pdf\n");
    }

    #[test]
    fn export_with_no_notes_fails() {
        let mut h = Harness::new();
        let output = h.dir.path().join("out.txt");
        let (outcome, out) = h.run(Command::Export {
            format: "txt".into(),
            output: Some(output),
        });
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(out, "[X] No notes to export!\n");
    }

    #[test]
    fn export_writes_requested_file() {
        let mut h = Harness::new();
        h.add("exported note");
        let output = h.dir.path().join("notes.md");
        let (outcome, out) = h.run(Command::Export {
            format: "md".into(),
            output: Some(output.clone()),
        });
        assert_eq!(outcome, Outcome::Success);
        assert!(out.starts_with("[OK] Notes exported to: "));
        let content = std::fs::read_to_string(output).expect("read export");
        assert!(content.starts_with("# SmartNotes Export"));
    }

    #[test]
    fn stats_on_empty_store_prints_hint() {
        let mut h = Harness::new();
        let (outcome, out) = h.run(Command::Stats);
        assert_eq!(outcome, Outcome::Success);
        assert!(out.starts_with("No notes yet."));
    }

    #[test]
    fn stats_reports_totals() {
        let mut h = Harness::new();
        h.add("0123456789");
        h.add("01234567890123456789");
        let (_, out) = h.run(Command::Stats);
        assert!(out.contains("Total notes:      2"));
        assert!(out.contains("Average length:   15 characters"));
    }
}
