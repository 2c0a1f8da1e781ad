//! Note records, store configuration, query/stat types, and store errors.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ==============================================================================
// Note Records
// ==============================================================================

/// A single stored note, as persisted in `notes.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub content: String,
    /// Lowercase tags; a set so duplicates collapse on load and merge.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub created: String,
    pub modified: String,
}

impl Note {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Content length in characters, as reported by stats.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

// ==============================================================================
// Store Configuration
// ==============================================================================

/// Contents of `config.json`. Loaded on open but not consulted by any
/// operation yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub default_tags: Vec<String>,
}

// ==============================================================================
// Queries and Summaries
// ==============================================================================

/// Filters for [`NoteStore::list_notes`](super::NoteStore::list_notes).
/// Empty strings and a zero limit count as "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    pub tag: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl NoteQuery {
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStats {
    pub total_notes: usize,
    pub total_tags: usize,
    pub average_length: usize,
    pub most_recent: Note,
    pub storage_path: PathBuf,
}

// ==============================================================================
// Load Warnings and Errors
// ==============================================================================

/// A storage or config file that could not be loaded. The store falls back
/// to empty notes or default config and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub path: PathBuf,
    pub reason: String,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not load {}: {}", self.path.display(), self.reason)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NoteStoreError {
    #[error("note content cannot be empty")]
    EmptyContent,

    #[error("note #{0} not found")]
    NotFound(u64),

    #[error("error saving notes: {0}")]
    Persist(#[source] CoreError),

    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("no notes to export")]
    NoNotes,

    #[error("export failed: {0}")]
    Export(#[source] CoreError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
