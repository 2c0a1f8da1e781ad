//! Note storage for SmartNotes.
//!
//! Provides the in-memory [`NoteStore`] backed by a single JSON file,
//! heuristic tag extraction, and the record types shared with the CLI.

pub(crate) mod json;
mod store;
pub mod tagging;
mod types;

pub use store::NoteStore;
pub use types::{LoadWarning, Note, NoteQuery, NoteStats, NoteStoreError, StoreConfig};
