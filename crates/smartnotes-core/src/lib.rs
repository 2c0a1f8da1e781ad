pub mod error;
pub mod export;
pub mod notes;
pub mod paths;
pub mod timestamp;

#[cfg(test)]
pub(crate) mod test_util;

pub use error::CoreError;
pub use export::ExportFormat;
pub use notes::{Note, NoteQuery, NoteStats, NoteStore, NoteStoreError};
pub use paths::StorePaths;
