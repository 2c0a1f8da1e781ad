//! Storage locations for the notes and config files.

use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// Directory name under the user's home used when no data dir is given.
pub const DEFAULT_DIR_NAME: &str = ".smartnotes";

pub const NOTES_FILE_NAME: &str = "notes.json";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where a [`NoteStore`](crate::NoteStore) reads and writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub notes_file: PathBuf,
    pub config_file: PathBuf,
}

impl StorePaths {
    /// Both files inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            notes_file: dir.join(NOTES_FILE_NAME),
            config_file: dir.join(CONFIG_FILE_NAME),
        }
    }

    /// `<home>/.smartnotes`.
    pub fn default_location() -> Result<Self, CoreError> {
        let home = dirs::home_dir().ok_or(CoreError::NoHomeDir)?;
        Ok(Self::in_dir(home.join(DEFAULT_DIR_NAME)))
    }

    /// Explicit directory if given, otherwise the default location.
    pub fn resolve(data_dir: Option<&Path>) -> Result<Self, CoreError> {
        match data_dir {
            Some(dir) => Ok(Self::in_dir(dir)),
            None => Self::default_location(),
        }
    }
}
