//! Whole-file JSON persistence for the notes array and config object.
//!
//! Files are written pretty-printed with two-space indentation; serde_json
//! leaves non-ASCII characters unescaped.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CoreError;

/// Read and parse a JSON file. A missing file yields `Ok(None)`.
pub(super) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, CoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(CoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| CoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Serialize `value` and overwrite `path`, creating parent directories.
pub(super) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CoreError> {
    let content = to_pretty_json(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CoreError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(value)?)
}
