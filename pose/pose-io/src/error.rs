//! Error types for pose I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pose I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing pose lists.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Malformed JSON or a value that is not a pose list.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A library already holds a collection under this name.
    #[error("pose collection already exists: {name}")]
    DuplicateName {
        /// The conflicting name.
        name: String,
    },

    /// The model or space path was left empty.
    #[error("incomplete inputs: {missing} path is empty")]
    IncompleteInputs {
        /// Which input is missing (`"model"` or `"space"`).
        missing: &'static str,
    },
}

impl IoError {
    /// Maps a file-open error, turning `NotFound` into [`IoError::FileNotFound`].
    pub(crate) fn from_open(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_open_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let mapped = IoError::from_open(err, std::path::Path::new("model.json"));
        assert!(matches!(mapped, IoError::FileNotFound { .. }));
        assert!(mapped.to_string().contains("model.json"));
    }

    #[test]
    fn test_from_open_other() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let mapped = IoError::from_open(err, std::path::Path::new("model.json"));
        assert!(matches!(mapped, IoError::Io(_)));
    }

    #[test]
    fn test_display() {
        let err = IoError::DuplicateName {
            name: "model".to_string(),
        };
        assert_eq!(err.to_string(), "pose collection already exists: model");
        let err = IoError::IncompleteInputs { missing: "space" };
        assert!(err.to_string().contains("space"));
    }
}
