//! Error types for oryza-storage

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for oryza-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oryza-storage
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error on a specific file
    #[error("I/O error on {path}: {source}")]
    IoWithPath {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend refused a write
    #[error("Write rejected for key '{key}': {message}")]
    WriteRejected {
        /// Key being written
        key: String,
        /// Why the write failed
        message: String,
    },
}

impl Error {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::IoWithPath {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a write-rejected error.
    pub fn write_rejected<K, M>(key: K, message: M) -> Self
    where
        K: Into<String>,
        M: Into<String>,
    {
        Error::WriteRejected {
            key: key.into(),
            message: message.into(),
        }
    }
}
