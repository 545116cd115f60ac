//! Error types for oryza-cli

use std::path::{Path, PathBuf};

use oryza_core::EntityId;
use thiserror::Error;

/// Result type alias for oryza-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oryza-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from oryza-app
    #[error("{0}")]
    App(#[from] oryza_app::Error),

    /// Error from oryza-storage
    #[error("Storage error: {0}")]
    Storage(#[from] oryza_storage::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// I/O error on a specific file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Writing command output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// A command referenced an id that does not exist
    #[error("No {kind} with id {id}")]
    NotFound {
        /// "variant" or "order"
        kind: &'static str,
        /// Requested id
        id: EntityId,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
