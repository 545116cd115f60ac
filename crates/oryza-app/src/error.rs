//! Error types for oryza-app

use thiserror::Error;

/// Result type alias for oryza-app operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oryza-app
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from oryza-core
    #[error("Core error: {0}")]
    Core(#[from] oryza_core::Error),

    /// Error from oryza-storage
    #[error("Storage error: {0}")]
    Storage(#[from] oryza_storage::Error),

    /// An order was attempted before any variant was opened
    #[error("No variant selected; open a variant before ordering")]
    NoSelection,

    /// Invalid application options
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
