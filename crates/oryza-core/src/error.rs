//! Error types for the Oryza core library.

/// Errors produced by core type conversions.
///
/// Marked `#[non_exhaustive]` so new variants can be added without
/// breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A string could not be parsed as an entity id.
    #[error("Invalid id: {value:?}")]
    InvalidId {
        /// The rejected input
        value: String,
    },

    /// Every id up to `u64::MAX` has been issued.
    #[error("Id sequence exhausted after {last}")]
    IdsExhausted {
        /// The last id handed out
        last: u64,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid-id error.
    pub fn invalid_id<S: Into<String>>(value: S) -> Self {
        Error::InvalidId {
            value: value.into(),
        }
    }
}
