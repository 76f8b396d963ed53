//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No record with this name.
    #[error("NPC not found: {0}")]
    NotFound(String),

    /// A record with this name already exists.
    #[error("NPC already exists: {0}")]
    AlreadyExists(String),

    /// A record-level rule was violated (bad index, bad skin).
    #[error(transparent)]
    Record(#[from] firenpc_core::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file is not a RON map.
    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether the error came from reading or writing the store file
    ///
    /// After a failed write the in-memory state is ahead of the file.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Parse(_) | Error::Serialization(_))
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
