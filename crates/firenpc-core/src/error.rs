//! Error types for firenpc-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid skin data: {0}")]
    InvalidSkin(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
