//! Error types for firenpc-plugin

use thiserror::Error;

/// Failure reported by the host runtime (e.g. an entity could not spawn)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host error: {0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result type for plugin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by plugin operations
#[derive(Debug, Error)]
pub enum Error {
    /// The NPC's world is not loaded on the host
    #[error("world not loaded: {0}")]
    WorldUnavailable(String),

    /// No online player matched the given name
    #[error("player not found: {0}")]
    PlayerNotFound(String),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("store error: {0}")]
    Store(#[from] firenpc_store::Error),

    #[error("config parse error: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification used to pick a reply and by callers that branch
/// on the kind of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidArgument,
    WorldUnavailable,
    Persistence,
    Host,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use firenpc_store::Error as StoreError;

        match self {
            Error::WorldUnavailable(_) => ErrorKind::WorldUnavailable,
            Error::PlayerNotFound(_) => ErrorKind::NotFound,
            Error::Host(_) => ErrorKind::Host,
            Error::Store(StoreError::NotFound(_)) => ErrorKind::NotFound,
            Error::Store(StoreError::AlreadyExists(_)) => ErrorKind::AlreadyExists,
            Error::Store(StoreError::Record(_)) => ErrorKind::InvalidArgument,
            Error::Store(_) | Error::Config(_) | Error::Io(_) => ErrorKind::Persistence,
        }
    }

    /// One-line reply for the player who issued the command
    pub fn user_message(&self) -> String {
        use firenpc_store::Error as StoreError;

        match self {
            Error::WorldUnavailable(_) => "NPC's world not loaded!".to_string(),
            Error::PlayerNotFound(_) => "Player not found! They must be online.".to_string(),
            Error::Host(e) => format!("Failed to spawn NPC: {}", e.0),
            Error::Store(StoreError::NotFound(_)) => "NPC not found!".to_string(),
            Error::Store(StoreError::AlreadyExists(_)) => {
                "NPC with that name already exists!".to_string()
            }
            Error::Store(StoreError::Record(firenpc_core::Error::InvalidArgument(_))) => {
                "Command index not found!".to_string()
            }
            Error::Store(StoreError::Record(firenpc_core::Error::InvalidSkin(_))) => {
                "That skin could not be read!".to_string()
            }
            Error::Store(_) | Error::Config(_) | Error::Io(_) => {
                "Failed to save NPC data! Changes may be lost on restart.".to_string()
            }
        }
    }
}
