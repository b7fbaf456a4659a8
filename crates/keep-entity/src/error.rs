use thiserror::Error;

/// Errors from entity-store operations.
#[derive(Debug, Error)]
pub enum EntityError {
    /// Serialization or deserialization failure inside the engine.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage backend is unavailable or refused the operation.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for entity-store operations.
pub type EntityResult<T> = Result<T, EntityError>;
