use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A wire payload field is not valid base64.
    #[error("invalid payload encoding: {0}")]
    InvalidPayload(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
