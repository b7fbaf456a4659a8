use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use keep_protocol::ErrorBody;
use keep_store::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// A required request header is missing or empty.
    #[error("missing required header {0}")]
    MissingHeader(&'static str),

    /// The request body could not be decoded.
    #[error("invalid request payload: {0}")]
    Payload(#[from] keep_protocol::ProtocolError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingHeader(_) | Self::Payload(_) => StatusCode::BAD_REQUEST,
            Self::Store(e) => match e {
                StoreError::Malformed(_)
                | StoreError::NamespaceMismatch { .. }
                | StoreError::EmptyArgument(_) => StatusCode::BAD_REQUEST,
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                StoreError::NotAuthorized(_) => StatusCode::FORBIDDEN,
                StoreError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Wire error body carried in the response.
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::MissingHeader(name) => {
                ErrorBody::new(keep_protocol::codes::INVALID_ARGUMENT, self.to_string())
                    .with_properties(json!({ "header": name }))
            }
            Self::Payload(_) => {
                ErrorBody::new(keep_protocol::codes::INVALID_ARGUMENT, self.to_string())
            }
            Self::Store(e) => {
                let body = ErrorBody::new(e.code(), e.to_string());
                match e {
                    StoreError::NotFound(id) | StoreError::NotAuthorized(id) => {
                        body.with_properties(json!({ "id": id }))
                    }
                    StoreError::NamespaceMismatch { urn, expected } => {
                        body.with_properties(json!({ "id": urn, "expected": expected }))
                    }
                    StoreError::EmptyArgument(name) => {
                        body.with_properties(json!({ "argument": name }))
                    }
                    _ => body,
                }
            }
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                ErrorBody::new("internalError", self.to_string())
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(self.body())).into_response()
    }
}
