/// HTTP endpoint paths for the Keep protocol.
pub mod endpoints {
    /// `POST` stores a record.
    pub const RECORDS: &str = "/";
    /// `GET`/`DELETE` address a record by its URN suffix.
    pub const RECORD_BY_ID: &str = "/:id";
    pub const HEALTH: &str = "/health";
}

/// Header carrying the calling controller's identifier.
///
/// Authentication is out of scope: the header is a required request
/// attribute on mutating calls, not a verified credential.
pub const CONTROLLER_HEADER: &str = "x-keep-controller";

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
