use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use keep_types::Receipt;
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, ProtocolResult};

/// Body of `POST /`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRequest {
    /// Payload bytes, base64-encoded.
    pub data: String,
}

impl StoreRequest {
    /// Build a request from raw payload bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            data: BASE64.encode(data),
        }
    }

    /// Decode the payload bytes.
    pub fn decode(&self) -> ProtocolResult<Vec<u8>> {
        decode_data(&self.data)
    }
}

/// Response of `POST /`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    /// Structured identifier of the new record, in canonical string form.
    pub id: String,
    pub receipt: Receipt,
}

/// Optional body of `GET /:id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRequest {
    /// Whether the response should carry the payload. Defaults to true.
    #[serde(default = "default_include_data")]
    pub include_data: bool,
}

fn default_include_data() -> bool {
    true
}

impl Default for GetRequest {
    fn default() -> Self {
        Self { include_data: true }
    }
}

/// Response of `GET /:id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResponse {
    /// Payload bytes, base64-encoded; omitted when not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    pub receipt: Receipt,
}

impl GetResponse {
    /// Decode the payload bytes, if present.
    pub fn decode(&self) -> ProtocolResult<Option<Vec<u8>>> {
        self.data.as_deref().map(decode_data).transpose()
    }
}

/// Error response body.
///
/// `code` is one of the stable error codes in [`codes`]; `properties`
/// carries structured fields (for example the offending identifier) so a
/// client can reconstruct the typed error.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            properties: None,
        }
    }

    pub fn with_properties(mut self, properties: serde_json::Value) -> Self {
        self.properties = Some(properties);
        self
    }
}

/// Stable error codes carried in [`ErrorBody::code`].
pub mod codes {
    pub const MALFORMED_IDENTIFIER: &str = "malformedIdentifier";
    pub const NAMESPACE_MISMATCH: &str = "namespaceMismatch";
    pub const NOT_FOUND: &str = "notFound";
    pub const NOT_AUTHORIZED: &str = "notAuthorized";
    pub const INVALID_ARGUMENT: &str = "invalidArgument";
    pub const STORING_FAILED: &str = "storingFailed";
    pub const GETTING_FAILED: &str = "gettingFailed";
    pub const REMOVING_FAILED: &str = "removingFailed";
}

/// Encode payload bytes for the wire.
pub fn encode_data(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// Decode a wire payload.
pub fn decode_data(data: &str) -> ProtocolResult<Vec<u8>> {
    BASE64
        .decode(data)
        .map_err(|e| ProtocolError::InvalidPayload(e.to_string()))
}
