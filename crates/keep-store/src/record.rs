use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use keep_entity::Entity;
use keep_types::RecordId;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Persisted immutable record.
///
/// The layout mirrors the backing store's logical schema: a 64-hex-char
/// primary key, the controller that created the record, and the payload
/// base64-encoded for the store. Once written, nothing updates a record in
/// place; the only transitions are creation and deletion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmutableRecord {
    pub id: String,
    pub controller: String,
    pub data: String,
}

impl ImmutableRecord {
    /// Build a record from a generated id, its controller, and raw payload
    /// bytes.
    pub fn new(id: &RecordId, controller: impl Into<String>, payload: &[u8]) -> Self {
        Self {
            id: id.to_hex(),
            controller: controller.into(),
            data: BASE64.encode(payload),
        }
    }

    /// Decode the stored payload back into raw bytes.
    pub fn payload(&self) -> StoreResult<Vec<u8>> {
        BASE64.decode(&self.data).map_err(|e| {
            StoreError::storage(
                crate::error::StorageOperation::Getting,
                keep_entity::EntityError::Serialization(format!(
                    "stored payload for {} is not valid base64: {e}",
                    self.id
                )),
            )
        })
    }
}

impl Entity for ImmutableRecord {
    fn primary_key(&self) -> &str {
        &self.id
    }
}
