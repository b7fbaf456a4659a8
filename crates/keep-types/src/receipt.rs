use serde::{Deserialize, Serialize};

/// Opaque acknowledgment produced by a storage backend.
///
/// The internal shape of a receipt is owned by the backend that produced it
/// (for example an anchoring mechanism attaching proof material). This facade
/// passes receipts through unmodified and never re-derives their structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Receipt(pub serde_json::Value);

impl Receipt {
    /// Wrap a backend-produced acknowledgment value.
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// The underlying acknowledgment value.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consume the receipt, yielding the acknowledgment value.
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for Receipt {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
