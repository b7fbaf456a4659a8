use async_trait::async_trait;
use keep_types::{Receipt, RecordUrn};

use crate::error::StoreResult;

/// Outcome of a successful `store` call.
#[derive(Clone, Debug)]
pub struct StoreOutcome {
    /// Structured identifier addressing the new record.
    pub id: RecordUrn,
    /// Opaque acknowledgment from the backend that persisted it.
    pub receipt: Receipt,
}

/// Outcome of a successful `get` call.
#[derive(Clone, Debug)]
pub struct GetOutcome {
    /// The payload bytes, present when the caller asked for data.
    pub data: Option<Vec<u8>>,
    /// Opaque acknowledgment from the backend holding the record.
    pub receipt: Receipt,
}

/// Immutable record storage.
///
/// The surface is deliberately create/read/delete only — no update operation
/// exists, which is what makes the records immutable at this layer. Local
/// connectors and remote clients implement the same trait so callers are
/// indifferent to where the bytes live.
///
/// Implementations must satisfy these invariants:
/// - `store` is the only way a record comes into existence; `remove` is the
///   only way one leaves, and only the creating controller may call it.
/// - A record's identifier is never reused.
/// - Operations validate their arguments before touching the backing store.
/// - Each operation is a single backing-store round trip; no retries.
#[async_trait]
pub trait ImmutableStorage: Send + Sync {
    /// Persist `data` on behalf of `controller`, returning the structured
    /// identifier of the new record.
    async fn store(&self, controller: &str, data: &[u8]) -> StoreResult<StoreOutcome>;

    /// Fetch the record addressed by `id`. When `include_data` is false only
    /// the receipt is returned.
    async fn get(&self, id: &RecordUrn, include_data: bool) -> StoreResult<GetOutcome>;

    /// Delete the record addressed by `id`. Fails unless `controller` is the
    /// record's creator.
    async fn remove(&self, controller: &str, id: &RecordUrn) -> StoreResult<()>;
}
