use async_trait::async_trait;
use keep_entity::EntityStore;
use keep_types::{Receipt, RecordUrn, URN_NAMESPACE};
use serde_json::json;

use crate::error::{StorageOperation, StoreError, StoreResult};
use crate::record::ImmutableRecord;
use crate::traits::{GetOutcome, ImmutableStorage, StoreOutcome};

/// Method tag the entity-storage connector registers under.
pub const ENTITY_STORAGE_METHOD: &str = "entity-storage";

/// Immutable record store backed by a generic entity-storage engine.
///
/// The connector owns the record lifecycle: it mints the record id, enforces
/// that identifiers are addressed to it, and gates deletion on the creating
/// controller. Everything below that line — durability, single-key atomicity —
/// is the engine's job, injected at construction time.
pub struct EntityStorageConnector<S> {
    engine: S,
}

impl<S> EntityStorageConnector<S>
where
    S: EntityStore<ImmutableRecord>,
{
    /// Create a connector over the given engine.
    pub fn new(engine: S) -> Self {
        Self { engine }
    }

    /// The backing engine.
    pub fn engine(&self) -> &S {
        &self.engine
    }

    /// Check that a URN is addressed to this backend.
    ///
    /// Both the namespace and the method must match; an identifier minted by
    /// a different backend must fail here rather than surface as a lookup
    /// miss, so dispatchers can tell "wrong backend" from "doesn't exist".
    fn check_addressing(&self, urn: &RecordUrn) -> StoreResult<()> {
        if urn.namespace() != URN_NAMESPACE || urn.method() != ENTITY_STORAGE_METHOD {
            return Err(StoreError::NamespaceMismatch {
                urn: urn.to_string(),
                expected: ENTITY_STORAGE_METHOD.into(),
            });
        }
        Ok(())
    }

    fn receipt(&self) -> Receipt {
        Receipt::new(json!({ "method": ENTITY_STORAGE_METHOD }))
    }
}

#[async_trait]
impl<S> ImmutableStorage for EntityStorageConnector<S>
where
    S: EntityStore<ImmutableRecord>,
{
    async fn store(&self, controller: &str, data: &[u8]) -> StoreResult<StoreOutcome> {
        if controller.is_empty() {
            return Err(StoreError::EmptyArgument("controller"));
        }
        if data.is_empty() {
            return Err(StoreError::EmptyArgument("data"));
        }

        let id = keep_types::RecordId::generate();
        let record = ImmutableRecord::new(&id, controller, data);
        self.engine
            .set(record)
            .map_err(|e| StoreError::storage(StorageOperation::Storing, e))?;
        tracing::debug!(id = %id, controller, bytes = data.len(), "stored immutable record");

        Ok(StoreOutcome {
            id: RecordUrn::for_record(ENTITY_STORAGE_METHOD, &id)?,
            receipt: self.receipt(),
        })
    }

    async fn get(&self, id: &RecordUrn, include_data: bool) -> StoreResult<GetOutcome> {
        self.check_addressing(id)?;

        let record = self
            .engine
            .get(id.specific())
            .map_err(|e| StoreError::storage(StorageOperation::Getting, e))?
            .ok_or_else(|| StoreError::NotFound(id.specific().to_string()))?;

        let data = if include_data {
            Some(record.payload()?)
        } else {
            None
        };
        Ok(GetOutcome {
            data,
            receipt: self.receipt(),
        })
    }

    async fn remove(&self, controller: &str, id: &RecordUrn) -> StoreResult<()> {
        if controller.is_empty() {
            return Err(StoreError::EmptyArgument("controller"));
        }
        self.check_addressing(id)?;

        let record = self
            .engine
            .get(id.specific())
            .map_err(|e| StoreError::storage(StorageOperation::Removing, e))?
            .ok_or_else(|| StoreError::NotFound(id.specific().to_string()))?;

        if record.controller != controller {
            return Err(StoreError::NotAuthorized(id.to_string()));
        }

        let existed = self
            .engine
            .remove(id.specific())
            .map_err(|e| StoreError::storage(StorageOperation::Removing, e))?;
        if !existed {
            // A racing remove won between our fetch and our delete.
            return Err(StoreError::NotFound(id.specific().to_string()));
        }
        tracing::debug!(id = %id, controller, "removed immutable record");
        Ok(())
    }
}

impl<S> std::fmt::Debug for EntityStorageConnector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStorageConnector")
            .field("method", &ENTITY_STORAGE_METHOD)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keep_entity::{EntityError, EntityResult, InMemoryEntityStore};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn connector() -> EntityStorageConnector<InMemoryEntityStore<ImmutableRecord>> {
        EntityStorageConnector::new(InMemoryEntityStore::new())
    }

    #[tokio::test]
    async fn store_then_get_roundtrips() {
        let store = connector();
        let outcome = store.store("did:example:alice", b"precious bytes").await.unwrap();
        assert_eq!(outcome.id.namespace(), "immutable");
        assert_eq!(outcome.id.method(), "entity-storage");
        assert_eq!(outcome.id.specific().len(), 64);

        let fetched = store.get(&outcome.id, true).await.unwrap();
        assert_eq!(fetched.data.as_deref(), Some(&b"precious bytes"[..]));
    }

    #[tokio::test]
    async fn get_without_data_returns_receipt_only() {
        let store = connector();
        let outcome = store.store("alice", b"bytes").await.unwrap();

        let fetched = store.get(&outcome.id, false).await.unwrap();
        assert!(fetched.data.is_none());
        assert_eq!(
            fetched.receipt.as_value()["method"],
            serde_json::json!("entity-storage")
        );
    }

    #[tokio::test]
    async fn store_remove_get_fails_not_found() {
        let store = connector();
        let outcome = store.store("alice", b"ephemeral").await.unwrap();

        store.remove("alice", &outcome.id).await.unwrap();
        let err = store.get(&outcome.id, true).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn second_remove_fails_not_found() {
        let store = connector();
        let outcome = store.store("alice", b"once").await.unwrap();

        store.remove("alice", &outcome.id).await.unwrap();
        let err = store.remove("alice", &outcome.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn remove_by_non_controller_is_denied_and_record_survives() {
        let store = connector();
        let outcome = store.store("alice", b"hers").await.unwrap();

        let err = store.remove("mallory", &outcome.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotAuthorized(_)));

        // The record is still there and readable.
        let fetched = store.get(&outcome.id, true).await.unwrap();
        assert_eq!(fetched.data.as_deref(), Some(&b"hers"[..]));
    }

    #[tokio::test]
    async fn foreign_method_is_a_mismatch_not_a_miss() {
        let store = connector();
        let urn = RecordUrn::new("immutable", "other-method", "00".repeat(32)).unwrap();
        let err = store.get(&urn, true).await.unwrap_err();
        assert!(matches!(err, StoreError::NamespaceMismatch { .. }));
    }

    #[tokio::test]
    async fn foreign_namespace_is_a_mismatch() {
        let store = connector();
        let urn = RecordUrn::new("mutable", "entity-storage", "00".repeat(32)).unwrap();
        let err = store.remove("alice", &urn).await.unwrap_err();
        assert!(matches!(err, StoreError::NamespaceMismatch { .. }));
    }

    #[tokio::test]
    async fn unknown_id_with_correct_addressing_is_not_found() {
        let store = connector();
        let urn = RecordUrn::new("immutable", "entity-storage", "ab".repeat(32)).unwrap();
        let err = store.get(&urn, true).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn stored_ids_are_distinct() {
        let store = connector();
        let a = store.store("alice", b"same bytes").await.unwrap();
        let b = store.store("alice", b"same bytes").await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.engine().len(), 2);
    }

    // Engine double that counts calls; used to assert guards fire before any
    // backing-store round trip.
    #[derive(Default)]
    struct CountingEngine {
        calls: AtomicUsize,
    }

    impl EntityStore<ImmutableRecord> for CountingEngine {
        fn get(&self, _key: &str) -> EntityResult<Option<ImmutableRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }

        fn set(&self, _entity: ImmutableRecord) -> EntityResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn remove(&self, _key: &str) -> EntityResult<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        }
    }

    #[tokio::test]
    async fn empty_arguments_never_reach_the_engine() {
        let store = EntityStorageConnector::new(CountingEngine::default());
        let urn = RecordUrn::new("other", "method", "x").unwrap();

        let err = store.store("", b"data").await.unwrap_err();
        assert!(matches!(err, StoreError::EmptyArgument("controller")));

        let err = store.store("alice", b"").await.unwrap_err();
        assert!(matches!(err, StoreError::EmptyArgument("data")));

        let err = store.remove("", &urn).await.unwrap_err();
        assert!(matches!(err, StoreError::EmptyArgument("controller")));

        // Mis-addressed URNs are also rejected before the engine sees a call.
        let err = store.get(&urn, true).await.unwrap_err();
        assert!(matches!(err, StoreError::NamespaceMismatch { .. }));

        assert_eq!(store.engine().calls.load(Ordering::SeqCst), 0);
    }

    // Engine double whose every call fails; used to assert failure wrapping.
    struct FailingEngine;

    impl EntityStore<ImmutableRecord> for FailingEngine {
        fn get(&self, _key: &str) -> EntityResult<Option<ImmutableRecord>> {
            Err(EntityError::Backend("connection refused".into()))
        }

        fn set(&self, _entity: ImmutableRecord) -> EntityResult<()> {
            Err(EntityError::Backend("connection refused".into()))
        }

        fn remove(&self, _key: &str) -> EntityResult<bool> {
            Err(EntityError::Backend("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn engine_failures_wrap_with_operation_tag() {
        use std::error::Error as _;

        let store = EntityStorageConnector::new(FailingEngine);
        let urn = RecordUrn::new("immutable", "entity-storage", "00".repeat(32)).unwrap();

        let err = store.store("alice", b"data").await.unwrap_err();
        assert_eq!(err.code(), "storingFailed");
        assert!(err.source().unwrap().to_string().contains("connection refused"));

        let err = store.get(&urn, true).await.unwrap_err();
        assert_eq!(err.code(), "gettingFailed");

        let err = store.remove("alice", &urn).await.unwrap_err();
        assert_eq!(err.code(), "removingFailed");
    }
}
