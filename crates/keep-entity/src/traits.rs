use crate::error::EntityResult;

/// A persistable entity with a string primary key.
pub trait Entity: Clone + Send + Sync {
    /// The key this entity is stored and fetched under.
    fn primary_key(&self) -> &str;
}

/// Key-value persistence engine for a single entity type.
///
/// All implementations must satisfy these invariants:
/// - `set` has upsert semantics: writing a key that exists replaces the value.
/// - `get`/`set`/`remove` on a single key are atomic with respect to each
///   other; callers layer no locking on top.
/// - The store never interprets entity contents beyond the primary key.
/// - All engine failures are propagated, never silently ignored.
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Fetch an entity by primary key.
    ///
    /// Returns `Ok(None)` if no entity exists under the key.
    fn get(&self, key: &str) -> EntityResult<Option<E>>;

    /// Persist an entity under its primary key (upsert).
    fn set(&self, entity: E) -> EntityResult<()>;

    /// Delete the entity under the key. Returns `true` if it existed.
    fn remove(&self, key: &str) -> EntityResult<bool>;

    /// Check whether an entity exists under the key.
    ///
    /// Default implementation calls `get()`. Engines may override to avoid
    /// materializing the entity.
    fn contains(&self, key: &str) -> EntityResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
