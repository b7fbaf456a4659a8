use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::EntityResult;
use crate::traits::{Entity, EntityStore};

/// In-memory, HashMap-based entity store.
///
/// Intended for tests and embedding. All entities are held in memory behind a
/// `RwLock` for safe concurrent access. Entities are cloned on read.
pub struct InMemoryEntityStore<E> {
    entities: RwLock<HashMap<String, E>>,
}

impl<E> InMemoryEntityStore<E> {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entities currently stored.
    pub fn len(&self) -> usize {
        self.entities.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entities from the store.
    pub fn clear(&self) {
        self.entities.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all primary keys in the store.
    pub fn all_keys(&self) -> Vec<String> {
        let map = self.entities.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl<E> Default for InMemoryEntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityStore<E> for InMemoryEntityStore<E> {
    fn get(&self, key: &str) -> EntityResult<Option<E>> {
        let map = self.entities.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn set(&self, entity: E) -> EntityResult<()> {
        let mut map = self.entities.write().expect("lock poisoned");
        map.insert(entity.primary_key().to_string(), entity);
        Ok(())
    }

    fn remove(&self, key: &str) -> EntityResult<bool> {
        let mut map = self.entities.write().expect("lock poisoned");
        Ok(map.remove(key).is_some())
    }

    fn contains(&self, key: &str) -> EntityResult<bool> {
        let map = self.entities.read().expect("lock poisoned");
        Ok(map.contains_key(key))
    }
}

impl<E> std::fmt::Debug for InMemoryEntityStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryEntityStore")
            .field("entity_count", &count)
            .finish()
    }
}
