//! Immutable record storage for Keep.
//!
//! This crate is the core of the facade: it defines the [`ImmutableStorage`]
//! surface (store / get / remove — deliberately no update), the persisted
//! [`ImmutableRecord`] entity, and the [`EntityStorageConnector`] that
//! implements the surface over any [`keep_entity::EntityStore`].
//!
//! The lifecycle per record is `absent → stored → absent`: `store` is the
//! only constructor, `get` is a pure read, and `remove` is the only terminal
//! transition, gated on the creating controller.

pub mod connector;
pub mod error;
pub mod record;
pub mod traits;

pub use connector::{EntityStorageConnector, ENTITY_STORAGE_METHOD};
pub use error::{StorageOperation, StoreError, StoreResult};
pub use record::ImmutableRecord;
pub use traits::{GetOutcome, ImmutableStorage, StoreOutcome};
