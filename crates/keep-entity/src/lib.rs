//! Generic entity-storage interface for Keep.
//!
//! Keep delegates actual persistence to an external key-value entity engine.
//! This crate models that seam: an [`Entity`] is anything with a primary key,
//! an [`EntityStore`] is anything that can persist entities by that key, and
//! [`InMemoryEntityStore`] is the reference engine used for tests and
//! embedding. Durability, consistency, and single-key atomicity are the
//! engine's responsibility, not this crate's.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{EntityError, EntityResult};
pub use memory::InMemoryEntityStore;
pub use traits::{Entity, EntityStore};
