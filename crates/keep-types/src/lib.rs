//! Foundation types for Keep.
//!
//! This crate provides the identifier scheme and acknowledgment types used
//! throughout the Keep system. Every other Keep crate depends on
//! `keep-types`.
//!
//! # Key Types
//!
//! - [`RecordId`] — 256-bit random identifier for a stored record
//! - [`RecordUrn`] — structured identifier (`namespace:method:specific`)
//!   addressing a record across backends
//! - [`Receipt`] — opaque acknowledgment produced by a storage backend

pub mod error;
pub mod id;
pub mod receipt;
pub mod urn;

pub use error::TypeError;
pub use id::RecordId;
pub use receipt::Receipt;
pub use urn::{RecordUrn, URN_NAMESPACE};
