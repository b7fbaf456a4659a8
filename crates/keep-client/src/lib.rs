//! REST client for Keep.
//!
//! [`ImmutableStorageClient`] implements the same [`ImmutableStorage`] trait
//! as the local entity-storage connector, but against a remote Keep server.
//! Callers holding a `dyn ImmutableStorage` are indifferent to whether the
//! bytes live in-process or behind HTTP.
//!
//! Error bodies from the server are mapped back into the typed
//! [`keep_store::StoreError`] taxonomy by their stable wire code, so a caller
//! can branch on "doesn't exist" vs "wrong backend" exactly as it would
//! locally. Transport failures wrap as storage failures tagged with the
//! operation in flight. There are no retries.

mod client;

pub use client::ImmutableStorageClient;

#[doc(inline)]
pub use keep_store::ImmutableStorage;
