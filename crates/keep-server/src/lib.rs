//! HTTP server for Keep.
//!
//! Exposes an [`keep_store::ImmutableStorage`] backend over the REST surface
//! defined in `keep-protocol`: `POST /` stores, `GET /:id` fetches,
//! `DELETE /:id` removes, `GET /health` reports liveness. The storage backend
//! is injected at construction; the server adds no storage logic of its own.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::SharedStorage;
pub use router::build_router;
pub use server::KeepServer;
