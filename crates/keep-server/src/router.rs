use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use keep_protocol::endpoints;
use tower_http::trace::TraceLayer;

use crate::handler::{self, SharedStorage};

/// Build the axum router over the given storage backend.
pub fn build_router(storage: SharedStorage, max_payload_bytes: usize) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::RECORDS, axum::routing::post(handler::store_handler))
        .route(
            endpoints::RECORD_BY_ID,
            get(handler::get_handler).delete(handler::remove_handler),
        )
        .layer(DefaultBodyLimit::max(max_payload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(storage)
}
