use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use keep_protocol::{
    encode_data, GetRequest, GetResponse, HealthResponse, StoreRequest, StoreResponse,
    CONTROLLER_HEADER,
};
use keep_store::ImmutableStorage;
use keep_types::RecordUrn;

use crate::error::{ServerError, ServerResult};

pub type SharedStorage = Arc<dyn ImmutableStorage>;

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// `POST /` — store a record.
pub async fn store_handler(
    State(storage): State<SharedStorage>,
    headers: HeaderMap,
    Json(request): Json<StoreRequest>,
) -> ServerResult<(StatusCode, Json<StoreResponse>)> {
    let controller = controller_from(&headers)?;
    let data = request.decode()?;

    let outcome = storage.store(&controller, &data).await?;
    Ok((
        StatusCode::CREATED,
        Json(StoreResponse {
            id: outcome.id.to_string(),
            receipt: outcome.receipt,
        }),
    ))
}

/// `GET /:id` — fetch a record; an optional body controls payload inclusion.
pub async fn get_handler(
    State(storage): State<SharedStorage>,
    Path(id): Path<String>,
    request: Option<Json<GetRequest>>,
) -> ServerResult<Json<GetResponse>> {
    let urn = parse_urn(&id)?;
    let include_data = request.map(|Json(r)| r.include_data).unwrap_or(true);

    let outcome = storage.get(&urn, include_data).await?;
    Ok(Json(GetResponse {
        data: outcome.data.map(|bytes| encode_data(&bytes)),
        receipt: outcome.receipt,
    }))
}

/// `DELETE /:id` — remove a record.
pub async fn remove_handler(
    State(storage): State<SharedStorage>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ServerResult<StatusCode> {
    let controller = controller_from(&headers)?;
    let urn = parse_urn(&id)?;

    storage.remove(&controller, &urn).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_urn(id: &str) -> ServerResult<RecordUrn> {
    RecordUrn::parse(id)
        .map_err(keep_store::StoreError::from)
        .map_err(ServerError::from)
}

fn controller_from(headers: &HeaderMap) -> ServerResult<String> {
    let value = headers
        .get(CONTROLLER_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if value.is_empty() {
        return Err(ServerError::MissingHeader(CONTROLLER_HEADER));
    }
    Ok(value.to_string())
}
