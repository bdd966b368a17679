use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;

use super::memory::MemoryStore;
use super::protocol::{
    ENDPOINT_GET, ENDPOINT_HEALTH, ENDPOINT_KEYS, ENDPOINT_PUT, GetResponse, KeyQuery,
    KeysResponse, PutRequest, PutResponse,
};

/// Routes served by a standalone store node.
pub fn store_node_router(store: Arc<MemoryStore>) -> Router {
    Router::new()
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_GET, get(handle_get))
        .route(ENDPOINT_PUT, post(handle_put))
        .route(ENDPOINT_KEYS, get(handle_keys))
        .layer(Extension(store))
}

pub async fn handle_health() -> &'static str {
    "OK"
}

pub async fn handle_put(
    Extension(store): Extension<Arc<MemoryStore>>,
    Json(req): Json<PutRequest>,
) -> (StatusCode, Json<PutResponse>) {
    if req.key.is_empty() {
        tracing::error!("Rejected put with empty key");
        return (
            StatusCode::BAD_REQUEST,
            Json(PutResponse { success: false }),
        );
    }

    let bytes = req.value.len();
    store.store_local(req.key.clone(), req.value);
    tracing::debug!(
        "PUT {} ({} bytes, {} keys held)",
        req.key,
        bytes,
        store.local_entry_count()
    );
    (StatusCode::OK, Json(PutResponse { success: true }))
}

pub async fn handle_get(
    Extension(store): Extension<Arc<MemoryStore>>,
    Query(KeyQuery { key }): Query<KeyQuery>,
) -> (StatusCode, Json<GetResponse>) {
    let value = store.get_local(&key);
    if value.is_none() {
        tracing::debug!("GET {} (absent)", key);
    }
    (StatusCode::OK, Json(GetResponse { value }))
}

pub async fn handle_keys(
    Extension(store): Extension<Arc<MemoryStore>>,
) -> (StatusCode, Json<KeysResponse>) {
    let keys = store.local_keys();
    tracing::debug!("Listing {} keys", keys.len());
    (StatusCode::OK, Json(KeysResponse { keys }))
}
