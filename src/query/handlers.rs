use super::coordinator::QueryCoordinator;
use super::types::{ErrorResponse, QueryReply, SearchParams, help_text};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(coordinator): Extension<Arc<QueryCoordinator>>,
) -> Result<Json<QueryReply>, (StatusCode, Json<ErrorResponse>)> {
    let query = params
        .into_query(coordinator.default_parallelism())
        .map_err(error_response)?;

    coordinator
        .execute(&query)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn handle_health() -> &'static str {
    "OK"
}

pub async fn handle_help(Extension(coordinator): Extension<Arc<QueryCoordinator>>) -> String {
    help_text(coordinator.default_parallelism())
}

fn error_response(err: crate::error::QueryError) -> (StatusCode, Json<ErrorResponse>) {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
