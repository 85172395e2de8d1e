//! Handlers for slug resolution.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Resolves a slug to its stored link.
///
/// # Endpoint
///
/// `GET /api/link/{from}`
///
/// # Response
///
/// `200 OK` with the link record, or `null` when no link has this slug:
///
/// ```json
/// { "id": 1, "from": "gh", "to": "https://github.com", "created_at": "2025-03-01T12:00:00Z" }
/// ```
///
/// Bodies are cached for `CACHE_TTL_SECONDS`; see
/// [`crate::application::services::LinkService::resolve`].
///
/// # Errors
///
/// Returns 500 Internal Server Error on database failure.
pub async fn link_handler(
    Path(from): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let body = state.link_service.resolve(Some(&from)).await?;
    Ok(json_body(body))
}

/// `GET /api/link` with no slug. Always `null`, without touching the store.
pub async fn link_index_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = state.link_service.resolve(None).await?;
    Ok(json_body(body))
}

fn json_body(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
