//! Handler for click recording.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::click::ClickResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Records one click for a link.
///
/// # Endpoint
///
/// `POST /api/click/{id}`
///
/// No request body is read. Every call inserts a new row.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": 17, "link": 42, "created_at": "2025-03-01T12:00:00Z" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if `id` is not a positive integer (nothing is inserted)
/// - 400 Bad Request if no link has that id
/// - 500 Internal Server Error on database failure
pub async fn click_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ClickResponse>), AppError> {
    let click = state.click_service.record_click(&id).await?;

    Ok((StatusCode::CREATED, Json(click.into())))
}
