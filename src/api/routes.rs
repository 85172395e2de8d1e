//! API route configuration.

use crate::api::handlers::{click_handler, link_handler, link_index_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /click/{id}`   - Record one click for link `id`
/// - `GET  /link/{from}`  - Resolve a slug to its link record (cached)
/// - `GET  /link`         - Slug absent; always `null`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/click/{id}", post(click_handler))
        .route("/link", get(link_index_handler))
        .route("/link/{from}", get(link_handler))
}
