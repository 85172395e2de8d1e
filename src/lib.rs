//! # linkhop
//!
//! Click recording and cached short-link resolution built with Axum and PostgreSQL.
//!
//! ## Endpoints
//!
//! - `POST /api/click/{id}` - insert one click row for link `id`
//! - `GET  /api/link/{from}` - resolve a slug to its link record, or `null`
//! - `GET  /health` - database and cache status
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Link resolution and click recording
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL repositories and caches
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Trust boundary
//!
//! The service connects with a service credential that is expected to bypass
//! row-level security. Anything reachable in the configured schema is
//! readable through `/api/link` and writable through `/api/click`.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{ClickService, LinkService};
    pub use crate::domain::entities::{Click, Link, NewClick};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
