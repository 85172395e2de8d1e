//! DTOs for click recording.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;

/// Envelope returned after a click row was inserted.
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub id: i64,
    pub link: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Click> for ClickResponse {
    fn from(click: Click) -> Self {
        Self {
            id: click.id,
            link: click.link,
            created_at: click.created_at,
        }
    }
}
