//! Click entity representing a single recorded use of a link.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A click row as stored.
///
/// `link` references [`crate::domain::entities::Link::id`]. The timestamp is
/// assigned by the database at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Click {
    pub id: i64,
    pub link: i64,
    pub created_at: DateTime<Utc>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(id: i64, link: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            link,
            created_at,
        }
    }
}

/// Input data for recording a new click.
///
/// The referenced link is not checked here; the store's foreign key decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewClick {
    pub link_id: i64,
}
