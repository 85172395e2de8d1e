//! Link entity representing a short slug mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A stored short link.
///
/// `from` is the public slug and is unique across the table; `to` is the
/// destination the slug points at. The record is serialized as-is in
/// responses, so field names follow the table columns. Columns beyond the
/// core four land in `metadata` and are flattened back into the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: i64,
    pub from: String,
    pub to: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, from: String, to: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            from,
            to,
            created_at,
            metadata: Map::new(),
        }
    }

    /// Attaches the record's remaining columns.
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }
}
