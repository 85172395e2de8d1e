//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    from: String,
    to: String,
    created_at: DateTime<Utc>,
    metadata: Json<Map<String, Value>>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.from, r.to, r.created_at).with_metadata(r.metadata.0)
    }
}

/// PostgreSQL repository for link retrieval.
///
/// Returns the whole row: columns added to `links` after the initial
/// migration travel in [`Link::metadata`].
///
/// The pool's role is expected to bypass row-level security, so every
/// link in the schema is visible.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_from(&self, from: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT l.id, l."from", l."to", l.created_at,
                   to_jsonb(l) - ARRAY['id', 'from', 'to', 'created_at'] AS metadata
            FROM links l
            WHERE l."from" = $1
            ORDER BY l.id
            LIMIT 1
            "#,
        )
        .bind(from)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
