//! Cached link resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// JSON body returned when there is nothing to resolve.
pub const EMPTY_BODY: &str = "null";

/// Service resolving `from` slugs to stored links.
///
/// # Cache Strategy
///
/// The serialized response body is cached under `link:{from}`, misses
/// included, so a repeated lookup inside the TTL is replayed byte for byte
/// without touching the database.
///
/// - **Cache hit**: return the cached body
/// - **Cache miss**: query the database, then cache the body
/// - **Cache error**: log and fall back to the database
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            link_repository,
            cache,
        }
    }

    /// Cache key for a slug.
    pub fn cache_key(from: &str) -> String {
        format!("link:{}", from)
    }

    /// Resolves a slug to the JSON body of its link record.
    ///
    /// Returns [`EMPTY_BODY`] when the slug is absent, empty or whitespace
    /// only (without querying anything) and when no link matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Cache failures never
    /// surface.
    pub async fn resolve(&self, from: Option<&str>) -> Result<String, AppError> {
        let Some(from) = from.filter(|f| !f.trim().is_empty()) else {
            return Ok(EMPTY_BODY.to_string());
        };

        let cache_key = Self::cache_key(from);

        match self.cache.get(&cache_key).await {
            Ok(Some(body)) => {
                debug!("Cache HIT for {}", cache_key);
                return Ok(body);
            }
            Ok(None) => debug!("Cache MISS for {}", cache_key),
            Err(e) => error!("Cache error: {}", e),
        }

        let link = self.find_link(from).await?;
        let body = serde_json::to_string(&link).map_err(|e| {
            AppError::internal(
                "Failed to serialize link",
                json!({ "reason": e.to_string() }),
            )
        })?;

        if let Err(e) = self.cache.set(&cache_key, &body).await {
            warn!("Failed to cache {}: {}", cache_key, e);
        }

        Ok(body)
    }

    /// Looks a slug up in the database, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_link(&self, from: &str) -> Result<Option<Link>, AppError> {
        self.link_repository
            .find_by_from(from)
            .await
            .inspect_err(|e| error!("Link lookup for {:?} failed: {}", from, e))
    }

    /// Checks that the link store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}
