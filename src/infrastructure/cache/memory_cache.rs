//! In-process cache backed by moka.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;
use tracing::{debug, trace};

/// Bounded in-memory cache with a fixed time-to-live.
///
/// Default backend when Redis is not configured. Entries are local to the
/// process, so replicas do not share hits.
pub struct MemoryCache {
    inner: Cache<String, String>,
}

impl MemoryCache {
    pub fn new(max_capacity: u64, ttl_seconds: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build();

        debug!(
            "MemoryCache initialized: max_capacity={}, ttl={}s",
            max_capacity, ttl_seconds
        );

        Self { inner }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let value = self.inner.get(key).await;
        if value.is_some() {
            trace!("MemoryCache HIT: {}", key);
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        trace!("MemoryCache SET: {}", key);
        self.inner.insert(key.to_string(), value.to_string()).await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
