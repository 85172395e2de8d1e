//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key/value cache for serialized responses.
///
/// Values are opaque strings so a hit can be replayed byte for byte. Every
/// entry lives for the TTL the backend was constructed with.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process cache (moka)
/// - [`crate::infrastructure::cache::RedisCache`] - Shared Redis-backed cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached value.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend fails. Callers treat that as a
    /// miss.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value under `key` for the backend's TTL.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend fails. Callers log and continue.
    async fn set(&self, key: &str, value: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
