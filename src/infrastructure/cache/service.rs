//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Read-through cache for short code → original URL lookups.
///
/// Short links are never mutated or deleted, so entries need no invalidation;
/// the TTL only bounds memory use. Implementations must be fail-open: backend
/// failures degrade to repository lookups instead of failing the request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached URL for `short_code`, `Ok(None)` on a miss.
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Stores a mapping. `ttl_seconds = None` applies the implementation default.
    async fn set_url(
        &self,
        short_code: &str,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name for health reports.
    fn backend(&self) -> &'static str;
}
