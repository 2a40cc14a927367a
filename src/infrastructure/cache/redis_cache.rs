//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Redis cache for short link resolution.
///
/// Uses `ConnectionManager` for connection reuse. All operations are
/// fail-open: errors are logged and reported as misses.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// `default_ttl_seconds` applies when [`CacheService::set_url`] is called
    /// with `ttl_seconds = None` (`CACHE_TTL_SECONDS`).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "shorturl:".to_string(),
        })
    }

    fn build_key(&self, short_code: &str) -> String {
        format!("{}{}", self.key_prefix, short_code)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(hit) => Ok(hit),
            Err(e) => {
                warn!("Redis GET error for {}: {}", short_code, e);
                Ok(None)
            }
        }
    }

    async fn set_url(
        &self,
        short_code: &str,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();
        let ttl_seconds = ttl_seconds.unwrap_or(self.default_ttl);

        match conn
            .set_ex::<_, _, ()>(&key, original_url, ttl_seconds)
            .await
        {
            Ok(()) => {
                debug!("Cache SET: {} (TTL: {}s)", short_code, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", short_code, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
