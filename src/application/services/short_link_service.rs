//! Short link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{Inserted, ShortLinkRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::url_validator::validate_url;

/// Service for shortening URLs and resolving short codes.
///
/// A URL always maps to the same code: creation goes through the
/// repository's atomic insert-if-absent. Resolution is read-through cached.
pub struct ShortLinkService {
    repository: Arc<dyn ShortLinkRepository>,
    cache: Arc<dyn CacheService>,
}

impl ShortLinkService {
    pub fn new(repository: Arc<dyn ShortLinkRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Returns the short link for `url`, creating one on first submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] unless `url` starts with `http://` or
    /// `https://` and parses as an absolute URL.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn shorten(&self, url: &str) -> Result<ShortLink, AppError> {
        validate_url(url).map_err(|e| {
            debug!("Rejected url {:?}: {}", url, e);
            AppError::InvalidUrl
        })?;

        match self.repository.insert_if_absent(url).await? {
            Inserted::New(link) => {
                info!("Short link {} created for {}", link.short_code, link.original_url);
                Ok(link)
            }
            Inserted::Existing(link) => {
                debug!("Short link {} reused for {}", link.short_code, link.original_url);
                Ok(link)
            }
        }
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never issued.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, short_code: i64) -> Result<String, AppError> {
        let cache_key = short_code.to_string();

        match self.cache.get_url(&cache_key).await {
            Ok(Some(url)) => {
                debug!("Cache HIT for {}", cache_key);
                return Ok(url);
            }
            Ok(None) => debug!("Cache MISS for {}", cache_key),
            Err(e) => warn!("Cache error for {}: {}", cache_key, e),
        }

        let link = self
            .repository
            .find_by_code(short_code)
            .await?
            .ok_or(AppError::NotFound)?;

        if let Err(e) = self
            .cache
            .set_url(&cache_key, &link.original_url, None)
            .await
        {
            warn!("Failed to cache short link {}: {}", cache_key, e);
        }

        Ok(link.original_url)
    }

    /// Checks that the backing store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockShortLinkRepository;
    use crate::infrastructure::cache::{CacheResult, NullCache};
    use crate::infrastructure::persistence::MemoryShortLinkRepository;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    fn link(code: i64, url: &str) -> ShortLink {
        ShortLink::new(code, url.to_string(), Utc::now())
    }

    fn memory_service() -> ShortLinkService {
        ShortLinkService::new(
            Arc::new(MemoryShortLinkRepository::new()),
            Arc::new(NullCache::new()),
        )
    }

    /// Cache double that records writes.
    #[derive(Default)]
    struct RecordingCache {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl CacheService for RecordingCache {
        async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
            Ok(self.entries.lock().await.get(short_code).cloned())
        }

        async fn set_url(
            &self,
            short_code: &str,
            original_url: &str,
            _ttl_seconds: Option<u64>,
        ) -> CacheResult<()> {
            self.entries
                .lock()
                .await
                .insert(short_code.to_string(), original_url.to_string());
            Ok(())
        }

        async fn health_check(&self) -> bool {
            true
        }

        fn backend(&self) -> &'static str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_shorten_is_idempotent() {
        let service = memory_service();

        let first = service.shorten("https://example.com").await.unwrap();
        let second = service.shorten("https://example.com").await.unwrap();

        assert_eq!(first.short_code, second.short_code);
        assert_eq!(
            service.resolve(first.short_code).await.unwrap(),
            "https://example.com"
        );
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url_without_touching_storage() {
        let mut mock_repo = MockShortLinkRepository::new();
        mock_repo.expect_insert_if_absent().times(0);

        let service = ShortLinkService::new(Arc::new(mock_repo), Arc::new(NullCache::new()));

        for url in ["ftp://x.com", "example.com", "", "https://"] {
            assert!(
                matches!(service.shorten(url).await, Err(AppError::InvalidUrl)),
                "{url} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_shorten_passes_url_unchanged() {
        let mut mock_repo = MockShortLinkRepository::new();
        mock_repo
            .expect_insert_if_absent()
            .withf(|url| url == "https://EXAMPLE.com/Path")
            .times(1)
            .returning(|url| Ok(Inserted::New(link(7, url))));

        let service = ShortLinkService::new(Arc::new(mock_repo), Arc::new(NullCache::new()));
        let created = service.shorten("https://EXAMPLE.com/Path").await.unwrap();

        assert_eq!(created.short_code, 7);
        assert_eq!(created.original_url, "https://EXAMPLE.com/Path");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let service = memory_service();
        assert!(matches!(service.resolve(42).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_resolve_populates_cache_then_serves_from_it() {
        let mut mock_repo = MockShortLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .withf(|code| *code == 3)
            .times(1)
            .returning(|code| Ok(Some(link(code, "https://cached.com"))));

        let cache = Arc::new(RecordingCache::default());
        let service = ShortLinkService::new(Arc::new(mock_repo), cache.clone());

        assert_eq!(service.resolve(3).await.unwrap(), "https://cached.com");
        assert_eq!(service.resolve(3).await.unwrap(), "https://cached.com");
        assert_eq!(
            cache.entries.lock().await.get("3").map(String::as_str),
            Some("https://cached.com")
        );
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut mock_repo = MockShortLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .returning(|_| Err(AppError::internal("connection reset")));

        let service = ShortLinkService::new(Arc::new(mock_repo), Arc::new(NullCache::new()));
        assert!(matches!(
            service.resolve(1).await,
            Err(AppError::Internal { .. })
        ));
    }
}
