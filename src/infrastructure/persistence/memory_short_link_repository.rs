//! In-memory implementation of the short link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{Inserted, ShortLinkRepository};
use crate::error::AppError;

/// Bidirectional index over URL mappings.
///
/// `links[code - 1]` holds the mapping for `code`; `by_url` maps each URL back
/// to its code. Both live under one lock so insert-if-absent is atomic.
#[derive(Debug, Default)]
struct ShortLinkIndex {
    by_url: HashMap<String, i64>,
    links: Vec<ShortLink>,
}

impl ShortLinkIndex {
    fn get(&self, short_code: i64) -> Option<&ShortLink> {
        let position = usize::try_from(short_code.checked_sub(1)?).ok()?;
        self.links.get(position)
    }
}

/// Process-local short link storage.
#[derive(Debug, Default)]
pub struct MemoryShortLinkRepository {
    index: RwLock<ShortLinkIndex>,
}

impl MemoryShortLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortLinkRepository for MemoryShortLinkRepository {
    async fn insert_if_absent(&self, original_url: &str) -> Result<Inserted<ShortLink>, AppError> {
        let mut index = self.index.write().await;

        if let Some(&code) = index.by_url.get(original_url)
            && let Some(existing) = index.get(code)
        {
            return Ok(Inserted::Existing(existing.clone()));
        }

        let short_code = i64::try_from(index.links.len() + 1)
            .map_err(|_| AppError::internal("Short code sequence exhausted"))?;
        let link = ShortLink::new(short_code, original_url.to_string(), Utc::now());

        index.by_url.insert(link.original_url.clone(), short_code);
        index.links.push(link.clone());

        Ok(Inserted::New(link))
    }

    async fn find_by_code(&self, short_code: i64) -> Result<Option<ShortLink>, AppError> {
        Ok(self.index.read().await.get(short_code).cloned())
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<ShortLink>, AppError> {
        let index = self.index.read().await;
        Ok(index
            .by_url
            .get(original_url)
            .and_then(|&code| index.get(code))
            .cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_codes_are_sequential_from_one() {
        let repo = MemoryShortLinkRepository::new();

        let first = repo.insert_if_absent("https://a.com").await.unwrap();
        let second = repo.insert_if_absent("https://b.com").await.unwrap();

        assert!(first.is_new());
        assert_eq!(first.into_inner().short_code, 1);
        assert_eq!(second.into_inner().short_code, 2);
    }

    #[tokio::test]
    async fn test_insert_if_absent_returns_existing() {
        let repo = MemoryShortLinkRepository::new();

        let first = repo.insert_if_absent("https://a.com").await.unwrap();
        let again = repo.insert_if_absent("https://a.com").await.unwrap();

        assert!(!again.is_new());
        assert_eq!(first.into_inner(), again.into_inner());
    }

    #[tokio::test]
    async fn test_lookups_in_both_directions() {
        let repo = MemoryShortLinkRepository::new();
        repo.insert_if_absent("https://a.com").await.unwrap();
        repo.insert_if_absent("https://b.com").await.unwrap();

        let by_code = repo.find_by_code(2).await.unwrap().unwrap();
        assert_eq!(by_code.original_url, "https://b.com");

        let by_url = repo.find_by_url("https://a.com").await.unwrap().unwrap();
        assert_eq!(by_url.short_code, 1);

        assert!(repo.find_by_code(0).await.unwrap().is_none());
        assert!(repo.find_by_code(-5).await.unwrap().is_none());
        assert!(repo.find_by_code(3).await.unwrap().is_none());
        assert!(repo.find_by_url("https://c.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_inserts_of_same_url_share_one_code() {
        let repo = Arc::new(MemoryShortLinkRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert_if_absent("https://same.com")
                        .await
                        .unwrap()
                        .into_inner()
                        .short_code
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap(), 1);
        }
        assert!(repo.find_by_code(2).await.unwrap().is_none());
    }
}
