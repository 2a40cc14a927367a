//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::domain::repositories::Inserted;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// Implementations must keep both lookups efficient (URL → code and
/// code → URL) and must make [`Self::insert_if_absent`] atomic so that one
/// URL never receives two codes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryShortLinkRepository`] - In-process bidirectional index
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Stores `original_url` under the next sequence code, or returns the
    /// existing mapping if the URL is already known.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_if_absent(&self, original_url: &str) -> Result<Inserted<ShortLink>, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, short_code: i64) -> Result<Option<ShortLink>, AppError>;

    /// Finds a mapping by its original URL (exact match).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<ShortLink>, AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
