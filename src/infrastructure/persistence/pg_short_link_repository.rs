//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{Inserted, ShortLinkRepository};
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct ShortLinkRow {
    code: i64,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(row.code, row.original_url, row.created_at)
    }
}

/// PostgreSQL repository for URL mappings.
///
/// Codes come from the `short_links.code` BIGSERIAL; `original_url` carries a
/// UNIQUE constraint that backs insert-if-absent.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn insert_if_absent(&self, original_url: &str) -> Result<Inserted<ShortLink>, AppError> {
        let inserted = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (original_url)
            VALUES ($1)
            ON CONFLICT (original_url) DO NOTHING
            RETURNING code, original_url, created_at
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(row) = inserted {
            return Ok(Inserted::New(row.into()));
        }

        let existing = self
            .find_by_url(original_url)
            .await?
            .ok_or_else(|| AppError::internal("Conflicting short link vanished"))?;

        Ok(Inserted::Existing(existing))
    }

    async fn find_by_code(&self, short_code: i64) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            "SELECT code, original_url, created_at FROM short_links WHERE code = $1",
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            "SELECT code, original_url, created_at FROM short_links WHERE original_url = $1",
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
