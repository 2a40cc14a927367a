//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{Inserted, UserRepository};
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    username: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
        }
    }
}

pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert_if_absent(&self, new_user: NewUser) -> Result<Inserted<User>, AppError> {
        let inserted = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, username)
            VALUES ($1, $2)
            ON CONFLICT (username) DO NOTHING
            RETURNING id, username
            "#,
        )
        .bind(&new_user.id)
        .bind(&new_user.username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(row) = inserted {
            return Ok(Inserted::New(row.into()));
        }

        let existing = self
            .find_by_username(&new_user.username)
            .await?
            .ok_or_else(|| AppError::internal("Conflicting user vanished"))?;

        Ok(Inserted::Existing(existing))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let row =
            sqlx::query_as::<_, UserRow>("SELECT id, username FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, username FROM users ORDER BY seq")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
