//! PostgreSQL implementation of the exercise repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Exercise, NewExercise};
use crate::domain::repositories::ExerciseRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct ExerciseRow {
    id: String,
    user_id: String,
    description: String,
    duration: i32,
    date: NaiveDate,
}

impl TryFrom<ExerciseRow> for Exercise {
    type Error = AppError;

    fn try_from(row: ExerciseRow) -> Result<Self, Self::Error> {
        let duration = u32::try_from(row.duration)
            .map_err(|_| AppError::internal(format!("Negative duration for {}", row.id)))?;

        Ok(Exercise {
            id: row.id,
            user_id: row.user_id,
            description: row.description,
            duration,
            date: row.date,
        })
    }
}

pub struct PgExerciseRepository {
    pool: Arc<PgPool>,
}

impl PgExerciseRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseRepository for PgExerciseRepository {
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError> {
        let duration = i32::try_from(new_exercise.duration)
            .map_err(|_| AppError::bad_request("Duration is too large"))?;

        let row = sqlx::query_as::<_, ExerciseRow>(
            r#"
            INSERT INTO exercises (id, user_id, description, duration, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, description, duration, date
            "#,
        )
        .bind(&new_exercise.id)
        .bind(&new_exercise.user_id)
        .bind(&new_exercise.description)
        .bind(duration)
        .bind(new_exercise.date)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Exercise>, AppError> {
        let rows = sqlx::query_as::<_, ExerciseRow>(
            r#"
            SELECT id, user_id, description, duration, date
            FROM exercises
            WHERE user_id = $1
            ORDER BY seq
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
