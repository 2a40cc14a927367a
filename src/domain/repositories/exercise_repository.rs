//! Repository trait for the append-only exercise log.

use crate::domain::entities::{Exercise, NewExercise};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Appends an exercise and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError>;

    /// Returns every exercise of a user in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Exercise>, AppError>;
}
