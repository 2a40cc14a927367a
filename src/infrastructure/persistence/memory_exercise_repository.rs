//! In-memory implementation of the exercise repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Exercise, NewExercise};
use crate::domain::repositories::ExerciseRepository;
use crate::error::AppError;

/// Process-local exercise storage, one append-only list per user.
#[derive(Debug, Default)]
pub struct MemoryExerciseRepository {
    by_user: RwLock<HashMap<String, Vec<Exercise>>>,
}

impl MemoryExerciseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseRepository for MemoryExerciseRepository {
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError> {
        let exercise = Exercise::from(new_exercise);
        self.by_user
            .write()
            .await
            .entry(exercise.user_id.clone())
            .or_default()
            .push(exercise.clone());
        Ok(exercise)
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Exercise>, AppError> {
        Ok(self
            .by_user
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}
