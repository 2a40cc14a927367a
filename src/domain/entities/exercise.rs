//! Exercise entries and the views composed from them.

use chrono::NaiveDate;

use super::User;

/// A logged exercise. `user_id` refers to a [`User`] without owning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub user_id: String,
    pub description: String,
    /// Minutes.
    pub duration: u32,
    pub date: NaiveDate,
}

/// Input data for logging an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub duration: u32,
    pub date: NaiveDate,
}

impl From<NewExercise> for Exercise {
    fn from(new_exercise: NewExercise) -> Self {
        Self {
            id: new_exercise.id,
            user_id: new_exercise.user_id,
            description: new_exercise.description,
            duration: new_exercise.duration,
            date: new_exercise.date,
        }
    }
}

/// A freshly logged exercise together with its owner.
#[derive(Debug, Clone)]
pub struct ExerciseEntry {
    pub user: User,
    pub exercise: Exercise,
}

/// A user's full exercise history in insertion order.
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub user: User,
    pub exercises: Vec<Exercise>,
}

impl ExerciseLog {
    pub fn count(&self) -> usize {
        self.exercises.len()
    }
}
