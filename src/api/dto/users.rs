//! DTOs for the user and exercise endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

use crate::domain::entities::{Exercise, ExerciseEntry, ExerciseLog, User};
use crate::utils::dates::to_date_string;

/// Path placeholder left in place by tutorial forms that post to the
/// unexpanded `/api/users/:_id/exercises` route.
pub const USER_ID_PLACEHOLDER: &str = ":_id";

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
}

/// Exercise submission.
///
/// Form bodies carry every value as a string, so `duration` accepts both a
/// JSON number and its decimal string.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct LogExerciseRequest {
    /// User id from the body, used when the path holds the placeholder.
    #[serde(rename = ":_id", default)]
    pub user_id: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "Duration must be a positive number of minutes"))]
    pub duration: Option<u32>,

    #[serde(default)]
    pub date: Option<String>,
}

impl LogExerciseRequest {
    /// Picks the user id from the path, or from the body when the path
    /// segment is the unexpanded placeholder.
    pub fn resolve_user_id(&self, path_id: &str) -> String {
        if path_id == USER_ID_PLACEHOLDER {
            self.user_id.clone().unwrap_or_default()
        } else {
            path_id.to_string()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

/// A newly logged exercise. `_id` is the owning user's id.
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: u32,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<ExerciseEntry> for ExerciseResponse {
    fn from(entry: ExerciseEntry) -> Self {
        Self {
            username: entry.user.username,
            description: entry.exercise.description,
            duration: entry.exercise.duration,
            date: to_date_string(&entry.exercise.date),
            id: entry.user.id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: u32,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: to_date_string(&exercise.date),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
}

impl From<ExerciseLog> for LogResponse {
    fn from(log: ExerciseLog) -> Self {
        let count = log.count();
        Self {
            username: log.user.username,
            count,
            id: log.user.id,
            log: log.exercises.into_iter().map(LogEntry::from).collect(),
        }
    }
}
