//! User registry and exercise log.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::application::clock::{Clock, system_clock};
use crate::domain::entities::{ExerciseEntry, ExerciseLog, NewExercise, NewUser, User};
use crate::domain::repositories::{ExerciseRepository, Inserted, UserRepository};
use crate::error::AppError;
use crate::utils::dates::parse_calendar;
use crate::utils::id_generator::{generate_id, is_valid_id};

/// Exercise submission after transport-level validation.
#[derive(Debug, Clone)]
pub struct LogExercise {
    pub description: String,
    pub duration: u32,
    /// Raw date string. Missing, empty or unparsable dates resolve to today.
    pub date: Option<String>,
}

pub struct ExerciseService {
    users: Arc<dyn UserRepository>,
    exercises: Arc<dyn ExerciseRepository>,
    clock: Clock,
}

impl ExerciseService {
    pub fn new(users: Arc<dyn UserRepository>, exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self::with_clock(users, exercises, system_clock())
    }

    pub fn with_clock(
        users: Arc<dyn UserRepository>,
        exercises: Arc<dyn ExerciseRepository>,
        clock: Clock,
    ) -> Self {
        Self {
            users,
            exercises,
            clock,
        }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank username and
    /// [`AppError::DuplicateUsername`] if it is already registered.
    pub async fn register_user(&self, username: &str) -> Result<User, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::bad_request("Username is required"));
        }

        let new_user = NewUser {
            id: new_id()?,
            username: username.to_string(),
        };

        match self.users.insert_if_absent(new_user).await? {
            Inserted::New(user) => {
                info!("Registered user {} ({})", user.username, user.id);
                Ok(user)
            }
            Inserted::Existing(_) => Err(AppError::duplicate_username(username)),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }

    /// Appends an exercise to a user's log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UserNotFound`] if `user_id` is unknown.
    /// Returns [`AppError::Internal`] if storing the exercise fails.
    pub async fn log_exercise(
        &self,
        user_id: &str,
        submission: LogExercise,
    ) -> Result<ExerciseEntry, AppError> {
        let user = self.find_user(user_id).await?;
        let date = self.resolve_date(submission.date.as_deref());

        let exercise = self
            .exercises
            .create(NewExercise {
                id: new_id()?,
                user_id: user.id.clone(),
                description: submission.description,
                duration: submission.duration,
                date,
            })
            .await?;

        Ok(ExerciseEntry { user, exercise })
    }

    /// Returns a user's exercises in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UserNotFound`] if `user_id` is unknown.
    pub async fn get_log(&self, user_id: &str) -> Result<ExerciseLog, AppError> {
        let user = self.find_user(user_id).await?;
        let exercises = self.exercises.find_by_user(&user.id).await?;
        Ok(ExerciseLog { user, exercises })
    }

    /// Checks that the user store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.users.ping().await
    }

    async fn find_user(&self, user_id: &str) -> Result<User, AppError> {
        // Ids are stored lowercase; hex digits match in either case.
        let user_id = user_id.to_ascii_lowercase();

        // Malformed ids cannot name a stored user.
        if !is_valid_id(&user_id) {
            return Err(AppError::UserNotFound);
        }

        self.users
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    fn resolve_date(&self, raw: Option<&str>) -> NaiveDate {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| parse_calendar(s).ok())
            .map(|instant| instant.date_naive())
            .unwrap_or_else(|| (self.clock)().date_naive())
    }
}

fn new_id() -> Result<String, AppError> {
    generate_id().map_err(|e| AppError::internal(format!("Failed to generate id: {}", e)))
}
