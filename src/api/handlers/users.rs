//! Handlers for the exercise tracker.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::users::{
    CreateUserRequest, ExerciseResponse, LogExerciseRequest, LogResponse, UserResponse,
};
use crate::api::extract::JsonOrForm;
use crate::application::services::LogExercise;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user.
///
/// # Endpoint
///
/// `POST /api/users` with `{ "username": "..." }`
///
/// # Errors
///
/// Returns `{"error": "That username <name> is already taken"}` for duplicates.
pub async fn create_user_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.exercise_service.register_user(&payload.username).await?;
    Ok(Json(user.into()))
}

/// Lists all users in registration order.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.exercise_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Appends an exercise to a user's log.
///
/// # Endpoint
///
/// `POST /api/users/{_id}/exercises` with
/// `{ "description": "...", "duration": 30, "date": "2015-12-25" }`
///
/// `date` is optional and falls back to today. When the path segment is the
/// literal `:_id`, the user id is taken from the `:_id` body field.
///
/// # Errors
///
/// Returns `{"error": "No username found!"}` for unknown users.
pub async fn log_exercise_handler(
    State(state): State<AppState>,
    Path(path_id): Path<String>,
    JsonOrForm(payload): JsonOrForm<LogExerciseRequest>,
) -> Result<Json<ExerciseResponse>, AppError> {
    payload.validate()?;

    let user_id = payload.resolve_user_id(&path_id);
    let duration = payload
        .duration
        .ok_or_else(|| AppError::bad_request("Duration is required"))?;

    let entry = state
        .exercise_service
        .log_exercise(
            &user_id,
            LogExercise {
                description: payload.description,
                duration,
                date: payload.date,
            },
        )
        .await?;

    Ok(Json(entry.into()))
}

/// Returns a user's full exercise log.
///
/// # Endpoint
///
/// `GET /api/users/{_id}/logs`
pub async fn exercise_log_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<LogResponse>, AppError> {
    let log = state.exercise_service.get_log(&user_id).await?;
    Ok(Json(log.into()))
}
