//! Handlers for the timestamp API.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::timestamp::TimestampResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current instant.
///
/// # Endpoint
///
/// `GET /api`
pub async fn now_handler(State(state): State<AppState>) -> Result<Json<TimestampResponse>, AppError> {
    let timestamp = state.timestamp_service.interpret("")?;
    Ok(Json(timestamp.into()))
}

/// Interprets a date string or epoch milliseconds.
///
/// # Endpoint
///
/// `GET /api/{date_string}`
///
/// # Response
///
/// ```json
/// { "unix": 1451001600000, "utc": "Fri, 25 Dec 2015 00:00:00 GMT" }
/// ```
///
/// # Errors
///
/// Returns `{"error": "Invalid Date"}` if the token is neither a supported
/// calendar string nor an epoch value in range.
pub async fn timestamp_handler(
    State(state): State<AppState>,
    Path(date_string): Path<String>,
) -> Result<Json<TimestampResponse>, AppError> {
    let timestamp = state.timestamp_service.interpret(&date_string)?;
    Ok(Json(timestamp.into()))
}
