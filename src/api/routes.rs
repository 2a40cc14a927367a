//! API route configuration.

use crate::api::handlers::{
    create_user_handler, exercise_log_handler, list_users_handler, log_exercise_handler,
    now_handler, redirect_handler, shorten_handler, timestamp_handler, whoami_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /`                     - Current timestamp
/// - `GET  /{date_string}`        - Interpret a date string or epoch millis
/// - `GET  /whoami`               - Echo client IP, language and user agent
/// - `POST /shorturl`             - Shorten a URL
/// - `GET  /shorturl/{short_url}` - Redirect to the original URL
/// - `GET  /users`                - List users
/// - `POST /users`                - Register a user
/// - `POST /users/{_id}/exercises` - Log an exercise
/// - `GET  /users/{_id}/logs`     - Exercise log for a user
///
/// Static segments take priority over `/{date_string}`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(now_handler))
        .route("/whoami", get(whoami_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/{_id}/exercises", post(log_exercise_handler))
        .route("/users/{_id}/logs", get(exercise_log_handler))
        .route("/{date_string}", get(timestamp_handler))
}
