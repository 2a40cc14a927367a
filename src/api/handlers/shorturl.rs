//! Handlers for the URL shortener.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::api::dto::shorturl::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, returning the existing code if it was submitted before.
///
/// # Endpoint
///
/// `POST /api/shorturl` with a JSON or form body `{ "url": "..." }`
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
///
/// # Errors
///
/// Returns `{"error": "Invalid Url"}` for anything but an absolute
/// `http://` or `https://` URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = state.short_link_service.shorten(payload.url.trim()).await?;
    Ok(Json(link.into()))
}

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// Responds with `302 Found`. Non-numeric and unknown codes both yield
/// `{"error": "No such url was found!"}`.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(short_url): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let code: i64 = short_url.parse().map_err(|_| {
        debug!("Non-numeric short code {:?}", short_url);
        AppError::NotFound
    })?;

    let original_url = state.short_link_service.resolve(code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
