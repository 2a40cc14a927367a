//! Body extractor accepting JSON or URL-encoded forms.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;

/// Deserializes the request body as JSON when the content type says so,
/// otherwise as `application/x-www-form-urlencoded`.
///
/// Rejections become [`AppError::Validation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                debug!("Rejected JSON body: {}", e);
                AppError::bad_request(e.body_text())
            })?;
            return Ok(Self(value));
        }

        let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
            debug!("Rejected form body: {}", e);
            AppError::bad_request(e.body_text())
        })?;
        Ok(Self(value))
    }
}
