//! Application error type and its HTTP rendering.
//!
//! Every failure a handler can produce is an [`AppError`]. Errors are rendered
//! as `{"error": "<message>"}`. The response status comes from [`ErrorKind`],
//! and [`crate::api::middleware::error_status`] may downgrade it to `200 OK`
//! to match the legacy tutorial clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// JSON body returned for every error.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Coarse error classification carried in response extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidDate,
    InvalidUrl,
    NotFound,
    DuplicateUsername,
    UserNotFound,
    Validation,
    Conflict,
    Internal,
}

impl ErrorKind {
    /// HTTP status used when distinct status codes are enabled.
    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidDate | Self::InvalidUrl | Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::DuplicateUsername | Self::Conflict => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns true for errors caused by the request rather than the server.
    pub fn is_client_error(self) -> bool {
        !matches!(self, Self::Internal)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid Date")]
    InvalidDate,

    #[error("Invalid Url")]
    InvalidUrl,

    #[error("No such url was found!")]
    NotFound,

    #[error("That username {username} is already taken")]
    DuplicateUsername { username: String },

    #[error("No username found!")]
    UserNotFound,

    #[error("{message}")]
    Validation { message: String },

    /// Storage-level uniqueness violation. Services translate it into a domain error.
    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn duplicate_username(username: impl Into<String>) -> Self {
        Self::DuplicateUsername {
            username: username.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDate => ErrorKind::InvalidDate,
            Self::InvalidUrl => ErrorKind::InvalidUrl,
            Self::NotFound => ErrorKind::NotFound,
            Self::DuplicateUsername { .. } => ErrorKind::DuplicateUsername,
            Self::UserNotFound => ErrorKind::UserNotFound,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Converts the error into its serializable body.
    pub fn to_body(&self) -> ErrorBody {
        let error = match self {
            // Storage details stay in the logs.
            Self::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        };
        ErrorBody { error }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        if kind == ErrorKind::Internal {
            tracing::error!("Internal error: {}", self);
        }

        let mut response = (kind.status(), Json(self.to_body())).into_response();
        response.extensions_mut().insert(kind);
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(format!(
                "Unique constraint violation: {}",
                db.constraint().unwrap_or("unknown")
            ));
        }

        AppError::internal(format!("Database error: {}", e))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field))
                })
            })
            .next()
            .unwrap_or_else(|| "Validation failed".to_string());

        AppError::bad_request(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_legacy_clients() {
        assert_eq!(AppError::InvalidDate.to_string(), "Invalid Date");
        assert_eq!(AppError::InvalidUrl.to_string(), "Invalid Url");
        assert_eq!(AppError::NotFound.to_string(), "No such url was found!");
        assert_eq!(AppError::UserNotFound.to_string(), "No username found!");
        assert_eq!(
            AppError::duplicate_username("alice").to_string(),
            "That username alice is already taken"
        );
    }

    #[test]
    fn test_status_per_kind() {
        assert_eq!(ErrorKind::InvalidDate.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::DuplicateUsername.status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorKind::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(!ErrorKind::Internal.is_client_error());
        assert!(ErrorKind::UserNotFound.is_client_error());
    }

    #[test]
    fn test_internal_body_hides_details() {
        let err = AppError::internal("connection refused on 10.0.0.5");
        assert_eq!(err.to_body().error, "Internal server error");
    }

    #[test]
    fn test_response_carries_kind_extension() {
        let response = AppError::InvalidUrl.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.extensions().get::<ErrorKind>(),
            Some(&ErrorKind::InvalidUrl)
        );
    }
}
