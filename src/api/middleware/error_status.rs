//! Error status policy.
//!
//! Client errors carry their [`ErrorKind`] in the response extensions. Unless
//! distinct status codes are enabled, their status is rewritten to `200 OK`,
//! which is what the tutorial clients were written against. Server errors
//! always keep their status.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::error::ErrorKind;
use crate::state::HttpOptions;

/// Applies the configured error status policy to a response.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/shorturl", post(shorten_handler))
///     .layer(middleware::from_fn_with_state(state.options, error_status::layer));
/// ```
pub async fn layer(State(options): State<HttpOptions>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    if options.error_status_codes {
        return response;
    }

    if let Some(kind) = response.extensions().get::<ErrorKind>().copied()
        && kind.is_client_error()
    {
        *response.status_mut() = StatusCode::OK;
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use axum::{Router, body::Body, middleware, routing::get};
    use tower::ServiceExt;

    fn app(error_status_codes: bool) -> Router {
        let options = HttpOptions {
            behind_proxy: false,
            error_status_codes,
        };

        Router::new()
            .route("/invalid", get(|| async { AppError::InvalidUrl }))
            .route("/internal", get(|| async { AppError::internal("boom") }))
            .route("/gone", get(|| async { StatusCode::GONE }))
            .layer(middleware::from_fn_with_state(options, layer))
    }

    async fn status(app: Router, uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_client_errors_downgraded_by_default() {
        assert_eq!(status(app(false), "/invalid").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_distinct_codes_when_enabled() {
        assert_eq!(status(app(true), "/invalid").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_internal_and_untagged_responses_untouched() {
        assert_eq!(
            status(app(false), "/internal").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status(app(false), "/gone").await, StatusCode::GONE);
    }
}
