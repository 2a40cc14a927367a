//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check: storage and cache
//! - `/api/*`      - Timestamp, whoami, shorturl and exercise APIs
//!
//! # Middleware
//!
//! - **Error status** - Downgrades client errors to `200 OK` unless disabled
//! - **CORS** - Permissive, so the APIs can be exercised from any origin
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{error_status, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and middleware without path normalization.
pub fn api_router(state: AppState) -> Router {
    let options = state.options;

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(middleware::from_fn_with_state(options, error_status::layer))
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/` reaches the same
/// handler as `/api`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
