//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "message": "memory" },
///     "cache": { "status": "ok", "message": "disabled" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage_check = check_storage(&state).await;
    let cache_check = check_cache(&state).await;

    let all_healthy = storage_check.is_ok() && cache_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            storage: storage_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Pings the short link and user stores.
async fn check_storage(state: &AppState) -> CheckStatus {
    let result = match state.short_link_service.health_check().await {
        Ok(()) => state.exercise_service.health_check().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => CheckStatus::ok(state.storage.to_string()),
        Err(e) => CheckStatus::error(format!("Storage error: {}", e)),
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    let backend = state.cache.backend();
    if state.cache.health_check().await {
        CheckStatus::ok(backend)
    } else {
        CheckStatus::error(format!("{} connection failed", backend))
    }
}
