use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// `GET /health`: database and storage probes.
///
/// Answers 200 with `"status": "healthy"` when every probe passes, otherwise
/// 503 with `"status": "degraded"` and the failing probe marked `"error"`.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse::from(state.health_service.check().await);

    if response.is_healthy() {
        return (StatusCode::OK, Json(response));
    }

    tracing::warn!(checks = ?response.checks, "Health check degraded");
    (StatusCode::SERVICE_UNAVAILABLE, Json(response))
}
