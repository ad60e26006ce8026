//! Liveness probe.

use axum::Json;

use crate::models::HealthResponse;

/// `GET /api/health` — reports the running version.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crewboss_core::version(),
    })
}
