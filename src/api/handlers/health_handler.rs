//! Health check handler.

use axum::{response::Json, routing::get, Router};

use crate::api::AppState;
use crate::types::HealthResponse;

/// Create health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Liveness check. The directory is in memory, so there is nothing else to probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
