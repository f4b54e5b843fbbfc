//! Health check endpoints for monitoring and orchestration.
//!
//! - `/api/v1/health` - Service identity (static payload, no dependencies)
//! - `/api/v1/health/ready` - Readiness probe (verifies database connectivity)
//! - `/api/v1/health/live` - Liveness probe (process is up, nothing else)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// GET /health - Service name and version.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "panchito",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health/ready - Readiness probe.
///
/// Round-trips a trivial query against the pool. An unreachable database
/// is reported as 503 with the driver's error message, so orchestrators
/// stop routing traffic here until the database is back.
pub async fn ready(State(state): State<AppState>) -> Response {
    match state.db.ping().await {
        Ok(()) => Json(json!({
            "status": "ready",
            "database": "connected",
        }))
        .into_response(),
        Err(error) => {
            tracing::warn!(%error, "readiness probe failed to reach the database");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not ready",
                    "database": "disconnected",
                    "error": error.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// GET /health/live - Liveness probe.
pub async fn live() -> impl IntoResponse {
    Json(json!({ "status": "alive" }))
}
