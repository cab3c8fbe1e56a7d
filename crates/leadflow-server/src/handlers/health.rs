//! Liveness probe handler.

use axum::Json;
use chrono::Utc;

use crate::schema::health::HealthResponse;

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}
