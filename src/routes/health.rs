use crate::routes::types::HealthCheckResponse;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{SecondsFormat, Utc};

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
