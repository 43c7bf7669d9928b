use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
}
