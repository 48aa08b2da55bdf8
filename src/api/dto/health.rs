//! Health check response DTOs.

use serde::Serialize;

/// Status of an individual component check.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,
    pub message: Option<String>,
}

/// Per-component health checks.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub link_store: CheckStatus,
    pub vendor_store: CheckStatus,
    pub order_store: CheckStatus,
    pub sessions: CheckStatus,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}
