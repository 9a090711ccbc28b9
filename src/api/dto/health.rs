//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of platforms in the loaded registry.
    pub platforms: usize,
    pub precedence: String,
    pub match_mode: String,
}
