//! DTOs for the single URL detection endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for `GET /api/detect`.
#[derive(Debug, Deserialize, Validate)]
pub struct DetectQuery {
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: String,
}

/// Detection result; platform fields are `null` when nothing matched.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    pub url: String,
    pub platform_key: Option<&'static str>,
    pub label: Option<&'static str>,
}
