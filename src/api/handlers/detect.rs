//! Handler for single URL detection.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::detect::{DetectQuery, DetectResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Detects the platform of one URL.
///
/// # Endpoint
///
/// `GET /api/detect?url=https://instagram.com/band`
///
/// # Response
///
/// ```json
/// { "url": "https://instagram.com/band", "platformKey": "instagram", "label": "Instagram" }
/// ```
///
/// Unknown or malformed URLs return `null` for `platformKey` and `label`.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL exceeds 2048 characters.
pub async fn detect_handler(
    State(state): State<AppState>,
    Query(query): Query<DetectQuery>,
) -> Result<Json<DetectResponse>, AppError> {
    query.validate()?;

    let platform = state.resolver.detect(&query.url);

    Ok(Json(DetectResponse {
        platform_key: platform.map(|p| p.key),
        label: platform.map(|p| p.label),
        url: query.url,
    }))
}
