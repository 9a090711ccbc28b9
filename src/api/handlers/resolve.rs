//! Handler for batch resolution of social links.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::resolve::{ResolveRequest, ResolveResponse, ResolveSummary};
use crate::domain::entities::SocialLinkEntry;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves authored social links into renderable links.
///
/// # Endpoint
///
/// `POST /api/resolve`
///
/// # Request Body
///
/// ```json
/// {
///   "links": [
///     { "_key": "a1", "url": "https://instagram.com/band", "platform": "twitter" },
///     { "_key": "a2", "url": "https://example.com/shop", "customTitle": "Shop" }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "resolved": 2, "dropped": 0 },
///   "items": [
///     { "key": "a1", "platformKey": "instagram", "displayLabel": "Instagram", "url": "https://instagram.com/band" },
///     { "key": "a2", "platformKey": "genericLink", "displayLabel": "Shop", "url": "https://example.com/shop" }
///   ]
/// }
/// ```
///
/// Entries without a URL are dropped and counted in `summary.dropped`.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, AppError> {
    payload.validate()?;

    let entries: Vec<SocialLinkEntry> = payload.links.into_iter().map(Into::into).collect();
    let items = state.resolver.resolve_all(&entries);

    let total = entries.len();
    let resolved = items.len();

    tracing::debug!(total, resolved, "Resolved social links");

    Ok(Json(ResolveResponse {
        summary: ResolveSummary {
            total,
            resolved,
            dropped: total - resolved,
        },
        items,
    }))
}
