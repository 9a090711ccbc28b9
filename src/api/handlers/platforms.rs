//! Handler for the platform registry listing.

use axum::{Json, extract::State};

use crate::api::dto::platforms::PlatformListResponse;
use crate::state::AppState;

/// Lists known platforms in detection order.
///
/// # Endpoint
///
/// `GET /api/platforms`
///
/// # Response
///
/// ```json
/// {
///   "total": 21,
///   "items": [
///     {
///       "key": "email",
///       "label": "Email",
///       "matchers": [{ "kind": "scheme", "pattern": "mailto" }]
///     }
///   ]
/// }
/// ```
pub async fn platforms_handler(State(state): State<AppState>) -> Json<PlatformListResponse> {
    let items = state.resolver.registry().platforms().to_vec();

    Json(PlatformListResponse {
        total: items.len(),
        items,
    })
}
