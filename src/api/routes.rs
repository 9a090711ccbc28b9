//! API route configuration.

use crate::api::handlers::{detect_handler, platforms_handler, resolve_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /platforms` - Platform registry in detection order
/// - `GET  /detect`    - Detect the platform of a single URL
/// - `POST /resolve`   - Resolve a batch of social link entries
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/platforms", get(platforms_handler))
        .route("/detect", get(detect_handler))
        .route("/resolve", post(resolve_handler))
}
