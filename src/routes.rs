//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check (public, not rate limited)
//! - `/api/*`        - Detection and resolution API (rate limited per IP)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, RateLimitSettings};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(
    state: AppState,
    limits: RateLimitSettings,
) -> anyhow::Result<NormalizePath<Router>> {
    let api_router = api::routes::api_routes().layer(rate_limit::layer(limits)?);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
