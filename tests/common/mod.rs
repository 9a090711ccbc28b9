#![allow(dead_code)]

use axum::{
    Router, ServiceExt,
    extract::Request,
    routing::{get, post},
};
use axum_test::TestServer;
use std::net::SocketAddr;
use std::sync::Arc;
use social_links::api::handlers::{detect_handler, platforms_handler, resolve_handler};
use social_links::api::middleware::rate_limit::RateLimitSettings;
use social_links::application::services::LinkResolver;
use social_links::domain::{MatchMode, PlatformRegistry, Precedence};
use social_links::routes::app_router;
use social_links::state::AppState;

pub fn create_test_state() -> AppState {
    create_test_state_with(Precedence::Detected)
}

pub fn create_test_state_with(precedence: Precedence) -> AppState {
    let registry = Arc::new(PlatformRegistry::default());
    AppState::new(LinkResolver::new(registry, precedence))
}

pub fn create_test_state_with_mode(mode: MatchMode) -> AppState {
    let registry = Arc::new(PlatformRegistry::default().with_match_mode(mode));
    AppState::new(LinkResolver::new(registry, Precedence::Detected))
}

/// API routes mounted without the rate limiter, which needs a peer address.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/platforms", get(platforms_handler))
        .route("/api/detect", get(detect_handler))
        .route("/api/resolve", post(resolve_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Full application router over a real socket, so the rate limiter sees
/// the peer address.
pub fn create_app_server(state: AppState, limits: RateLimitSettings) -> TestServer {
    let app = app_router(state, limits).unwrap();
    let app = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app);

    TestServer::builder().http_transport().build(app).unwrap()
}
