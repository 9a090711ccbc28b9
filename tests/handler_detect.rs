mod common;

use axum::http::StatusCode;
use social_links::domain::MatchMode;

#[tokio::test]
async fn test_detect_known_platform() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .get("/api/detect")
        .add_query_param("url", "HTTPS://WWW.FACEBOOK.com/x")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["platformKey"], "facebook");
    assert_eq!(json["label"], "Facebook");
    assert_eq!(json["url"], "HTTPS://WWW.FACEBOOK.com/x");
}

#[tokio::test]
async fn test_detect_unknown_platform() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .get("/api/detect")
        .add_query_param("url", "https://example.com/linktree")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["platformKey"].is_null());
    assert!(json["label"].is_null());
}

#[tokio::test]
async fn test_detect_domain_anywhere_in_url() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .get("/api/detect")
        .add_query_param("url", "https://linktr.ee/band?from=instagram.com")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["platformKey"], "instagram");
}

#[tokio::test]
async fn test_detect_host_mode_ignores_path() {
    let server = common::create_test_server(common::create_test_state_with_mode(MatchMode::Host));

    let response = server
        .get("/api/detect")
        .add_query_param("url", "https://linktr.ee/band?from=instagram.com")
        .await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>()["platformKey"].is_null());
}

#[tokio::test]
async fn test_detect_malformed_url_is_not_an_error() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .get("/api/detect")
        .add_query_param("url", "not a url at all")
        .await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>()["platformKey"].is_null());
}

#[tokio::test]
async fn test_detect_rejects_long_url() {
    let server = common::create_test_server(common::create_test_state());
    let url = format!("https://example.com/{}", "a".repeat(2100));

    let response = server.get("/api/detect").add_query_param("url", url).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_detect_requires_url_param() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/api/detect").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
