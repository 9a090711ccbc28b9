mod common;

use axum::http::StatusCode;
use serde_json::json;
use social_links::domain::Precedence;

#[tokio::test]
async fn test_resolve_single_link() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/resolve")
        .json(&json!({
            "links": [
                { "_key": "a1", "url": "https://open.spotify.com/artist/123" }
            ]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"]["total"], 1);
    assert_eq!(json["summary"]["resolved"], 1);
    assert_eq!(json["summary"]["dropped"], 0);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["key"], "a1");
    assert_eq!(items[0]["platformKey"], "spotify");
    assert_eq!(items[0]["displayLabel"], "Spotify");
    assert_eq!(items[0]["url"], "https://open.spotify.com/artist/123");
}

#[tokio::test]
async fn test_resolve_detection_overrides_manual_platform() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/resolve")
        .json(&json!({
            "links": [
                { "url": "https://instagram.com/band", "platform": "twitter" }
            ]
        }))
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"][0]["platformKey"], "instagram");
}

#[tokio::test]
async fn test_resolve_manual_precedence() {
    let server = common::create_test_server(common::create_test_state_with(Precedence::Manual));

    let response = server
        .post("/api/resolve")
        .json(&json!({
            "links": [
                { "url": "https://instagram.com/band", "manualPlatform": "twitter" }
            ]
        }))
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"][0]["platformKey"], "twitter");
    assert_eq!(json["items"][0]["displayLabel"], "X (Twitter)");
}

#[tokio::test]
async fn test_resolve_drops_links_without_url() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/resolve")
        .json(&json!({
            "links": [
                { "_key": "a", "url": "", "platform": "facebook" },
                { "_key": "b", "url": "https://bandcamp.com/label" },
                { "_key": "c", "platform": "youtube" }
            ]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["summary"]["resolved"], 1);
    assert_eq!(json["summary"]["dropped"], 2);
    assert_eq!(json["items"][0]["key"], "b");
}

#[tokio::test]
async fn test_resolve_generic_link_with_custom_title() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/resolve")
        .json(&json!({
            "links": [
                { "url": "https://example.com/linktree", "customTitle": "My Linktree" },
                { "url": "https://example.org" }
            ]
        }))
        .await;

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();

    assert_eq!(items[0]["platformKey"], "genericLink");
    assert_eq!(items[0]["displayLabel"], "My Linktree");
    assert_eq!(items[1]["platformKey"], "genericLink");
    assert_eq!(items[1]["displayLabel"], "Link");
}

#[tokio::test]
async fn test_resolve_cleans_pasted_manual_platform() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/resolve")
        .json(&json!({
            "links": [
                { "url": "https://shop.label.com", "platform": "\u{200B}bandcamp\u{FEFF}" }
            ]
        }))
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"][0]["platformKey"], "bandcamp");
    assert_eq!(json["items"][0]["displayLabel"], "Bandcamp");
}

#[tokio::test]
async fn test_resolve_empty_batch() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.post("/api/resolve").json(&json!({ "links": [] })).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"]["total"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_resolve_rejects_oversized_batch() {
    let server = common::create_test_server(common::create_test_state());
    let links: Vec<_> = (0..501)
        .map(|i| json!({ "url": format!("https://example.com/{i}") }))
        .collect();

    let response = server.post("/api/resolve").json(&json!({ "links": links })).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"].get("links").is_some());
}

#[tokio::test]
async fn test_resolve_rejects_long_url() {
    let server = common::create_test_server(common::create_test_state());
    let url = format!("https://example.com/{}", "a".repeat(2100));

    let response = server
        .post("/api/resolve")
        .json(&json!({ "links": [{ "url": url }] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_resolve_rejects_malformed_body() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/resolve")
        .json(&json!({ "urls": "nope" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
