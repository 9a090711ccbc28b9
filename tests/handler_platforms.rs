mod common;

use social_links::domain::entities::GENERIC_LINK;

#[tokio::test]
async fn test_platforms_listed_in_detection_order() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/api/platforms").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(json["total"].as_u64().unwrap() as usize, items.len());

    let keys: Vec<&str> = items.iter().map(|i| i["key"].as_str().unwrap()).collect();
    let music = keys.iter().position(|k| *k == "youtubeMusic").unwrap();
    let youtube = keys.iter().position(|k| *k == "youtube").unwrap();
    assert!(music < youtube);
    assert_eq!(keys.last(), Some(&GENERIC_LINK));
}

#[tokio::test]
async fn test_platform_structure() {
    let server = common::create_test_server(common::create_test_state());

    let json = server.get("/api/platforms").await.json::<serde_json::Value>();
    let facebook = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["key"] == "facebook")
        .unwrap();

    assert_eq!(facebook["label"], "Facebook");
    assert_eq!(facebook["matchers"][0]["kind"], "domain");
    assert_eq!(facebook["matchers"][0]["pattern"], "facebook.com");
}
