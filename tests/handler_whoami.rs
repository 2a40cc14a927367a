mod common;

use axum_test::TestServer;
use micro_apis::state::HttpOptions;
use serde_json::{Value, json};

#[tokio::test]
async fn test_whoami_echoes_headers() {
    let server = common::legacy_server();

    let response = server
        .get("/api/whoami")
        .add_header("Accept-Language", "en-US,en;q=0.9")
        .add_header("User-Agent", "curl/8.5.0")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "ipaddress": "127.0.0.1",
        "language": "en-US,en;q=0.9",
        "software": "curl/8.5.0"
    }));
}

#[tokio::test]
async fn test_whoami_missing_headers_are_null() {
    let server = common::legacy_server();

    let json = server.get("/api/whoami").await.json::<Value>();

    assert_eq!(json["ipaddress"], "127.0.0.1");
    assert!(json["language"].is_null());
}

#[tokio::test]
async fn test_forwarded_header_ignored_without_proxy() {
    let server = common::legacy_server();

    let json = server
        .get("/api/whoami")
        .add_header("X-Forwarded-For", "203.0.113.7")
        .await
        .json::<Value>();

    assert_eq!(json["ipaddress"], "127.0.0.1");
}

#[tokio::test]
async fn test_forwarded_header_behind_proxy() {
    let app = common::create_test_app(HttpOptions {
        behind_proxy: true,
        error_status_codes: false,
    });
    let server = TestServer::new(app).unwrap();

    let json = server
        .get("/api/whoami")
        .add_header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
        .await
        .json::<Value>();

    assert_eq!(json["ipaddress"], "203.0.113.7");
}
