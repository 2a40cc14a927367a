mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use micro_apis::routes::app_router;
use micro_apis::state::HttpOptions;
use serde_json::{Value, json};

#[tokio::test]
async fn test_calendar_date() {
    let server = common::legacy_server();

    let response = server.get("/api/2015-12-25").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "unix": 1451001600000_i64,
        "utc": "Fri, 25 Dec 2015 00:00:00 GMT"
    }));
}

#[tokio::test]
async fn test_epoch_millis() {
    let server = common::legacy_server();

    let response = server.get("/api/1451001600000").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["unix"], 1451001600000_i64);
    assert_eq!(json["utc"], "Fri, 25 Dec 2015 00:00:00 GMT");
}

#[tokio::test]
async fn test_small_integer_is_a_year() {
    let server = common::legacy_server();

    let json = server.get("/api/2015").await.json::<Value>();

    assert_eq!(json["unix"], 1420070400000_i64);
    assert_eq!(json["utc"], "Thu, 01 Jan 2015 00:00:00 GMT");
}

#[tokio::test]
async fn test_text_date_in_path() {
    let server = common::legacy_server();

    let json = server
        .get("/api/December%2025,%202015")
        .await
        .json::<Value>();

    assert_eq!(json["unix"], 1451001600000_i64);
}

#[tokio::test]
async fn test_common_text_dates_in_path() {
    let server = common::legacy_server();

    let cases = [
        ("/api/05%20October%202011,%20GMT", 1317772800000_i64),
        ("/api/October%205,%202011%20GMT", 1317772800000_i64),
        ("/api/Fri,%2025%20Dec%202015", 1451001600000_i64),
        ("/api/2015%2F12%2F25", 1451001600000_i64),
        ("/api/Mon%20Dec%2025%202015", 1451001600000_i64),
    ];

    for (path, unix) in cases {
        let json = server.get(path).await.json::<Value>();
        assert_eq!(json["unix"], unix, "{path}");
    }
}

#[tokio::test]
async fn test_now() {
    let server = common::legacy_server();

    let before = Utc::now().timestamp_millis();
    let json = server.get("/api").await.json::<Value>();
    let after = Utc::now().timestamp_millis();

    let unix = json["unix"].as_i64().unwrap();
    assert!(before <= unix && unix <= after);
    assert!(json["utc"].as_str().unwrap().ends_with(" GMT"));
}

#[tokio::test]
async fn test_now_with_trailing_slash() {
    let state = common::create_test_state(HttpOptions::default());
    let app = Router::new()
        .fallback_service(app_router(state))
        .layer(common::MockConnectInfoLayer);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/").await;

    response.assert_status_ok();
    assert!(response.json::<Value>()["unix"].is_i64());
}

#[tokio::test]
async fn test_invalid_date_legacy_status() {
    let server = common::legacy_server();

    let response = server.get("/api/invalid-garbage").await;

    response.assert_status_ok();
    response.assert_json(&json!({"error": "Invalid Date"}));
}

#[tokio::test]
async fn test_invalid_date_strict_status() {
    let server = common::strict_server();

    let response = server.get("/api/invalid-garbage").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Invalid Date"}));
}

#[tokio::test]
async fn test_epoch_out_of_range() {
    let server = common::legacy_server();

    let response = server.get("/api/8640000000000001").await;

    response.assert_json(&json!({"error": "Invalid Date"}));
}
