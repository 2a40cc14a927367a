mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::legacy_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["checks"]["storage"]["message"], "memory");
    assert_eq!(json["checks"]["cache"]["message"], "disabled");
}
