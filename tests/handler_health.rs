mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use quickvendor::api::handlers::health_handler;

fn make_server() -> TestServer {
    let state = common::create_seeded_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = make_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["link_store"]["status"], "ok");
    assert_eq!(json["checks"]["vendor_store"]["status"], "ok");
    assert_eq!(json["checks"]["order_store"]["status"], "ok");
    assert_eq!(json["checks"]["sessions"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = make_server();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("link_store").is_some());
    assert!(json["checks"].get("vendor_store").is_some());
    assert!(json["checks"].get("order_store").is_some());
    assert!(json["checks"].get("sessions").is_some());
}

#[tokio::test]
async fn test_health_reports_store_sizes() {
    let server = make_server();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["link_store"]["message"], "4 links");
    assert_eq!(json["checks"]["vendor_store"]["message"], "4 vendors");
    assert_eq!(json["checks"]["order_store"]["message"], "4 orders");
}
