mod common;

use axum::{
    Router,
    routing::{delete, get, post},
};
use axum_test::TestServer;
use serde_json::json;
use quickvendor::api::handlers::{
    create_link_handler, delete_link_handler, link_list_handler, link_metrics_handler,
};

fn make_server(seeded: bool) -> TestServer {
    let state = if seeded {
        common::create_seeded_state()
    } else {
        common::create_test_state()
    };
    let app = Router::new()
        .route("/api/links", get(link_list_handler))
        .route("/api/links", post(create_link_handler))
        .route("/api/links/metrics", get(link_metrics_handler))
        .route("/api/links/{id}", delete(delete_link_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_links_list_success() {
    let server = make_server(true);

    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 4);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert!(items[0].get("name").is_some());
    assert!(items[0].get("tracked_url").is_some());
    assert!(items[0].get("ctr").is_some());
    assert!(items[0].get("conversion_rate").is_some());
}

#[tokio::test]
async fn test_links_list_empty_store() {
    let server = make_server(false);

    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_links_list_tracked_url_carries_utm_params() {
    let server = make_server(true);

    let response = server.get("/api/links").await;

    let json = response.json::<serde_json::Value>();
    let first = &json["items"][0];

    let tracked_url = first["tracked_url"].as_str().unwrap();
    assert!(tracked_url.contains("utm_source=instagram"));
    assert!(tracked_url.contains("utm_medium=social"));
    assert!(tracked_url.contains("utm_campaign=spring-launch"));
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_success() {
    let server = make_server(false);

    let response = server
        .post("/api/links")
        .json(&json!({
            "name": "Launch Teaser",
            "kind": "single_product",
            "base_url": "https://shop.example.com/products/teaser",
            "utm_source": "tiktok",
            "utm_campaign": "launch"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["name"], "Launch Teaser");
    assert_eq!(json["views"], 0);
    assert_eq!(json["ctr"], 0.0);

    let tracked_url = json["tracked_url"].as_str().unwrap();
    assert!(tracked_url.starts_with("https://shop.example.com/products/teaser?"));
    assert!(tracked_url.contains("utm_source=tiktok"));
    assert!(tracked_url.contains("utm_campaign=launch"));
    assert!(!tracked_url.contains("utm_medium"));
}

#[tokio::test]
async fn test_create_link_rejects_empty_name() {
    let server = make_server(false);

    let response = server
        .post("/api/links")
        .json(&json!({
            "name": "",
            "kind": "collection",
            "base_url": "https://shop.example.com/collections/all"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_rejects_clicks_exceeding_views() {
    let server = make_server(false);

    let response = server
        .post("/api/links")
        .json(&json!({
            "name": "Bad Counters",
            "kind": "collection",
            "base_url": "https://shop.example.com/collections/all",
            "views": 10,
            "clicks": 20
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_link_rejects_conversions_exceeding_clicks() {
    let server = make_server(false);

    let response = server
        .post("/api/links")
        .json(&json!({
            "name": "Bad Counters",
            "kind": "collection",
            "base_url": "https://shop.example.com/collections/all",
            "views": 100,
            "clicks": 5,
            "conversions": 6
        }))
        .await;

    response.assert_status_bad_request();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_success() {
    let server = make_server(true);

    let response = server.delete("/api/links/1").await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let list = server.get("/api/links").await;
    assert_eq!(list.json::<serde_json::Value>()["total"], 3);
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let server = make_server(true);

    let response = server.delete("/api/links/999").await;

    response.assert_status_not_found();
}

// ─── METRICS ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_metrics_groups_by_kind() {
    let server = make_server(true);

    let response = server.get("/api/links/metrics").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();

    assert_eq!(json["single_product"]["views"], 2110);
    assert_eq!(json["single_product"]["clicks"], 136);
    assert_eq!(json["single_product"]["conversions"], 21);

    assert_eq!(json["collection"]["views"], 2570);
    assert_eq!(json["collection"]["clicks"], 177);
    assert_eq!(json["collection"]["conversions"], 30);
}

#[tokio::test]
async fn test_metrics_rates_are_rate_of_totals() {
    let server = make_server(true);

    let response = server.get("/api/links/metrics").await;

    let json = response.json::<serde_json::Value>();

    let ctr = json["single_product"]["ctr"].as_f64().unwrap();
    assert!((ctr - 136.0 / 2110.0).abs() < 1e-9);

    let conversion_rate = json["single_product"]["conversion_rate"].as_f64().unwrap();
    assert!((conversion_rate - 21.0 / 136.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_metrics_groups_by_traffic_source() {
    let server = make_server(true);

    let response = server.get("/api/links/metrics").await;

    let json = response.json::<serde_json::Value>();
    let by_source = json["by_source"].as_object().unwrap();

    // BTreeMap ordering: direct bucket first, then named sources.
    let keys: Vec<&String> = by_source.keys().collect();
    assert_eq!(keys, ["direct", "instagram", "newsletter"]);

    assert_eq!(by_source["newsletter"]["views"], 3000);
    assert_eq!(by_source["newsletter"]["clicks"], 203);
    assert_eq!(by_source["newsletter"]["conversions"], 37);
}

#[tokio::test]
async fn test_metrics_empty_store_yields_zero_totals() {
    let server = make_server(false);

    let response = server.get("/api/links/metrics").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();

    assert_eq!(json["single_product"]["views"], 0);
    assert_eq!(json["single_product"]["ctr"], 0.0);
    assert_eq!(json["collection"]["conversions"], 0);
    assert_eq!(json["collection"]["conversion_rate"], 0.0);
    assert!(json["by_source"].as_object().unwrap().is_empty());
}
