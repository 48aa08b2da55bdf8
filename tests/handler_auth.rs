mod common;

use axum::http::StatusCode;
use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use serde_json::json;
use quickvendor::api::handlers::link_list_handler;
use quickvendor::api::middleware::auth;
use quickvendor::state::AppState;
use quickvendor::web::handlers::{
    dashboard_handler, password_page_handler, password_update_handler,
};
use quickvendor::web::middleware::web_auth;
use quickvendor::web::routes as web_routes;

fn make_api_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/links", get(link_list_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state);
    TestServer::new(app).unwrap()
}

fn make_web_server(state: AppState) -> TestServer {
    let protected = Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route(
            "/dashboard/password",
            get(password_page_handler).post(password_update_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ));
    let app = Router::new()
        .merge(protected)
        .nest("/dashboard", web_routes::public_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── API BEARER AUTH ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_api_requires_authorization_header() {
    let server = make_api_server(common::create_seeded_state());

    let response = server.get("/api/links").await;

    response.assert_status_unauthorized();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn test_api_rejects_unknown_token() {
    let server = make_api_server(common::create_seeded_state());

    let response = server
        .get("/api/links")
        .authorization_bearer("not-a-session")
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_api_accepts_issued_token() {
    let state = common::create_seeded_state();
    let token = common::sign_in(&state).await;
    let server = make_api_server(state);

    let response = server.get("/api/links").authorization_bearer(&token).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["total"], 4);
}

#[tokio::test]
async fn test_api_rejects_token_after_sign_out() {
    let state = common::create_seeded_state();
    let token = common::sign_in(&state).await;
    state.auth_service.sign_out(&token).await.unwrap();
    let server = make_api_server(state);

    let response = server.get("/api/links").authorization_bearer(&token).await;

    response.assert_status_unauthorized();
}

// ─── WEB COOKIE AUTH ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dashboard_redirects_to_login_without_cookie() {
    let server = make_web_server(common::create_seeded_state());

    let response = server.get("/dashboard").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/dashboard/login"
    );
}

#[tokio::test]
async fn test_dashboard_renders_with_session_cookie() {
    let state = common::create_seeded_state();
    let token = common::sign_in(&state).await;
    let server = make_web_server(state);

    let response = server
        .get("/dashboard")
        .add_header("cookie", format!("auth_token={token}"))
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Dashboard"));
    assert!(body.contains("Vendors"));
}

// ─── LOGIN / REGISTER FLOW ───────────────────────────────────────────────────

#[tokio::test]
async fn test_login_page_renders() {
    let server = make_web_server(common::create_test_state());

    let response = server.get("/dashboard/login").await;

    response.assert_status_ok();
    assert!(response.text().contains("Sign in"));
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let server = make_web_server(common::create_test_state());

    let response = server
        .post("/dashboard/login")
        .form(&json!({
            "email": common::DEMO_EMAIL,
            "password": common::DEMO_PASSWORD
        }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/dashboard");

    let cookie = response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("auth_token="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let server = make_web_server(common::create_test_state());

    let response = server
        .post("/dashboard/login")
        .form(&json!({
            "email": common::DEMO_EMAIL,
            "password": "wrong-password"
        }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/dashboard/login?error=1"
    );
    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn test_register_creates_account_and_signs_in() {
    let server = make_web_server(common::create_test_state());

    let response = server
        .post("/dashboard/register")
        .form(&json!({
            "email": "new@quickvendor.app",
            "password": "long-enough-password"
        }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/dashboard");
    assert!(response.headers().get("set-cookie").is_some());
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let server = make_web_server(common::create_test_state());

    let response = server
        .post("/dashboard/register")
        .form(&json!({
            "email": common::DEMO_EMAIL,
            "password": "long-enough-password"
        }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/dashboard/register?error=1"
    );
}

#[tokio::test]
async fn test_password_update_success() {
    let state = common::create_test_state();
    let token = common::sign_in(&state).await;
    let server = make_web_server(state);

    let response = server
        .post("/dashboard/password")
        .add_header("cookie", format!("auth_token={token}"))
        .form(&json!({ "new_password": "a-longer-password" }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/dashboard/password?updated=1"
    );
}

#[tokio::test]
async fn test_password_update_rejected_redirects_with_error_flag() {
    let state = common::create_test_state();
    let token = common::sign_in(&state).await;
    let server = make_web_server(state);

    let response = server
        .post("/dashboard/password")
        .add_header("cookie", format!("auth_token={token}"))
        .form(&json!({ "new_password": "short" }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/dashboard/password?error=1"
    );
}

#[tokio::test]
async fn test_password_page_renders_error_alert() {
    let state = common::create_test_state();
    let token = common::sign_in(&state).await;
    let server = make_web_server(state);

    let response = server
        .get("/dashboard/password")
        .add_query_param("error", "1")
        .add_header("cookie", format!("auth_token={token}"))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Password was not accepted"));
}

#[tokio::test]
async fn test_password_reset_flow() {
    let server = make_web_server(common::create_test_state());

    let response = server
        .post("/dashboard/password/reset")
        .form(&json!({ "email": common::DEMO_EMAIL }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/dashboard/password/reset?sent=1"
    );
}
