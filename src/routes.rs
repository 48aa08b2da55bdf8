//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Redirect to the dashboard
//! - `GET  /health`      - Health check: stores, sessions (public)
//! - `/api/*`            - REST API (Bearer token required)
//! - `/dashboard/*`      - Web UI (cookie session required)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer token (API) or cookie session (web)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::response::Redirect;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

async fn root_handler() -> Redirect {
    Redirect::permanent("/dashboard")
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let api_router = rate_limit::secure_layer(
        api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        behind_proxy,
    );

    let web_protected = rate_limit::layer(
        web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        )),
        behind_proxy,
    );

    let web_public = rate_limit::secure_layer(web::routes::public_routes(), behind_proxy);

    let web_router = Router::new().merge(web_protected).merge(web_public);

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest("/dashboard", web_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
