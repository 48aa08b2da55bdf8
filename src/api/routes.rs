//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_link_handler, create_vendor_handler, delete_link_handler, delete_vendor_handler,
    link_list_handler, link_metrics_handler, order_list_handler, update_order_status_handler,
    update_vendor_handler, vendor_list_handler, vendor_stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch},
};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /links`          - List tracked links with derived rates
/// - `POST   /links`          - Create a tracked link
/// - `GET    /links/metrics`  - Performance grouped by kind and traffic source
/// - `DELETE /links/{id}`     - Delete a tracked link
/// - `GET    /vendors`        - List vendors
/// - `POST   /vendors`        - Create a vendor
/// - `PATCH  /vendors/{id}`   - Partially update a vendor
/// - `DELETE /vendors/{id}`   - Delete a vendor
/// - `GET    /vendors/stats`  - Aggregated vendor statistics
/// - `GET    /orders`         - List orders, filterable by status
/// - `PATCH  /orders/{id}`    - Move an order to a new fulfillment status
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(link_list_handler).post(create_link_handler))
        .route("/links/metrics", get(link_metrics_handler))
        .route("/links/{id}", delete(delete_link_handler))
        .route(
            "/vendors",
            get(vendor_list_handler).post(create_vendor_handler),
        )
        .route("/vendors/stats", get(vendor_stats_handler))
        .route(
            "/vendors/{id}",
            patch(update_vendor_handler).delete(delete_vendor_handler),
        )
        .route("/orders", get(order_list_handler))
        .route("/orders/{id}", patch(update_order_status_handler))
}
