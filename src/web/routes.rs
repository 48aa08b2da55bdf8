//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_link_form_handler, create_vendor_form_handler, dashboard_handler,
    delete_link_form_handler, delete_vendor_form_handler, links_page_handler, login_page_handler,
    login_submit_handler, logout_handler, orders_page_handler, password_page_handler,
    password_reset_page_handler, password_reset_submit_handler, password_update_handler,
    register_page_handler, register_submit_handler, update_order_status_form_handler,
    vendors_page_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Protected dashboard routes requiring authentication.
///
/// Protected via [`crate::web::middleware::web_auth`] (cookie-based).
///
/// # Endpoints
///
/// - `GET  /` - Dashboard home with vendor summary and link metrics
/// - `GET  /links` - Link management page
/// - `POST /links` - Create a tracked link
/// - `POST /links/{id}/delete` - Delete a tracked link
/// - `GET  /vendors` - Vendor management page
/// - `POST /vendors` - Create a vendor
/// - `POST /vendors/{id}/delete` - Delete a vendor
/// - `GET  /orders` - Order management page, filterable by status
/// - `POST /orders/{id}/status` - Update an order's fulfillment status
/// - `GET  /password` - Password change page
/// - `POST /password` - Change the current password
/// - `POST /logout` - Sign out
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route(
            "/links",
            get(links_page_handler).post(create_link_form_handler),
        )
        .route("/links/{id}/delete", post(delete_link_form_handler))
        .route(
            "/vendors",
            get(vendors_page_handler).post(create_vendor_form_handler),
        )
        .route("/vendors/{id}/delete", post(delete_vendor_form_handler))
        .route("/orders", get(orders_page_handler))
        .route("/orders/{id}/status", post(update_order_status_form_handler))
        .route(
            "/password",
            get(password_page_handler).post(password_update_handler),
        )
        .route("/logout", post(logout_handler))
}

/// Public dashboard routes without authentication.
///
/// # Endpoints
///
/// - `GET  /login` - Login page
/// - `POST /login` - Sign in
/// - `GET  /register` - Registration page
/// - `POST /register` - Create an account
/// - `GET  /password/reset` - Password reset request page
/// - `POST /password/reset` - Request a password reset email
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(login_page_handler).post(login_submit_handler),
        )
        .route(
            "/register",
            get(register_page_handler).post(register_submit_handler),
        )
        .route(
            "/password/reset",
            get(password_reset_page_handler).post(password_reset_submit_handler),
        )
}
