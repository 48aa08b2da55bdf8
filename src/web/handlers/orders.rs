//! Order management page and form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::domain::entities::{Order, OrderStatus};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::formatters::format_currency;

/// One row of the orders table, with display fields pre-formatted.
pub struct OrderRow {
    pub id: i64,
    pub reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub status_value: &'static str,
    pub status_label: &'static str,
    pub badge_class: &'static str,
    pub total: String,
    pub tracking_number: String,
    pub placed_at: String,
}

impl From<Order> for OrderRow {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            status_value: order.status.as_str(),
            status_label: order.status.label(),
            badge_class: order.status.badge_class(),
            total: format_currency(order.total),
            tracking_number: order.tracking_number.unwrap_or_default(),
            placed_at: order.placed_at.format("%Y-%m-%d").to_string(),
            reference: order.reference,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
        }
    }
}

/// Template for the order management page.
///
/// Renders `templates/orders.html` with:
/// - Status filter links
/// - Order table with status badges and per-row status updates
#[derive(Template, WebTemplate)]
#[template(path = "orders.html")]
pub struct OrdersTemplate {
    pub orders: Vec<OrderRow>,
    /// Wire value of the active status filter, empty when showing all.
    pub filter: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

/// Renders the order management page.
///
/// # Endpoint
///
/// `GET /orders?status=pending`
pub async fn orders_page_handler(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<OrdersTemplate, AppError> {
    let orders = state.order_service.list_orders(query.status).await?;

    Ok(OrdersTemplate {
        orders: orders.into_iter().map(OrderRow::from).collect(),
        filter: query.status.map(|s| s.as_str().to_string()).unwrap_or_default(),
    })
}

/// Form payload for updating an order's fulfillment status.
#[derive(Debug, Deserialize)]
pub struct OrderStatusForm {
    pub status: OrderStatus,
}

/// Handles the per-row status update form.
///
/// # Endpoint
///
/// `POST /orders/{id}/status`
///
/// Redirects back to the orders page on success.
pub async fn update_order_status_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<OrderStatusForm>,
) -> Result<Redirect, AppError> {
    state.order_service.update_status(id, form.status).await?;
    Ok(Redirect::to("/dashboard/orders"))
}
