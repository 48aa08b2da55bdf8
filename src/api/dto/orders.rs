//! Request/response DTOs for order endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Order, OrderStatus};

/// Query parameters for `GET /api/orders`.
#[derive(Debug, Default, Deserialize)]
pub struct ListOrdersQuery {
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

/// Request body for `PATCH /api/orders/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// An order record with its display label.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub total: f64,
    pub tracking_number: Option<String>,
    pub placed_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            status: order.status,
            status_label: order.status.label(),
            reference: order.reference,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            total: order.total,
            tracking_number: order.tracking_number,
            placed_at: order.placed_at,
        }
    }
}

/// Response body for `GET /api/orders`.
#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub total: usize,
    /// Sum of the listed order totals.
    pub total_amount: f64,
    pub items: Vec<OrderResponse>,
}
