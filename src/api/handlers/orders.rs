//! Handlers for order endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::orders::{
    ListOrdersQuery, OrderListResponse, OrderResponse, UpdateOrderStatusRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists orders, optionally filtered by fulfillment status.
///
/// # Endpoint
///
/// `GET /api/orders?status=pending`
pub async fn order_list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<OrderListResponse>, AppError> {
    let orders = state.order_service.list_orders(query.status).await?;

    let total_amount = orders.iter().map(|o| o.total).sum();
    let items: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();

    Ok(Json(OrderListResponse {
        total: items.len(),
        total_amount,
        items,
    }))
}

/// Moves an order to a new fulfillment status.
///
/// # Endpoint
///
/// `PATCH /api/orders/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id is unknown.
/// Returns 400 Bad Request on an unrecognized status.
pub async fn update_order_status_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state.order_service.update_status(id, payload.status).await?;

    Ok(Json(order.into()))
}
