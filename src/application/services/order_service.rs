//! Customer order listing and fulfillment service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Order, OrderStatus};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// Service for tracking customer orders through fulfillment.
pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    /// Creates a new order service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists orders, optionally narrowed to one fulfillment status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_orders(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, AppError> {
        let orders = self.repository.list().await?;
        Ok(match status {
            Some(status) => orders.into_iter().filter(|o| o.status == status).collect(),
            None => orders,
        })
    }

    /// Retrieves a single order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no order matches the id.
    pub async fn get_order(&self, id: i64) -> Result<Order, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found", json!({ "id": id })))
    }

    /// Moves an order to a new fulfillment status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the status is not a recognized
    /// fulfillment stage.
    /// Returns [`AppError::NotFound`] if no order matches the id.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> Result<Order, AppError> {
        if status == OrderStatus::Unknown {
            return Err(AppError::bad_request(
                "Unrecognized order status",
                json!({ "id": id }),
            ));
        }

        self.repository
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found", json!({ "id": id })))
    }
}
