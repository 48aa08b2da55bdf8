//! Repository trait for customer orders.

use async_trait::async_trait;

use crate::domain::entities::{Order, OrderStatus};
use crate::error::AppError;

/// Repository interface for orders.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::MemoryOrderStore`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Lists all orders, most recent first.
    async fn list(&self) -> Result<Vec<Order>, AppError>;

    /// Finds an order by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;

    /// Sets the fulfillment status of an order.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(order))` with the updated record
    /// - `Ok(None)` if the id is unknown
    async fn update_status(&self, id: i64, status: OrderStatus)
    -> Result<Option<Order>, AppError>;
}
