//! In-memory order store.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::{Order, OrderStatus};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// [`OrderRepository`] backed by an in-process table.
pub struct MemoryOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl MemoryOrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_orders(Vec::new())
    }

    /// Creates a store pre-populated with the given orders.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderStore {
    async fn list(&self) -> Result<Vec<Order>, AppError> {
        let orders = self.orders.read().expect("order store lock poisoned");
        Ok(orders.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let orders = self.orders.read().expect("order store lock poisoned");
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    async fn update_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<Option<Order>, AppError> {
        let mut orders = self.orders.write().expect("order store lock poisoned");

        match orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.status = status;
                Ok(Some(order.clone()))
            }
            None => Ok(None),
        }
    }
}
