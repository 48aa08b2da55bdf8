//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, OrderService, VendorService};
use crate::infrastructure::auth::MemoryAuthProvider;
use crate::infrastructure::store::{MemoryLinkStore, MemoryOrderStore, MemoryVendorStore};

/// Shared application state.
///
/// Services are parameterized over their store/provider traits; the state pins
/// them to the in-memory implementations used in production and tests alike.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkStore>>,
    pub vendor_service: Arc<VendorService<MemoryVendorStore>>,
    pub order_service: Arc<OrderService<MemoryOrderStore>>,
    pub auth_service: Arc<AuthService<MemoryAuthProvider>>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<MemoryLinkStore>>,
        vendor_service: Arc<VendorService<MemoryVendorStore>>,
        order_service: Arc<OrderService<MemoryOrderStore>>,
        auth_service: Arc<AuthService<MemoryAuthProvider>>,
    ) -> Self {
        Self {
            link_service,
            vendor_service,
            order_service,
            auth_service,
        }
    }
}
