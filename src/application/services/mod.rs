pub mod auth_service;
pub mod link_service;
pub mod order_service;
pub mod vendor_service;

pub use auth_service::{AuthService, IssuedSession};
pub use link_service::LinkService;
pub use order_service::OrderService;
pub use vendor_service::VendorService;
