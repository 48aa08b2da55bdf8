pub mod link_repository;
pub mod order_repository;
pub mod vendor_repository;

pub use link_repository::LinkRepository;
pub use order_repository::OrderRepository;
pub use vendor_repository::VendorRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use vendor_repository::MockVendorRepository;
