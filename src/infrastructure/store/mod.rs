pub mod memory_link_store;
pub mod memory_order_store;
pub mod memory_vendor_store;
pub mod seed;

pub use memory_link_store::MemoryLinkStore;
pub use memory_order_store::MemoryOrderStore;
pub use memory_vendor_store::MemoryVendorStore;
