pub mod link;
pub mod order;
pub mod vendor;

pub use link::{LinkKind, NewTrackedLink, TrackedLink, validate_counts};
pub use order::{Order, OrderStatus};
pub use vendor::{NewVendor, Vendor, VendorPatch, VendorStatus};
