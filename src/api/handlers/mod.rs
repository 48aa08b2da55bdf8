//! HTTP request handlers for the JSON API.

mod health;
mod links;
mod metrics;
mod orders;
mod vendors;

pub use health::health_handler;
pub use links::{create_link_handler, delete_link_handler, link_list_handler};
pub use metrics::link_metrics_handler;
pub use orders::{order_list_handler, update_order_status_handler};
pub use vendors::{
    create_vendor_handler, delete_vendor_handler, update_vendor_handler, vendor_list_handler,
    vendor_stats_handler,
};
