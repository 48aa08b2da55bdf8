//! HTML template rendering handlers for the web dashboard.

mod dashboard;
mod links;
mod login;
mod orders;
mod password;
mod register;
mod vendors;

pub use dashboard::dashboard_handler;
pub use links::{create_link_form_handler, delete_link_form_handler, links_page_handler};
pub use login::{login_page_handler, login_submit_handler, logout_handler};
pub use orders::{orders_page_handler, update_order_status_form_handler};
pub use password::{
    password_page_handler, password_reset_page_handler, password_reset_submit_handler,
    password_update_handler,
};
pub use register::{register_page_handler, register_submit_handler};
pub use vendors::{create_vendor_form_handler, delete_vendor_form_handler, vendors_page_handler};
