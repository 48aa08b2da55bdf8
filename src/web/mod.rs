//! Web dashboard layer for browser-based UI.
//!
//! Provides HTML pages for vendor management, tracked links, customer
//! orders and performance metrics. Uses Askama templates for server-side
//! rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form handlers
//! - [`middleware`] - Web-specific middleware (cookie auth)
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
