//! # QuickVendor
//!
//! A vendor storefront management service with UTM link tracking, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, analytics and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory stores and identity provider
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML dashboard for vendor and link management
//!
//! ## Features
//!
//! - Tracked marketing links with UTM attribution
//! - Link performance aggregated by kind and traffic source
//! - Vendor directory with status counts and spend statistics
//! - Customer order tracking through fulfillment stages
//! - Cookie sessions for the dashboard, Bearer tokens for the API
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export SESSION_SIGNING_SECRET="change-me"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! Then open <http://localhost:3000/dashboard> and sign in with the demo
//! account (`DEMO_EMAIL` / `DEMO_PASSWORD`, see [`config`]).
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService, OrderService, VendorService};
    pub use crate::domain::entities::{
        LinkKind, NewTrackedLink, NewVendor, Order, OrderStatus, TrackedLink, Vendor, VendorStatus,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
