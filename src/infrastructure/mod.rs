//! In-memory stores and the demo identity provider.

pub mod auth;
pub mod store;
