//! Core business entities, aggregation logic, and external seams.

pub mod analytics;
pub mod auth;
pub mod entities;
pub mod repositories;
