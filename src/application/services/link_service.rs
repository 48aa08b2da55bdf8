//! Tracked link creation, listing, and metrics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::analytics::{LinkMetricsReport, aggregate_link_metrics};
use crate::domain::entities::{NewTrackedLink, TrackedLink, validate_counts};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::tracking::build_tracked_url;

/// Service for managing tracked marketing links.
///
/// Enforces the funnel count invariant on creation and produces aggregated
/// performance metrics over the stored links.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all tracked links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_links(&self) -> Result<Vec<TrackedLink>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a single tracked link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the id.
    pub async fn get_link(&self, id: i64) -> Result<TrackedLink, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tracked link not found", json!({ "id": id })))
    }

    /// Creates a tracked link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - the name or base URL is empty
    /// - the counts violate `conversions <= clicks <= views`
    pub async fn create_link(&self, new_link: NewTrackedLink) -> Result<TrackedLink, AppError> {
        if new_link.name.trim().is_empty() {
            return Err(AppError::bad_request("Link name must not be empty", json!({})));
        }
        if new_link.base_url.is_empty() {
            return Err(AppError::bad_request("Base URL must not be empty", json!({})));
        }
        validate_counts(new_link.views, new_link.clicks, new_link.conversions)?;

        self.repository.create(new_link).await
    }

    /// Deletes a tracked link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the id.
    pub async fn delete_link(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Tracked link not found", json!({ "id": id })))
        }
    }

    /// Returns the full shareable URL for a link, with its UTM parameters
    /// applied in fixed key order.
    pub fn tracked_url(&self, link: &TrackedLink) -> String {
        build_tracked_url(&link.base_url, &link.params)
    }

    /// Aggregates performance metrics across all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn metrics(&self) -> Result<LinkMetricsReport, AppError> {
        let links = self.repository.list().await?;
        Ok(aggregate_link_metrics(&links))
    }
}
