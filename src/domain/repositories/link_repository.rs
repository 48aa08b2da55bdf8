//! Repository trait for tracked marketing links.

use async_trait::async_trait;

use crate::domain::entities::{NewTrackedLink, TrackedLink};
use crate::error::AppError;

/// Repository interface for tracked links.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::MemoryLinkStore`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Lists all tracked links in creation order.
    async fn list(&self) -> Result<Vec<TrackedLink>, AppError>;

    /// Finds a link by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` if the link exists
    /// - `Ok(None)` otherwise
    async fn find_by_id(&self, id: i64) -> Result<Option<TrackedLink>, AppError>;

    /// Persists a new link and returns it with its assigned id.
    async fn create(&self, new_link: NewTrackedLink) -> Result<TrackedLink, AppError>;

    /// Deletes a link by id.
    ///
    /// # Returns
    ///
    /// `true` if a link was removed, `false` if the id was unknown.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
