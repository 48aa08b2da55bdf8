//! Repository trait for vendor records.

use async_trait::async_trait;

use crate::domain::entities::{NewVendor, Vendor, VendorPatch};
use crate::error::AppError;

/// Repository interface for vendors.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::MemoryVendorStore`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Lists all vendors in creation order.
    async fn list(&self) -> Result<Vec<Vendor>, AppError>;

    /// Finds a vendor by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Vendor>, AppError>;

    /// Persists a new vendor and returns it with its assigned id.
    async fn create(&self, new_vendor: NewVendor) -> Result<Vendor, AppError>;

    /// Applies a partial update to an existing vendor.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(vendor))` with the updated record
    /// - `Ok(None)` if the id is unknown
    async fn update(&self, id: i64, patch: VendorPatch) -> Result<Option<Vendor>, AppError>;

    /// Deletes a vendor by id.
    ///
    /// # Returns
    ///
    /// `true` if a vendor was removed, `false` if the id was unknown.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
