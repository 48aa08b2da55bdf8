//! Vendor management and summary service.

use std::sync::Arc;

use serde_json::json;
use url::Url;
use validator::ValidateEmail;

use crate::domain::analytics::{VendorSummary, aggregate_vendor_stats};
use crate::domain::entities::{NewVendor, Vendor, VendorPatch};
use crate::domain::repositories::VendorRepository;
use crate::error::AppError;

/// Service for managing vendor records.
///
/// Validates contact fields on creation and update, and produces the vendor
/// summary used by the dashboard.
pub struct VendorService<R: VendorRepository> {
    repository: Arc<R>,
}

impl<R: VendorRepository> VendorService<R> {
    /// Creates a new vendor service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all vendors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_vendors(&self) -> Result<Vec<Vendor>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a single vendor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no vendor matches the id.
    pub async fn get_vendor(&self, id: i64) -> Result<Vendor, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Vendor not found", json!({ "id": id })))
    }

    /// Creates a vendor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is empty, the email is
    /// malformed, or the website is not a valid http(s) URL.
    pub async fn create_vendor(&self, new_vendor: NewVendor) -> Result<Vendor, AppError> {
        if new_vendor.name.trim().is_empty() {
            return Err(AppError::bad_request("Vendor name must not be empty", json!({})));
        }
        validate_email_field(new_vendor.email.as_deref())?;
        validate_website_field(new_vendor.website.as_deref())?;

        self.repository.create(new_vendor).await
    }

    /// Applies a partial update to a vendor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no vendor matches the id.
    /// Returns [`AppError::Validation`] on malformed fields or a rating
    /// outside `[0, 5]`.
    pub async fn update_vendor(&self, id: i64, patch: VendorPatch) -> Result<Vendor, AppError> {
        if let Some(name) = &patch.name
            && name.trim().is_empty()
        {
            return Err(AppError::bad_request("Vendor name must not be empty", json!({})));
        }
        if let Some(email) = &patch.email {
            validate_email_field(email.as_deref())?;
        }
        if let Some(website) = &patch.website {
            validate_website_field(website.as_deref())?;
        }
        if let Some(rating) = patch.rating
            && !(0.0..=5.0).contains(&rating)
        {
            return Err(AppError::bad_request(
                "Rating must be between 0 and 5",
                json!({ "rating": rating }),
            ));
        }

        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Vendor not found", json!({ "id": id })))
    }

    /// Deletes a vendor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no vendor matches the id.
    pub async fn delete_vendor(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Vendor not found", json!({ "id": id })))
        }
    }

    /// Aggregates summary statistics across all vendors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn stats(&self) -> Result<VendorSummary, AppError> {
        let vendors = self.repository.list().await?;
        Ok(aggregate_vendor_stats(&vendors))
    }
}

fn validate_email_field(email: Option<&str>) -> Result<(), AppError> {
    if let Some(email) = email
        && !email.validate_email()
    {
        return Err(AppError::bad_request(
            "Invalid email address",
            json!({ "email": email }),
        ));
    }
    Ok(())
}

fn validate_website_field(website: Option<&str>) -> Result<(), AppError> {
    if let Some(website) = website {
        let parsed = Url::parse(website).map_err(|e| {
            AppError::bad_request("Invalid website URL", json!({ "reason": e.to_string() }))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::bad_request(
                "Website must be an http or https URL",
                json!({ "scheme": parsed.scheme() }),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VendorStatus;
    use crate::domain::repositories::MockVendorRepository;
    use chrono::Utc;

    fn new_vendor(name: &str) -> NewVendor {
        NewVendor {
            name: name.to_string(),
            status: VendorStatus::Pending,
            email: Some("orders@acme.example".to_string()),
            phone: Some("5551234567".to_string()),
            website: Some("https://acme.example".to_string()),
            category: Some("Manufacturing".to_string()),
            notes: None,
        }
    }

    fn stored(id: i64, input: &NewVendor) -> Vendor {
        Vendor {
            id,
            name: input.name.clone(),
            status: input.status,
            email: input.email.clone(),
            phone: input.phone.clone(),
            website: input.website.clone(),
            category: input.category.clone(),
            total_spent: 0.0,
            total_orders: 0,
            rating: 0.0,
            notes: input.notes.clone(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_vendor_success() {
        let mut mock_repo = MockVendorRepository::new();

        let input = new_vendor("Acme Supplies");
        let created = stored(1, &input);
        mock_repo
            .expect_create()
            .withf(|v| v.name == "Acme Supplies")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = VendorService::new(Arc::new(mock_repo));

        let result = service.create_vendor(input).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_create_vendor_rejects_empty_name() {
        let mut mock_repo = MockVendorRepository::new();
        mock_repo.expect_create().times(0);

        let service = VendorService::new(Arc::new(mock_repo));

        let result = service.create_vendor(new_vendor("  ")).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_vendor_rejects_bad_email() {
        let mut mock_repo = MockVendorRepository::new();
        mock_repo.expect_create().times(0);

        let service = VendorService::new(Arc::new(mock_repo));

        let mut input = new_vendor("Acme Supplies");
        input.email = Some("not-an-email".to_string());
        let result = service.create_vendor(input).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_vendor_rejects_non_http_website() {
        let mut mock_repo = MockVendorRepository::new();
        mock_repo.expect_create().times(0);

        let service = VendorService::new(Arc::new(mock_repo));

        let mut input = new_vendor("Acme Supplies");
        input.website = Some("ftp://acme.example".to_string());
        let result = service.create_vendor(input).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_vendor_rejects_out_of_range_rating() {
        let mut mock_repo = MockVendorRepository::new();
        mock_repo.expect_update().times(0);

        let service = VendorService::new(Arc::new(mock_repo));

        let patch = VendorPatch {
            rating: Some(5.5),
            ..VendorPatch::default()
        };
        let result = service.update_vendor(1, patch).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_vendor_not_found() {
        let mut mock_repo = MockVendorRepository::new();
        mock_repo.expect_update().times(1).returning(|_, _| Ok(None));

        let service = VendorService::new(Arc::new(mock_repo));

        let patch = VendorPatch {
            status: Some(VendorStatus::Active),
            ..VendorPatch::default()
        };
        let result = service.update_vendor(42, patch).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_stats_aggregates_stored_vendors() {
        let mut mock_repo = MockVendorRepository::new();

        let mut active = stored(1, &new_vendor("Acme Supplies"));
        active.status = VendorStatus::Active;
        active.total_spent = 1200.0;
        active.total_orders = 8;
        active.rating = 4.0;
        let pending = stored(2, &new_vendor("Globex"));

        let vendors = vec![active, pending];
        mock_repo
            .expect_list()
            .times(1)
            .returning(move || Ok(vendors.clone()));

        let service = VendorService::new(Arc::new(mock_repo));

        let summary = service.stats().await.unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.total_orders, 8);
        assert_eq!(summary.average_rating, 2.0);
    }
}
