//! In-memory vendor store.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{NewVendor, Vendor, VendorPatch};
use crate::domain::repositories::VendorRepository;
use crate::error::AppError;

struct Inner {
    vendors: Vec<Vendor>,
    next_id: i64,
}

/// [`VendorRepository`] backed by an in-process table.
pub struct MemoryVendorStore {
    inner: RwLock<Inner>,
}

impl MemoryVendorStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_vendors(Vec::new())
    }

    /// Creates a store pre-populated with the given vendors.
    pub fn with_vendors(vendors: Vec<Vendor>) -> Self {
        let next_id = vendors.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { vendors, next_id }),
        }
    }
}

impl Default for MemoryVendorStore {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_patch(vendor: &mut Vendor, patch: VendorPatch) {
    if let Some(name) = patch.name {
        vendor.name = name;
    }
    if let Some(status) = patch.status {
        vendor.status = status;
    }
    if let Some(email) = patch.email {
        vendor.email = email;
    }
    if let Some(phone) = patch.phone {
        vendor.phone = phone;
    }
    if let Some(website) = patch.website {
        vendor.website = website;
    }
    if let Some(category) = patch.category {
        vendor.category = category;
    }
    if let Some(rating) = patch.rating {
        vendor.rating = rating;
    }
    if let Some(notes) = patch.notes {
        vendor.notes = notes;
    }
}

#[async_trait]
impl VendorRepository for MemoryVendorStore {
    async fn list(&self) -> Result<Vec<Vendor>, AppError> {
        let inner = self.inner.read().expect("vendor store lock poisoned");
        Ok(inner.vendors.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vendor>, AppError> {
        let inner = self.inner.read().expect("vendor store lock poisoned");
        Ok(inner.vendors.iter().find(|v| v.id == id).cloned())
    }

    async fn create(&self, new_vendor: NewVendor) -> Result<Vendor, AppError> {
        let mut inner = self.inner.write().expect("vendor store lock poisoned");

        let vendor = Vendor {
            id: inner.next_id,
            name: new_vendor.name,
            status: new_vendor.status,
            email: new_vendor.email,
            phone: new_vendor.phone,
            website: new_vendor.website,
            category: new_vendor.category,
            total_spent: 0.0,
            total_orders: 0,
            rating: 0.0,
            notes: new_vendor.notes,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.vendors.push(vendor.clone());

        Ok(vendor)
    }

    async fn update(&self, id: i64, patch: VendorPatch) -> Result<Option<Vendor>, AppError> {
        let mut inner = self.inner.write().expect("vendor store lock poisoned");

        match inner.vendors.iter_mut().find(|v| v.id == id) {
            Some(vendor) => {
                apply_patch(vendor, patch);
                Ok(Some(vendor.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().expect("vendor store lock poisoned");
        let before = inner.vendors.len();
        inner.vendors.retain(|v| v.id != id);
        Ok(inner.vendors.len() < before)
    }
}
