//! Request/response DTOs for vendor endpoints.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{NewVendor, Vendor, VendorPatch, VendorStatus};

/// Digits with optional separators/parentheses and a leading `+`.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-().]{7,20}$").unwrap());

fn default_status() -> VendorStatus {
    VendorStatus::Pending
}

/// Request body for `POST /api/vendors`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVendorRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default = "default_status")]
    pub status: VendorStatus,
    #[serde(default)]
    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(regex(path = *PHONE_RE, message = "invalid phone number"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(url(message = "invalid website URL"))]
    pub website: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CreateVendorRequest> for NewVendor {
    fn from(req: CreateVendorRequest) -> Self {
        Self {
            name: req.name,
            status: req.status,
            email: req.email,
            phone: req.phone,
            website: req.website,
            category: req.category,
            notes: req.notes,
        }
    }
}

/// Request body for `PATCH /api/vendors/{id}`.
///
/// Absent fields are left unchanged; an empty string clears an optional field.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVendorRequest {
    pub name: Option<String>,
    pub status: Option<VendorStatus>,
    pub email: Option<String>,
    #[validate(custom(function = validate_phone_or_clear))]
    pub phone: Option<String>,
    pub website: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<f64>,
    pub notes: Option<String>,
}

/// Accepts a valid phone number or the empty string, which clears the field.
fn validate_phone_or_clear(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() || PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid phone number"))
    }
}

/// Maps `Some("")` to a field clear and `Some(value)` to a field set.
fn set_or_clear(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| if v.is_empty() { None } else { Some(v) })
}

impl From<UpdateVendorRequest> for VendorPatch {
    fn from(req: UpdateVendorRequest) -> Self {
        Self {
            name: req.name,
            status: req.status,
            email: set_or_clear(req.email),
            phone: set_or_clear(req.phone),
            website: set_or_clear(req.website),
            category: set_or_clear(req.category),
            rating: req.rating,
            notes: set_or_clear(req.notes),
        }
    }
}

/// A vendor record with its display label.
#[derive(Debug, Serialize)]
pub struct VendorResponse {
    pub id: i64,
    pub name: String,
    pub status: VendorStatus,
    pub status_label: &'static str,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub category: Option<String>,
    pub total_spent: f64,
    pub total_orders: u64,
    pub rating: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Vendor> for VendorResponse {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id,
            status: vendor.status,
            status_label: vendor.status.label(),
            name: vendor.name,
            email: vendor.email,
            phone: vendor.phone,
            website: vendor.website,
            category: vendor.category,
            total_spent: vendor.total_spent,
            total_orders: vendor.total_orders,
            rating: vendor.rating,
            notes: vendor.notes,
            created_at: vendor.created_at,
        }
    }
}

/// Response body for `GET /api/vendors`.
#[derive(Debug, Serialize)]
pub struct VendorListResponse {
    pub total: usize,
    pub items: Vec<VendorResponse>,
}
