//! Vendor entity and lifecycle status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Onboarding status of a vendor account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    Active,
    Pending,
    Inactive,
    /// Catch-all for statuses this release does not recognize. Excluded from
    /// per-status counts but still included in totals.
    #[serde(other)]
    Unknown,
}

impl VendorStatus {
    /// Display-friendly label for the status.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Inactive => "Inactive",
            Self::Unknown => "Unknown",
        }
    }

    /// CSS class for styling the status badge.
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "badge-success",
            Self::Pending => "badge-warning",
            Self::Inactive | Self::Unknown => "badge-secondary",
        }
    }
}

/// A vendor registered with the storefront.
#[derive(Debug, Clone)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    pub status: VendorStatus,
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

/// Input data for creating a new vendor.
#[derive(Debug, Clone)]
pub struct NewVendor {
    pub name: String,
    pub status: VendorStatus,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
}

/// Partial update for an existing vendor.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct VendorPatch {
    pub name: Option<String>,
    pub status: Option<VendorStatus>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub rating: Option<f64>,
    pub notes: Option<Option<String>>,
}
