//! Customer order entity and fulfillment status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fulfillment status of a customer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    /// Catch-all for statuses this release does not recognize.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Display-friendly label for the status.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Unknown => "Unknown",
        }
    }

    /// Wire value of the status, matching its serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Unknown => "unknown",
        }
    }

    /// CSS class for styling the status badge.
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge-warning",
            Self::Processing | Self::Shipped => "badge-info",
            Self::Delivered => "badge-success",
            Self::Unknown => "badge-secondary",
        }
    }
}

/// A customer order placed through the storefront.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i64,
    /// Human-facing order reference, e.g. `ORD-001`.
    pub reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub status: OrderStatus,
    pub total: f64,
    /// Carrier tracking number, set once the order ships.
    pub tracking_number: Option<String>,
    pub placed_at: DateTime<Utc>,
}
