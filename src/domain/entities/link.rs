//! Tracked marketing link entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;
use crate::utils::tracking::TrackingParams;

/// What a tracked link points at within the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    SingleProduct,
    Collection,
}

impl LinkKind {
    /// Display-friendly label for dashboard rendering.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleProduct => "Single Product",
            Self::Collection => "Collection",
        }
    }
}

/// A marketing link with UTM attribution and performance counters.
///
/// Invariant: `conversions <= clicks <= views`. Enforced at creation and
/// update time via [`validate_counts`].
#[derive(Debug, Clone)]
pub struct TrackedLink {
    pub id: i64,
    pub kind: LinkKind,
    pub name: String,
    pub base_url: String,
    pub params: TrackingParams,
    pub views: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub created_at: DateTime<Utc>,
}

impl TrackedLink {
    /// Click-through rate: clicks divided by views, 0 when there are no views.
    pub fn ctr(&self) -> f64 {
        if self.views == 0 {
            0.0
        } else {
            self.clicks as f64 / self.views as f64
        }
    }

    /// Conversion rate: conversions divided by clicks, 0 when there are no clicks.
    pub fn conversion_rate(&self) -> f64 {
        if self.clicks == 0 {
            0.0
        } else {
            self.conversions as f64 / self.clicks as f64
        }
    }
}

/// Input data for creating a new tracked link.
#[derive(Debug, Clone)]
pub struct NewTrackedLink {
    pub kind: LinkKind,
    pub name: String,
    pub base_url: String,
    pub params: TrackingParams,
    pub views: u64,
    pub clicks: u64,
    pub conversions: u64,
}

/// Checks the funnel count invariant `conversions <= clicks <= views`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the violated relation.
pub fn validate_counts(views: u64, clicks: u64, conversions: u64) -> Result<(), AppError> {
    if clicks > views {
        return Err(AppError::bad_request(
            "Clicks cannot exceed views",
            json!({ "views": views, "clicks": clicks }),
        ));
    }
    if conversions > clicks {
        return Err(AppError::bad_request(
            "Conversions cannot exceed clicks",
            json!({ "clicks": clicks, "conversions": conversions }),
        ));
    }
    Ok(())
}
