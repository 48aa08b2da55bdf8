//! Request/response DTOs for tracked-link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{LinkKind, NewTrackedLink, TrackedLink};
use crate::utils::tracking::TrackingParams;

/// Request body for `POST /api/links`.
///
/// Performance counters default to zero; they exist so imported links can
/// carry their historical numbers.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub kind: LinkKind,
    #[validate(length(min = 1, message = "base_url must not be empty"))]
    pub base_url: String,
    #[serde(default)]
    pub utm_source: Option<String>,
    #[serde(default)]
    pub utm_medium: Option<String>,
    #[serde(default)]
    pub utm_campaign: Option<String>,
    #[serde(default)]
    pub utm_content: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub conversions: u64,
}

impl From<CreateLinkRequest> for NewTrackedLink {
    fn from(req: CreateLinkRequest) -> Self {
        Self {
            kind: req.kind,
            name: req.name,
            base_url: req.base_url,
            params: TrackingParams {
                source: req.utm_source,
                medium: req.utm_medium,
                campaign: req.utm_campaign,
                content: req.utm_content,
            },
            views: req.views,
            clicks: req.clicks,
            conversions: req.conversions,
        }
    }
}

/// A tracked link with its derived rates and shareable URL.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub kind: LinkKind,
    pub name: String,
    pub base_url: String,
    pub tracked_url: String,
    pub params: TrackingParams,
    pub views: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub conversion_rate: f64,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn from_link(link: TrackedLink, tracked_url: String) -> Self {
        Self {
            id: link.id,
            kind: link.kind,
            ctr: link.ctr(),
            conversion_rate: link.conversion_rate(),
            name: link.name,
            base_url: link.base_url,
            tracked_url,
            params: link.params,
            views: link.views,
            clicks: link.clicks,
            conversions: link.conversions,
            created_at: link.created_at,
        }
    }
}

/// Response body for `GET /api/links`.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub items: Vec<LinkResponse>,
}
