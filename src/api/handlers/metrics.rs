//! Handler for aggregated link performance metrics.

use axum::{Json, extract::State};

use crate::domain::analytics::LinkMetricsReport;
use crate::error::AppError;
use crate::state::AppState;

/// Returns link performance grouped by kind and by traffic source.
///
/// # Endpoint
///
/// `GET /api/links/metrics`
///
/// # Response
///
/// ```json
/// {
///   "single_product": { "views": 1250, "clicks": 89, "conversions": 12,
///                       "ctr": 0.0712, "conversion_rate": 0.1348 },
///   "collection":     { "views": 2140, "clicks": 156, "conversions": 28,
///                       "ctr": 0.0729, "conversion_rate": 0.1795 },
///   "by_source":      { "instagram": { ... }, "newsletter": { ... } }
/// }
/// ```
///
/// Both kind groups are always present; an empty store yields zero totals.
pub async fn link_metrics_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkMetricsReport>, AppError> {
    let report = state.link_service.metrics().await?;
    Ok(Json(report))
}
