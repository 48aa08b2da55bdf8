//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::analytics::{LinkTotals, VendorSummary};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::formatters::format_currency;

/// One row of the link performance tables, with rates pre-formatted
/// for display.
pub struct MetricsRow {
    pub label: String,
    pub views: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: String,
    pub conversion_rate: String,
}

impl MetricsRow {
    fn new(label: impl Into<String>, totals: &LinkTotals) -> Self {
        Self {
            label: label.into(),
            views: totals.views,
            clicks: totals.clicks,
            conversions: totals.conversions,
            ctr: format_percent(totals.ctr),
            conversion_rate: format_percent(totals.conversion_rate),
        }
    }
}

fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with:
/// - Vendor summary cards (counts, spend, orders, rating)
/// - Link performance by kind
/// - Link performance by traffic source
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub summary: VendorSummary,
    pub total_spent: String,
    pub average_rating: String,
    pub kind_rows: Vec<MetricsRow>,
    pub source_rows: Vec<MetricsRow>,
}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// Uses `templates/dashboard.html` for server-side rendering. All figures
/// are aggregated server-side from the current store contents.
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<DashboardTemplate, AppError> {
    let summary = state.vendor_service.stats().await?;
    let metrics = state.link_service.metrics().await?;

    let kind_rows = vec![
        MetricsRow::new("Single Product", &metrics.single_product),
        MetricsRow::new("Collection", &metrics.collection),
    ];

    let source_rows = metrics
        .by_source
        .iter()
        .map(|(source, totals)| MetricsRow::new(source.clone(), totals))
        .collect();

    Ok(DashboardTemplate {
        total_spent: format_currency(summary.total_spent),
        average_rating: format!("{:.1}", summary.average_rating),
        summary,
        kind_rows,
        source_rows,
    })
}
