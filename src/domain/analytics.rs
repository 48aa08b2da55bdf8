//! Link-performance and vendor-summary aggregation.
//!
//! Pure functions over in-memory collections. Group-level rates are computed
//! from summed totals rather than averaged per-record rates, since the
//! rate-of-totals is the economically meaningful figure.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{LinkKind, TrackedLink, Vendor, VendorStatus};

/// Summed performance counters for a group of links, with derived rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LinkTotals {
    pub views: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub conversion_rate: f64,
}

impl LinkTotals {
    /// Builds totals from raw counts, guarding both rate divisions against
    /// zero denominators.
    pub fn from_counts(views: u64, clicks: u64, conversions: u64) -> Self {
        let ctr = if views == 0 {
            0.0
        } else {
            clicks as f64 / views as f64
        };
        let conversion_rate = if clicks == 0 {
            0.0
        } else {
            conversions as f64 / clicks as f64
        };
        Self {
            views,
            clicks,
            conversions,
            ctr,
            conversion_rate,
        }
    }
}

/// Aggregated link performance, grouped by link kind and by traffic source.
///
/// Kind groups are always present (zero-valued for empty input) and serialized
/// in the fixed order {single_product, collection}. `by_source` maps each
/// `utm_source` to its totals in sorted source order; links without a source
/// fall under [`DIRECT_SOURCE`].
#[derive(Debug, Clone, Serialize)]
pub struct LinkMetricsReport {
    pub single_product: LinkTotals,
    pub collection: LinkTotals,
    pub by_source: BTreeMap<String, LinkTotals>,
}

/// Source bucket for links created without a `utm_source` value.
pub const DIRECT_SOURCE: &str = "direct";

#[derive(Default)]
struct Counts {
    views: u64,
    clicks: u64,
    conversions: u64,
}

impl Counts {
    fn add(&mut self, link: &TrackedLink) {
        self.views += link.views;
        self.clicks += link.clicks;
        self.conversions += link.conversions;
    }

    fn finish(&self) -> LinkTotals {
        LinkTotals::from_counts(self.views, self.clicks, self.conversions)
    }
}

/// Aggregates link performance by kind and by traffic source.
///
/// Empty input yields zero totals for both kind groups, not an absent result.
pub fn aggregate_link_metrics(records: &[TrackedLink]) -> LinkMetricsReport {
    let mut single_product = Counts::default();
    let mut collection = Counts::default();
    let mut by_source: BTreeMap<String, Counts> = BTreeMap::new();

    for link in records {
        match link.kind {
            LinkKind::SingleProduct => single_product.add(link),
            LinkKind::Collection => collection.add(link),
        }

        let source = match link.params.source.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => DIRECT_SOURCE,
        };
        by_source.entry(source.to_string()).or_default().add(link);
    }

    LinkMetricsReport {
        single_product: single_product.finish(),
        collection: collection.finish(),
        by_source: by_source
            .iter()
            .map(|(source, counts)| (source.clone(), counts.finish()))
            .collect(),
    }
}

/// Aggregated vendor statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VendorSummary {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
    pub total_spent: f64,
    pub total_orders: u64,
    pub average_rating: f64,
}

/// Aggregates vendor records into summary statistics.
///
/// Vendors with an unrecognized status count toward `total` but none of the
/// per-status buckets. `average_rating` is 0 for empty input, never NaN.
pub fn aggregate_vendor_stats(vendors: &[Vendor]) -> VendorSummary {
    let mut summary = VendorSummary {
        total: vendors.len(),
        ..VendorSummary::default()
    };

    for vendor in vendors {
        match vendor.status {
            VendorStatus::Active => summary.active += 1,
            VendorStatus::Pending => summary.pending += 1,
            VendorStatus::Inactive => summary.inactive += 1,
            VendorStatus::Unknown => {}
        }
        summary.total_spent += vendor.total_spent;
        summary.total_orders += vendor.total_orders;
    }

    if !vendors.is_empty() {
        let rating_sum: f64 = vendors.iter().map(|v| v.rating).sum();
        summary.average_rating = rating_sum / vendors.len() as f64;
    }

    summary
}
