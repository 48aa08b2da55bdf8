//! Demo catalog seeded into the in-memory stores at startup.

use chrono::{Duration, Utc};

use crate::domain::entities::{
    LinkKind, Order, OrderStatus, TrackedLink, Vendor, VendorStatus,
};
use crate::utils::tracking::TrackingParams;

fn params(source: &str, medium: &str, campaign: &str) -> TrackingParams {
    TrackingParams {
        source: Some(source.to_string()),
        medium: Some(medium.to_string()),
        campaign: Some(campaign.to_string()),
        content: None,
    }
}

/// Demo tracked links covering both link kinds and several traffic sources.
pub fn demo_links() -> Vec<TrackedLink> {
    let now = Utc::now();

    vec![
        TrackedLink {
            id: 1,
            kind: LinkKind::SingleProduct,
            name: "Handmade Ceramic Mug".to_string(),
            base_url: "https://shop.quickvendor.app/products/ceramic-mug".to_string(),
            params: params("instagram", "social", "spring-launch"),
            views: 1250,
            clicks: 89,
            conversions: 12,
            created_at: now,
        },
        TrackedLink {
            id: 2,
            kind: LinkKind::Collection,
            name: "Summer Collection".to_string(),
            base_url: "https://shop.quickvendor.app/collections/summer".to_string(),
            params: params("newsletter", "email", "summer-preview"),
            views: 2140,
            clicks: 156,
            conversions: 28,
            created_at: now,
        },
        TrackedLink {
            id: 3,
            kind: LinkKind::SingleProduct,
            name: "Walnut Cutting Board".to_string(),
            base_url: "https://shop.quickvendor.app/products/walnut-board".to_string(),
            params: params("newsletter", "email", "spring-launch"),
            views: 860,
            clicks: 47,
            conversions: 9,
            created_at: now,
        },
        TrackedLink {
            id: 4,
            kind: LinkKind::Collection,
            name: "Kitchen Essentials".to_string(),
            base_url: "https://shop.quickvendor.app/collections/kitchen".to_string(),
            params: TrackingParams::default(),
            views: 430,
            clicks: 21,
            conversions: 2,
            created_at: now,
        },
    ]
}

/// Demo vendors across all recognized statuses.
pub fn demo_vendors() -> Vec<Vendor> {
    let now = Utc::now();

    vec![
        Vendor {
            id: 1,
            name: "Acme Ceramics".to_string(),
            status: VendorStatus::Active,
            email: Some("orders@acmeceramics.example".to_string()),
            phone: Some("5551234567".to_string()),
            website: Some("https://acmeceramics.example".to_string()),
            category: Some("Home Goods".to_string()),
            total_spent: 12450.75,
            total_orders: 87,
            rating: 4.6,
            notes: None,
            created_at: now,
        },
        Vendor {
            id: 2,
            name: "Northwood Woodcraft".to_string(),
            status: VendorStatus::Active,
            email: Some("hello@northwood.example".to_string()),
            phone: Some("5559876543".to_string()),
            website: Some("https://northwood.example".to_string()),
            category: Some("Kitchen".to_string()),
            total_spent: 8310.00,
            total_orders: 54,
            rating: 4.2,
            notes: Some("Preferred supplier for cutting boards".to_string()),
            created_at: now,
        },
        Vendor {
            id: 3,
            name: "Brightline Textiles".to_string(),
            status: VendorStatus::Pending,
            email: Some("contact@brightline.example".to_string()),
            phone: None,
            website: None,
            category: Some("Textiles".to_string()),
            total_spent: 0.0,
            total_orders: 0,
            rating: 0.0,
            notes: Some("Awaiting tax documentation".to_string()),
            created_at: now,
        },
        Vendor {
            id: 4,
            name: "Harbor Glassworks".to_string(),
            status: VendorStatus::Inactive,
            email: None,
            phone: Some("5552223344".to_string()),
            website: Some("https://harborglass.example".to_string()),
            category: Some("Home Goods".to_string()),
            total_spent: 1975.50,
            total_orders: 11,
            rating: 3.8,
            notes: None,
            created_at: now,
        },
    ]
}

/// Demo customer orders covering every fulfillment stage.
pub fn demo_orders() -> Vec<Order> {
    let now = Utc::now();

    vec![
        Order {
            id: 1,
            reference: "ORD-001".to_string(),
            customer_name: "John Smith".to_string(),
            customer_email: "john@example.com".to_string(),
            status: OrderStatus::Pending,
            total: 159.98,
            tracking_number: None,
            placed_at: now,
        },
        Order {
            id: 2,
            reference: "ORD-002".to_string(),
            customer_name: "Sarah Johnson".to_string(),
            customer_email: "sarah@example.com".to_string(),
            status: OrderStatus::Processing,
            total: 199.99,
            tracking_number: None,
            placed_at: now - Duration::days(1),
        },
        Order {
            id: 3,
            reference: "ORD-003".to_string(),
            customer_name: "Mike Davis".to_string(),
            customer_email: "mike@example.com".to_string(),
            status: OrderStatus::Shipped,
            total: 24.99,
            tracking_number: Some("TRK123456789".to_string()),
            placed_at: now - Duration::days(2),
        },
        Order {
            id: 4,
            reference: "ORD-004".to_string(),
            customer_name: "Emily Wilson".to_string(),
            customer_email: "emily@example.com".to_string(),
            status: OrderStatus::Delivered,
            total: 34.99,
            tracking_number: None,
            placed_at: now - Duration::days(3),
        },
    ]
}
