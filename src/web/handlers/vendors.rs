//! Vendor management page and form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::domain::entities::{NewVendor, Vendor, VendorStatus};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::formatters::{format_currency, format_initials, format_phone};

/// One row of the vendors table, with display fields pre-formatted.
pub struct VendorRow {
    pub id: i64,
    pub name: String,
    pub initials: String,
    pub status_label: &'static str,
    pub badge_class: &'static str,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub total_spent: String,
    pub total_orders: u64,
    pub rating: String,
}

impl From<Vendor> for VendorRow {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id,
            initials: format_initials(&vendor.name),
            status_label: vendor.status.label(),
            badge_class: vendor.status.badge_class(),
            email: vendor.email.unwrap_or_default(),
            phone: vendor.phone.as_deref().map(format_phone).unwrap_or_default(),
            category: vendor.category.unwrap_or_default(),
            total_spent: format_currency(vendor.total_spent),
            total_orders: vendor.total_orders,
            rating: format!("{:.1}", vendor.rating),
            name: vendor.name,
        }
    }
}

/// Template for the vendor management page.
///
/// Renders `templates/vendors.html` with:
/// - Vendor creation form
/// - Vendor table with status badges
#[derive(Template, WebTemplate)]
#[template(path = "vendors.html")]
pub struct VendorsTemplate {
    pub vendors: Vec<VendorRow>,
}

/// Renders the vendor management page.
///
/// # Endpoint
///
/// `GET /vendors`
pub async fn vendors_page_handler(
    State(state): State<AppState>,
) -> Result<VendorsTemplate, AppError> {
    let vendors = state.vendor_service.list_vendors().await?;

    Ok(VendorsTemplate {
        vendors: vendors.into_iter().map(VendorRow::from).collect(),
    })
}

/// Form payload for creating a vendor from the dashboard.
#[derive(Debug, Deserialize)]
pub struct VendorForm {
    pub name: String,
    pub status: VendorStatus,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Handles the vendor creation form.
///
/// # Endpoint
///
/// `POST /vendors`
///
/// Redirects back to the vendors page on success.
pub async fn create_vendor_form_handler(
    State(state): State<AppState>,
    Form(form): Form<VendorForm>,
) -> Result<Redirect, AppError> {
    let new_vendor = NewVendor {
        name: form.name,
        status: form.status,
        email: none_if_empty(form.email),
        phone: none_if_empty(form.phone),
        website: none_if_empty(form.website),
        category: none_if_empty(form.category),
        notes: none_if_empty(form.notes),
    };

    state.vendor_service.create_vendor(new_vendor).await?;

    Ok(Redirect::to("/dashboard/vendors"))
}

/// Handles the vendor deletion form.
///
/// # Endpoint
///
/// `POST /vendors/{id}/delete`
pub async fn delete_vendor_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.vendor_service.delete_vendor(id).await?;
    Ok(Redirect::to("/dashboard/vendors"))
}
