//! Handlers for vendor endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::vendors::{
    CreateVendorRequest, UpdateVendorRequest, VendorListResponse, VendorResponse,
};
use crate::domain::analytics::VendorSummary;
use crate::error::{AppError, map_validation_errors};
use crate::state::AppState;

/// Lists all vendors.
///
/// # Endpoint
///
/// `GET /api/vendors`
pub async fn vendor_list_handler(
    State(state): State<AppState>,
) -> Result<Json<VendorListResponse>, AppError> {
    let vendors = state.vendor_service.list_vendors().await?;

    let items: Vec<VendorResponse> = vendors.into_iter().map(VendorResponse::from).collect();

    Ok(Json(VendorListResponse {
        total: items.len(),
        items,
    }))
}

/// Creates a vendor.
///
/// # Endpoint
///
/// `POST /api/vendors`
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure.
pub async fn create_vendor_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateVendorRequest>,
) -> Result<(StatusCode, Json<VendorResponse>), AppError> {
    payload.validate().map_err(map_validation_errors)?;

    let vendor = state.vendor_service.create_vendor(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(vendor.into())))
}

/// Partially updates a vendor.
///
/// # Endpoint
///
/// `PATCH /api/vendors/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id is unknown.
/// Returns 400 Bad Request on validation failure.
pub async fn update_vendor_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateVendorRequest>,
) -> Result<Json<VendorResponse>, AppError> {
    payload.validate().map_err(map_validation_errors)?;

    let vendor = state.vendor_service.update_vendor(id, payload.into()).await?;

    Ok(Json(vendor.into()))
}

/// Deletes a vendor.
///
/// # Endpoint
///
/// `DELETE /api/vendors/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id is unknown.
pub async fn delete_vendor_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.vendor_service.delete_vendor(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns aggregated vendor statistics.
///
/// # Endpoint
///
/// `GET /api/vendors/stats`
pub async fn vendor_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<VendorSummary>, AppError> {
    let summary = state.vendor_service.stats().await?;
    Ok(Json(summary))
}
