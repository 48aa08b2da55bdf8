//! Handlers for tracked-link endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkListResponse, LinkResponse};
use crate::error::{AppError, map_validation_errors};
use crate::state::AppState;

/// Lists all tracked links with derived rates and shareable URLs.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn link_list_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.link_service.list_links().await?;

    let items: Vec<LinkResponse> = links
        .into_iter()
        .map(|link| {
            let tracked_url = state.link_service.tracked_url(&link);
            LinkResponse::from_link(link, tracked_url)
        })
        .collect();

    Ok(Json(LinkListResponse {
        total: items.len(),
        items,
    }))
}

/// Creates a tracked link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Errors
///
/// Returns 400 Bad Request if the payload fails validation or the counts
/// violate `conversions <= clicks <= views`.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate().map_err(map_validation_errors)?;

    let link = state.link_service.create_link(payload.into()).await?;
    let tracked_url = state.link_service.tracked_url(&link);

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, tracked_url)),
    ))
}

/// Deletes a tracked link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id is unknown.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
