//! Link management page and form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::{LinkKind, NewTrackedLink, TrackedLink};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::tracking::TrackingParams;

/// One row of the links table, with rates pre-formatted for display.
pub struct LinkRow {
    pub id: i64,
    pub name: String,
    pub kind_label: &'static str,
    pub tracked_url: String,
    pub views: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: String,
    pub conversion_rate: String,
}

impl LinkRow {
    fn new(link: TrackedLink, tracked_url: String) -> Self {
        Self {
            id: link.id,
            kind_label: link.kind.label(),
            ctr: format!("{:.2}%", link.ctr() * 100.0),
            conversion_rate: format!("{:.2}%", link.conversion_rate() * 100.0),
            name: link.name,
            tracked_url,
            views: link.views,
            clicks: link.clicks,
            conversions: link.conversions,
        }
    }
}

/// Template for the link management page.
///
/// Renders `templates/links.html` with:
/// - Link creation form
/// - Link table with shareable URLs and per-link rates
#[derive(Template, WebTemplate)]
#[template(path = "links.html")]
pub struct LinksTemplate {
    pub links: Vec<LinkRow>,
}

/// Renders the link management page.
///
/// # Endpoint
///
/// `GET /links`
pub async fn links_page_handler(State(state): State<AppState>) -> Result<LinksTemplate, AppError> {
    let links = state.link_service.list_links().await?;

    let links = links
        .into_iter()
        .map(|link| {
            let tracked_url = state.link_service.tracked_url(&link);
            LinkRow::new(link, tracked_url)
        })
        .collect();

    Ok(LinksTemplate { links })
}

/// Form payload for creating a tracked link from the dashboard.
///
/// Count fields arrive as strings because empty number inputs submit `""`.
#[derive(Debug, Deserialize)]
pub struct LinkForm {
    pub name: String,
    pub kind: LinkKind,
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
    pub views: String,
    #[serde(default)]
    pub clicks: String,
    #[serde(default)]
    pub conversions: String,
}

fn parse_count(field: &str, raw: &str) -> Result<u64, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|_| {
        AppError::bad_request(
            "Counter fields must be non-negative integers",
            json!({ "field": field, "value": raw }),
        )
    })
}

/// Handles the link creation form.
///
/// # Endpoint
///
/// `POST /links`
///
/// Redirects back to the links page on success.
pub async fn create_link_form_handler(
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Result<Redirect, AppError> {
    let new_link = NewTrackedLink {
        kind: form.kind,
        name: form.name,
        base_url: form.base_url,
        params: TrackingParams {
            source: form.utm_source,
            medium: form.utm_medium,
            campaign: form.utm_campaign,
            content: form.utm_content,
        },
        views: parse_count("views", &form.views)?,
        clicks: parse_count("clicks", &form.clicks)?,
        conversions: parse_count("conversions", &form.conversions)?,
    };

    state.link_service.create_link(new_link).await?;

    Ok(Redirect::to("/dashboard/links"))
}

/// Handles the link deletion form.
///
/// # Endpoint
///
/// `POST /links/{id}/delete`
pub async fn delete_link_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.link_service.delete_link(id).await?;
    Ok(Redirect::to("/dashboard/links"))
}
