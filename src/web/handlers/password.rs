//! Password reset and change handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::web_auth::session_token;

/// Template for the password reset request page.
#[derive(Template, WebTemplate)]
#[template(path = "password_reset.html")]
struct PasswordResetTemplate {
    sent: bool,
}

/// Template for the password change page (signed-in users).
#[derive(Template, WebTemplate)]
#[template(path = "password.html")]
struct PasswordTemplate {
    updated: bool,
    error: bool,
}

#[derive(Debug, Deserialize)]
pub struct ResetQuery {
    #[serde(default)]
    pub sent: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PasswordQuery {
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetForm {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePasswordForm {
    pub new_password: String,
}

/// Renders the password reset request page.
///
/// # Endpoint
///
/// `GET /password/reset`
pub async fn password_reset_page_handler(Query(query): Query<ResetQuery>) -> impl IntoResponse {
    PasswordResetTemplate {
        sent: query.sent.is_some(),
    }
}

/// Handles the password reset request form.
///
/// # Endpoint
///
/// `POST /password/reset`
///
/// Always redirects back with the sent flag on success, regardless of
/// whether the email belongs to an account. The identity provider decides
/// whether a reset email actually goes out.
pub async fn password_reset_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<ResetForm>,
) -> Result<Redirect, AppError> {
    state.auth_service.reset_password(&form.email).await?;
    Ok(Redirect::to("/dashboard/password/reset?sent=1"))
}

/// Renders the password change page.
///
/// # Endpoint
///
/// `GET /password`
pub async fn password_page_handler(Query(query): Query<PasswordQuery>) -> impl IntoResponse {
    PasswordTemplate {
        updated: query.updated.is_some(),
        error: query.error.is_some(),
    }
}

/// Handles the password change form for the signed-in user.
///
/// # Endpoint
///
/// `POST /password`
///
/// The session token comes from the auth cookie; the route is behind the
/// web auth middleware, so a missing cookie normally cannot reach here.
///
/// A rejected password redirects back with the error flag so the page
/// re-renders the form instead of surfacing a JSON error body.
pub async fn password_update_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<UpdatePasswordForm>,
) -> Result<Redirect, AppError> {
    let token = session_token(&headers).ok_or_else(|| {
        AppError::unauthorized("Unauthorized", json!({ "reason": "Missing session cookie" }))
    })?;

    match state
        .auth_service
        .update_password(&token, &form.new_password)
        .await
    {
        Ok(()) => Ok(Redirect::to("/dashboard/password?updated=1")),
        Err(AppError::Validation { .. }) => Ok(Redirect::to("/dashboard/password?error=1")),
        Err(e) => Err(e),
    }
}
