//! Registration page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::state::AppState;
use crate::web::handlers::login::{AuthPageQuery, CredentialsForm, session_redirect};

/// Template for the registration page.
///
/// Renders `templates/register.html` with an email/password form.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
struct RegisterTemplate {
    error: bool,
}

/// Renders the registration page.
///
/// # Endpoint
///
/// `GET /register`
pub async fn register_page_handler(Query(query): Query<AuthPageQuery>) -> impl IntoResponse {
    RegisterTemplate {
        error: query.error.is_some(),
    }
}

/// Handles the registration form.
///
/// # Endpoint
///
/// `POST /register`
///
/// Creates the account, signs it in and redirects to the dashboard with
/// the session cookie set. Duplicate emails and rejected passwords
/// redirect back with an error flag.
pub async fn register_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Response {
    match state.auth_service.sign_up(form.into()).await {
        Ok(session) => session_redirect("/dashboard", &session),
        Err(_) => Redirect::to("/dashboard/register?error=1").into_response(),
    }
}
