//! Login, logout and session cookie handling.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::application::services::IssuedSession;
use crate::state::AppState;
use crate::web::middleware::web_auth::{SESSION_COOKIE, session_token};

/// Template for the login page.
///
/// Renders `templates/login.html` with an email/password form.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: bool,
}

/// Query flags carried across auth redirects.
#[derive(Debug, Deserialize)]
pub struct AuthPageQuery {
    #[serde(default)]
    pub error: Option<String>,
}

/// Email/password form payload shared by login and registration.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
}

impl From<CredentialsForm> for crate::domain::auth::Credentials {
    fn from(form: CredentialsForm) -> Self {
        Self {
            email: form.email,
            password: form.password,
        }
    }
}

/// Builds a redirect that sets the session cookie for a freshly issued
/// session.
///
/// The cookie is `HttpOnly` and scoped to the whole site so both the
/// dashboard and any same-origin fetches carry it.
pub(super) fn session_redirect(target: &str, session: &IssuedSession) -> Response {
    let max_age = (session.expires_at - Utc::now()).num_seconds().max(0);
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, session.token, max_age
    );

    let mut response = Redirect::to(target).into_response();
    response.headers_mut().insert(
        SET_COOKIE,
        // Session tokens are URL-safe base64, always a valid header value.
        HeaderValue::from_str(&cookie).expect("cookie value is ASCII"),
    );
    response
}

/// Builds a redirect that clears the session cookie.
fn clear_session_redirect(target: &str) -> Response {
    let cookie = format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE);

    let mut response = Redirect::to(target).into_response();
    response.headers_mut().insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie).expect("cookie value is ASCII"),
    );
    response
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler(Query(query): Query<AuthPageQuery>) -> impl IntoResponse {
    LoginTemplate {
        error: query.error.is_some(),
    }
}

/// Handles the login form.
///
/// # Endpoint
///
/// `POST /login`
///
/// On success, sets the session cookie and redirects to the dashboard.
/// On rejected credentials, redirects back to the login page with an
/// error flag instead of surfacing a JSON error in the browser.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Response {
    match state.auth_service.sign_in(form.into()).await {
        Ok(session) => session_redirect("/dashboard", &session),
        Err(_) => Redirect::to("/dashboard/login?error=1").into_response(),
    }
}

/// Handles sign-out.
///
/// # Endpoint
///
/// `POST /logout`
///
/// Invalidates the session server-side, clears the cookie and redirects
/// to the login page. Sign-out is idempotent, so a stale cookie still
/// lands on the login page cleanly.
pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        if let Err(e) = state.auth_service.sign_out(&token).await {
            tracing::warn!("Sign-out failed: {}", e);
        }
    }

    clear_session_redirect("/dashboard/login")
}
