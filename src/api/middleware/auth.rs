//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Validate token hash against the session table
/// 3. Reject expired or unknown sessions
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Session is not found or expired
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/vendors", get(vendor_list_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let req = Request::from_parts(parts, body);

    st.auth_service.authenticate(&token)?;

    Ok(next.run(req).await)
}
