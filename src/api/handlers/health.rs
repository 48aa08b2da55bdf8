//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Link store**: Runs a list query against the in-memory store
/// 2. **Vendor store**: Runs a list query against the in-memory store
/// 3. **Order store**: Runs a list query against the in-memory store
/// 4. **Sessions**: Reports the number of live sessions
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "link_store": { "status": "ok", "message": "4 links" },
///     "vendor_store": { "status": "ok", "message": "4 vendors" },
///     "order_store": { "status": "ok", "message": "4 orders" },
///     "sessions": { "status": "ok", "message": "1 active" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let link_check = check_link_store(&state).await;

    let vendor_check = check_vendor_store(&state).await;

    let order_check = check_order_store(&state).await;

    let session_check = check_sessions(&state);

    let all_healthy = link_check.status == "ok"
        && vendor_check.status == "ok"
        && order_check.status == "ok"
        && session_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            link_store: link_check,
            vendor_store: vendor_check,
            order_store: order_check,
            sessions: session_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the link store by running a list query.
async fn check_link_store(state: &AppState) -> CheckStatus {
    match state.link_service.list_links().await {
        Ok(links) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} links", links.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Link store error: {}", e)),
        },
    }
}

/// Checks the vendor store by running a list query.
async fn check_vendor_store(state: &AppState) -> CheckStatus {
    match state.vendor_service.list_vendors().await {
        Ok(vendors) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} vendors", vendors.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Vendor store error: {}", e)),
        },
    }
}

/// Checks the order store by running a list query.
async fn check_order_store(state: &AppState) -> CheckStatus {
    match state.order_service.list_orders(None).await {
        Ok(orders) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} orders", orders.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Order store error: {}", e)),
        },
    }
}

/// Reports the number of live sessions held by the auth service.
fn check_sessions(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{} active", state.auth_service.session_count())),
    }
}
