//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Wraps a router with a rate limiter for public endpoints.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP. With `behind_proxy` set, the IP is
/// read from `X-Forwarded-For` / `X-Real-IP` headers; otherwise from the
/// socket peer address. Only enable `behind_proxy` behind a trusted reverse
/// proxy, since the headers are client-controlled.
///
/// # Example
///
/// ```rust,ignore
/// let public = rate_limit::layer(web::routes::public_routes(), behind_proxy);
/// ```
pub fn layer<S>(router: Router<S>, behind_proxy: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    wrap(router, behind_proxy, 2, 100)
}

/// Wraps a router with a stricter rate limiter for authentication and
/// mutation endpoints.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Used for sensitive operations like sign-in and password reset.
///
/// # Example
///
/// ```rust,ignore
/// let api = rate_limit::secure_layer(api::routes::protected_routes(), behind_proxy);
/// ```
pub fn secure_layer<S>(router: Router<S>, behind_proxy: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    wrap(router, behind_proxy, 1, 10)
}

fn wrap<S>(router: Router<S>, behind_proxy: bool, per_second: u64, burst_size: u32) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if behind_proxy {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(SmartIpKeyExtractor)
                .per_second(per_second)
                .burst_size(burst_size)
                .finish()
                .unwrap(),
        );
        router.layer(GovernorLayer::new(governor_conf))
    } else {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(per_second)
                .burst_size(burst_size)
                .finish()
                .unwrap(),
        );
        router.layer(GovernorLayer::new(governor_conf))
    }
}
