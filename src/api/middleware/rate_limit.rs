//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Request budget applied to a group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Public pages: 2 requests per second, burst of 100.
    Public,
    /// Form submissions (sign-in, registration, applications, dashboard
    /// writes): 1 request per second, burst of 10.
    Sensitive,
}

impl Policy {
    fn limits(self) -> (u64, u32) {
        match self {
            Policy::Public => (2, 100),
            Policy::Sensitive => (1, 10),
        }
    }
}

/// Rate limiting switches taken from configuration.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitSettings {
    pub enabled: bool,
    /// Read the client IP from `X-Forwarded-For` / `X-Real-IP` instead of the
    /// socket peer address. Only safe behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

/// Wraps `router` in a per-IP rate limiter for `policy`.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. When
/// limiting is disabled the router is returned unchanged.
///
/// # Example
///
/// ```rust,ignore
/// let forms = Router::new().route("/login", post(login_submit));
/// let forms = rate_limit::apply(forms, Policy::Sensitive, settings);
/// ```
pub fn apply<S>(router: Router<S>, policy: Policy, settings: RateLimitSettings) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if !settings.enabled {
        return router;
    }

    let (per_second, burst) = policy.limits();
    if settings.behind_proxy {
        router.layer(governor(SmartIpKeyExtractor, per_second, burst))
    } else {
        router.layer(governor(PeerIpKeyExtractor, per_second, burst))
    }
}

/// # Panics
///
/// Panics if `per_second` or `burst` is zero; both come from [`Policy::limits`].
fn governor<K>(
    key_extractor: K,
    per_second: u64,
    burst: u32,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst)
            .key_extractor(key_extractor)
            .finish()
            .expect("rate limit policy has non-zero limits"),
    );

    GovernorLayer::new(governor_conf)
}
