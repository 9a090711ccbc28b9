//! Rate limiting middleware using token bucket algorithm.

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Token bucket settings for the API routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    /// Interval after which one request is replenished.
    pub replenish_ms: u64,
    /// Requests allowed in a burst.
    pub burst: u32,
    /// Read the client IP from `X-Forwarded-For` / `X-Real-IP` / `Forwarded`.
    pub behind_proxy: bool,
}

/// Extracts the client IP from the peer socket, or from proxy headers
/// when the service runs behind a trusted reverse proxy.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    behind_proxy: bool,
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.behind_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }
}

/// Creates a per-IP rate limiter.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Errors
///
/// Returns an error if `replenish_ms` or `burst` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/resolve", post(resolve_handler))
///     .layer(rate_limit::layer(settings)?);
/// ```
pub fn layer(
    settings: RateLimitSettings,
) -> anyhow::Result<GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>>
{
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor {
            behind_proxy: settings.behind_proxy,
        })
        .per_millisecond(settings.replenish_ms)
        .burst_size(settings.burst)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Rate limit interval and burst size must be greater than 0"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
