//! Rate limiting middleware using token bucket algorithm.
//!
//! Every locate request may cost one outbound lookup, so clients are limited
//! per IP address. Rejections use the JSON error body of [`AppError`].

use axum::body::Body;
use axum::http::Response;
use axum::response::IntoResponse;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::error::AppError;

/// Milliseconds after which one request token is replenished.
const REPLENISH_MS: u64 = 200;

/// Maximum burst of requests per client.
const BURST_SIZE: u32 = 50;

/// Creates a rate limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Rate**: one token every 200 ms
/// - **Burst**: 50 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests` with error
/// code 12. Requires the router to be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(REPLENISH_MS)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf).error_handler(rejection_response)
}

/// Creates a rate limiter keyed by the forwarded client address.
///
/// Reads `X-Forwarded-For`, `X-Real-IP` and `Forwarded` before falling back to
/// the peer address. Use only behind a trusted reverse proxy.
pub fn proxied_layer() -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(REPLENISH_MS)
            .burst_size(BURST_SIZE)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf).error_handler(rejection_response)
}

/// Renders a limiter rejection, keeping `retry-after` / `x-ratelimit-after`.
fn rejection_response(error: GovernorError) -> Response<Body> {
    match error {
        GovernorError::TooManyRequests { wait_time, headers } => {
            tracing::debug!("Rate limit exceeded, retry in {}s", wait_time);

            let mut response = AppError::RateLimited {
                wait_seconds: wait_time,
            }
            .into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        other => other.into(),
    }
}
