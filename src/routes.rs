//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`        - Resolve a map link sent as the request body
//! - `GET  /health`  - Liveness and resolver configuration
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the locate endpoint
//! - **Body limit** - Oversized bodies are reported as unreadable (code 1)
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, locate_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Locate route with its body limit, without rate limiting.
pub fn locate_routes(max_body_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(locate_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
/// - `max_body_bytes` - largest accepted request body
pub fn app_router(
    state: AppState,
    behind_proxy: bool,
    max_body_bytes: usize,
) -> NormalizePath<Router> {
    let locate = locate_routes(max_body_bytes);
    let locate = if behind_proxy {
        locate.layer(rate_limit::proxied_layer())
    } else {
        locate.layer(rate_limit::layer())
    };

    let router = Router::new()
        .merge(locate)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
