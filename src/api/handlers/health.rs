//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// Reports the resolver configuration without contacting the short-link
/// host, so probes never generate outbound traffic.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "resolver": {
///       "status": "ok",
///       "message": "www.google.com / maps.app.goo.gl, deadline 10000ms"
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            resolver: check_resolver(&state),
        },
    })
}

/// Describes the hosts and deadline the resolver runs with.
fn check_resolver(state: &AppState) -> CheckStatus {
    let resolver = state.location_service.resolver();
    let hosts = resolver.hosts();

    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "{} / {}, deadline {}ms",
            hosts.long_form_host,
            hosts.short_link_host,
            resolver.deadline().as_millis()
        )),
    }
}
