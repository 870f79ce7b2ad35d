//! HTTP server initialization and runtime setup.
//!
//! Builds the outbound client, wires services into state, and runs the Axum
//! server until a shutdown signal arrives.

use crate::application::services::{LinkResolver, LocationService};
use crate::config::Config;
use crate::infrastructure::http::ReqwestRedirectSource;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the location service backed by a real HTTP client.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be initialized.
pub fn build_location_service(config: &Config) -> Result<LocationService> {
    let source = ReqwestRedirectSource::new(config.upstream_timeout())
        .context("Failed to build upstream HTTP client")?;

    let resolver = LinkResolver::new(
        Arc::new(source),
        config.host_rules(),
        config.upstream_timeout(),
    );

    Ok(LocationService::new(resolver))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let location_service = build_location_service(&config)?;
    let state = AppState::new(Arc::new(location_service));

    let app = app_router(state, config.behind_proxy, config.max_body_bytes);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Completes on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
