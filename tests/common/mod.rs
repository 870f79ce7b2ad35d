#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use url::Url;

use maps_locator::api::handlers::{health_handler, locate_handler};
use maps_locator::application::services::{LinkResolver, LocationService};
use maps_locator::domain::entities::HostRules;
use maps_locator::domain::upstream::{RedirectSource, UpstreamError};
use maps_locator::routes::locate_routes;
use maps_locator::state::AppState;

pub const DEADLINE: Duration = Duration::from_millis(500);

/// What the stub short-link host answers with.
#[derive(Clone)]
pub enum Reply {
    Location(&'static str),
    NoLocation,
    BuildFailure,
    TransportFailure,
    Stall,
}

/// Redirect source returning a canned reply and counting lookups.
pub struct StubSource {
    reply: Reply,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RedirectSource for StubSource {
    async fn fetch_location(&self, _url: &Url) -> Result<Option<String>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            Reply::Location(target) => Ok(Some(target.to_string())),
            Reply::NoLocation => Ok(None),
            Reply::BuildFailure => Err(UpstreamError::Build("bad request".to_string())),
            Reply::TransportFailure => {
                Err(UpstreamError::Transport("connection refused".to_string()))
            }
            Reply::Stall => {
                tokio::time::sleep(DEADLINE * 10).await;
                Ok(None)
            }
        }
    }
}

pub fn create_test_state(source: Arc<StubSource>) -> AppState {
    let resolver = LinkResolver::new(source, HostRules::default(), DEADLINE);

    AppState::new(Arc::new(LocationService::new(resolver)))
}

/// Router with the locate and health endpoints, without rate limiting.
pub fn create_test_app(source: Arc<StubSource>, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(locate_routes(max_body_bytes))
        .route("/health", get(health_handler))
        .with_state(create_test_state(source))
}

/// Router exposing the bare handler with axum's default body limit.
pub fn create_bare_app(source: Arc<StubSource>) -> Router {
    Router::new()
        .route("/", post(locate_handler))
        .with_state(create_test_state(source))
}

pub fn create_test_server(source: Arc<StubSource>) -> TestServer {
    TestServer::new(create_test_app(source, 8192)).unwrap()
}
