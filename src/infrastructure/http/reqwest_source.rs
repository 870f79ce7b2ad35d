//! reqwest-backed redirect lookup.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header, redirect};
use tracing::debug;
use url::Url;

use crate::domain::upstream::{RedirectSource, UpstreamError};

/// [`RedirectSource`] issuing a real GET with automatic redirects disabled.
///
/// The client is built once and shared; reqwest pools connections internally.
/// Every request is bounded by the client-level `timeout`.
#[derive(Clone)]
pub struct ReqwestRedirectSource {
    client: Client,
}

impl ReqwestRedirectSource {
    /// Builds a client that never follows redirects.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(timeout)
            .user_agent(user_agent())
            .build()?;

        Ok(Self { client })
    }
}

fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[async_trait]
impl RedirectSource for ReqwestRedirectSource {
    async fn fetch_location(&self, url: &Url) -> Result<Option<String>, UpstreamError> {
        let request = self
            .client
            .get(url.clone())
            .build()
            .map_err(|e| UpstreamError::Build(e.to_string()))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        debug!("Upstream {} answered {}", url, response.status());

        // Read regardless of status: only the first response is consulted.
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Ok(location)
    }
}
