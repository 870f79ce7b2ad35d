//! Link resolution: turns raw input into a canonical long-form URL.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::domain::entities::{HostKind, HostRules};
use crate::domain::upstream::{RedirectSource, UpstreamError};

/// Errors that can occur while resolving an input URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Input is not a valid URL")]
    InvalidUrl,

    #[error("Host {host:?} is not a supported map host")]
    UnsupportedHost { host: String },

    #[error("Failed to build upstream request: {0}")]
    RequestBuild(String),

    #[error("Upstream request failed: {0}")]
    UpstreamRequestFailed(String),

    #[error("Upstream response carries no valid redirect target")]
    UpstreamInvalidResponse,
}

impl From<UpstreamError> for ResolveError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Build(reason) => Self::RequestBuild(reason),
            UpstreamError::Transport(reason) => Self::UpstreamRequestFailed(reason),
        }
    }
}

/// Resolves input URLs to canonical long-form URLs.
///
/// Long-form URLs are returned unchanged. Short links cost exactly one
/// outbound GET through the configured [`RedirectSource`], bounded by
/// `deadline`; only the first response is consulted and nothing is retried.
/// Any other host is rejected without touching the network.
pub struct LinkResolver {
    source: Arc<dyn RedirectSource>,
    hosts: HostRules,
    deadline: Duration,
}

impl LinkResolver {
    /// Creates a new link resolver.
    pub fn new(source: Arc<dyn RedirectSource>, hosts: HostRules, deadline: Duration) -> Self {
        Self {
            source,
            hosts,
            deadline,
        }
    }

    pub fn hosts(&self) -> &HostRules {
        &self.hosts
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Resolves a raw request body to a canonical URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidUrl`] if the input is not UTF-8 or not an
    /// absolute URL. See [`Self::resolve_url`] for the remaining cases.
    pub async fn resolve(&self, raw: &[u8]) -> Result<Url, ResolveError> {
        let text = std::str::from_utf8(raw).map_err(|_| ResolveError::InvalidUrl)?;
        let url = Url::parse(text).map_err(|_| ResolveError::InvalidUrl)?;

        self.resolve_url(url).await
    }

    /// Resolves an already parsed URL to a canonical URL.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnsupportedHost`] for hosts that are neither long-form nor short-link
    /// - [`ResolveError::RequestBuild`] if the outbound request cannot be constructed
    /// - [`ResolveError::UpstreamRequestFailed`] if the request fails or exceeds the deadline
    /// - [`ResolveError::UpstreamInvalidResponse`] if the redirect target is missing or invalid
    pub async fn resolve_url(&self, url: Url) -> Result<Url, ResolveError> {
        match self.hosts.classify(&url) {
            HostKind::LongForm => {
                debug!("Long-form URL, no lookup needed: {}", url);
                Ok(url)
            }
            HostKind::ShortLink => self.follow_redirect(&url).await,
            HostKind::Unrecognized => {
                let host = url.host_str().unwrap_or_default().to_string();
                debug!("Unsupported host {:?}, rejecting {}", host, url);
                Err(ResolveError::UnsupportedHost { host })
            }
        }
    }

    async fn follow_redirect(&self, url: &Url) -> Result<Url, ResolveError> {
        debug!("Resolving short link {}", url);

        let location = tokio::time::timeout(self.deadline, self.source.fetch_location(url))
            .await
            .map_err(|_| {
                ResolveError::UpstreamRequestFailed(format!(
                    "no response within {}ms",
                    self.deadline.as_millis()
                ))
            })??;

        let location = location
            .filter(|value| !value.trim().is_empty())
            .ok_or(ResolveError::UpstreamInvalidResponse)?;

        // A relative Location is resolved against the short link itself.
        let target = url
            .join(&location)
            .map_err(|_| ResolveError::UpstreamInvalidResponse)?;

        debug!("Short link {} redirects to {}", url, target);

        Ok(target)
    }
}
