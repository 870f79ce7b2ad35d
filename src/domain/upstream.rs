//! Outbound boundary used to look up short-link redirect targets.

use async_trait::async_trait;
use url::Url;

/// Errors raised by a [`RedirectSource`] before a response is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    #[error("Failed to build upstream request: {0}")]
    Build(String),

    #[error("Upstream request failed: {0}")]
    Transport(String),
}

/// Issues a single GET and reports the redirect target of the response.
///
/// Implementations must not follow redirects themselves: only the first
/// response is consulted.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestRedirectSource`] - reqwest client with redirects disabled
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectSource: Send + Sync {
    /// Returns the raw `Location` header value of the response to `GET url`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the header is present and readable as text
    /// - `Ok(None)` if the response carries no usable `Location` header
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Build`] if the request cannot be constructed and
    /// [`UpstreamError::Transport`] if it cannot be sent or no response arrives.
    async fn fetch_location(&self, url: &Url) -> Result<Option<String>, UpstreamError>;
}
