//! Host classification for incoming map URLs.

use url::Url;

/// Default host serving long-form map URLs.
pub const DEFAULT_LONG_FORM_HOST: &str = "www.google.com";

/// Default host issuing redirect-only short links.
pub const DEFAULT_SHORT_LINK_HOST: &str = "maps.app.goo.gl";

/// Which recognized host a URL belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// Path already encodes the location.
    LongForm,
    /// Needs one redirect lookup to reach a long-form URL.
    ShortLink,
    Unrecognized,
}

/// The pair of hosts the resolver accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRules {
    pub long_form_host: String,
    pub short_link_host: String,
}

impl HostRules {
    pub fn new(long_form_host: impl Into<String>, short_link_host: impl Into<String>) -> Self {
        Self {
            long_form_host: long_form_host.into(),
            short_link_host: short_link_host.into(),
        }
    }

    /// Classifies a URL by its host component only.
    ///
    /// Scheme, port, path and query never influence the result. URLs without
    /// a host (e.g. `mailto:`) are [`HostKind::Unrecognized`].
    pub fn classify(&self, url: &Url) -> HostKind {
        match url.host_str() {
            Some(host) if host == self.long_form_host => HostKind::LongForm,
            Some(host) if host == self.short_link_host => HostKind::ShortLink,
            _ => HostKind::Unrecognized,
        }
    }
}

impl Default for HostRules {
    fn default() -> Self {
        Self::new(DEFAULT_LONG_FORM_HOST, DEFAULT_SHORT_LINK_HOST)
    }
}
