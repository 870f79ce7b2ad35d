//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `LONG_FORM_HOST` - Host of canonical map URLs (default: `www.google.com`)
//! - `SHORT_LINK_HOST` - Host of redirecting short links (default: `maps.app.goo.gl`)
//! - `UPSTREAM_TIMEOUT_SECONDS` - Deadline for the short-link lookup (default: 10, max: 120)
//! - `MAX_BODY_BYTES` - Request body limit (default: 8192)
//! - `BEHIND_PROXY` - Rate limit by forwarded client IP (default: `false`)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8000"
//! export LOG_FORMAT="json"
//! export UPSTREAM_TIMEOUT_SECONDS="5"
//! ```

use anyhow::Result;
use std::env;
use std::time::Duration;

use crate::domain::entities::{DEFAULT_LONG_FORM_HOST, DEFAULT_SHORT_LINK_HOST, HostRules};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Host whose URL paths directly encode the location.
    pub long_form_host: String,
    /// Host issuing redirect-only short links.
    pub short_link_host: String,
    /// Deadline in seconds for the single outbound redirect lookup.
    pub upstream_timeout_seconds: u64,
    /// Maximum accepted request body size; larger bodies are reported as unreadable.
    pub max_body_bytes: usize,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            long_form_host: DEFAULT_LONG_FORM_HOST.to_string(),
            short_link_host: DEFAULT_SHORT_LINK_HOST.to_string(),
            upstream_timeout_seconds: 10,
            max_body_bytes: 8192,
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparseable numeric variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let long_form_host = env::var("LONG_FORM_HOST")
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or(defaults.long_form_host);

        let short_link_host = env::var("SHORT_LINK_HOST")
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or(defaults.short_link_host);

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.upstream_timeout_seconds);

        let max_body_bytes = env::var("MAX_BODY_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_body_bytes);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            listen_addr,
            log_level,
            log_format,
            long_form_host,
            short_link_host,
            upstream_timeout_seconds,
            max_body_bytes,
            behind_proxy,
        }
    }

    /// Validates the full server configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `max_body_bytes` is outside 64..=1048576
    /// - [`Self::validate_resolver`] fails
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.max_body_bytes < 64 || self.max_body_bytes > 1_048_576 {
            anyhow::bail!(
                "MAX_BODY_BYTES must be between 64 and 1048576, got {}",
                self.max_body_bytes
            );
        }

        self.validate_resolver()
    }

    /// Validates only the settings used to resolve links: both hosts and the
    /// upstream deadline.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either host is empty, or both hosts are the same
    /// - `upstream_timeout_seconds` is outside 1..=120
    pub fn validate_resolver(&self) -> Result<()> {
        if self.long_form_host.is_empty() {
            anyhow::bail!("LONG_FORM_HOST must not be empty");
        }

        if self.short_link_host.is_empty() {
            anyhow::bail!("SHORT_LINK_HOST must not be empty");
        }

        if self.long_form_host == self.short_link_host {
            anyhow::bail!(
                "LONG_FORM_HOST and SHORT_LINK_HOST must differ, both are '{}'",
                self.long_form_host
            );
        }

        if self.upstream_timeout_seconds == 0 || self.upstream_timeout_seconds > 120 {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.upstream_timeout_seconds
            );
        }

        Ok(())
    }

    pub fn host_rules(&self) -> HostRules {
        HostRules::new(&self.long_form_host, &self.short_link_host)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Long-form host: {}", self.long_form_host);
        tracing::info!("  Short-link host: {}", self.short_link_host);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_seconds);
        tracing::info!("  Max body size: {} bytes", self.max_body_bytes);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
