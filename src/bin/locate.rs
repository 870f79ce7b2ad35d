//! Command-line map link resolver.
//!
//! Runs the same resolution and parsing core as the HTTP service, without
//! starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Human-readable summary
//! cargo run --bin locate -- https://maps.app.goo.gl/AbC123
//!
//! # Exact HTTP API JSON, one line per URL
//! cargo run --bin locate -- --json "https://www.google.com/maps/@40.0,-73.5,15z"
//!
//! # Custom hosts and deadline
//! cargo run --bin locate -- --timeout 3 --short-link-host s.example.com https://s.example.com/x
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (`LONG_FORM_HOST`, `SHORT_LINK_HOST`,
//! `UPSTREAM_TIMEOUT_SECONDS`, `RUST_LOG`); flags take precedence.
//!
//! Exits with status 1 if any URL fails.

use maps_locator::api::dto::locate::LocateResponse;
use maps_locator::application::services::LocationService;
use maps_locator::config::Config;
use maps_locator::domain::entities::ResolvedLocation;
use maps_locator::error::AppError;
use maps_locator::server::build_location_service;

use anyhow::Result;
use clap::Parser;
use colored::*;
use serde_json::json;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Resolve Google Maps links into coordinates.
#[derive(Parser)]
#[command(name = "locate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Map URLs to resolve (long-form or short links)
    #[arg(required = true)]
    urls: Vec<String>,

    /// Print the HTTP API JSON response for each URL
    #[arg(long)]
    json: bool,

    /// Deadline in seconds for short-link lookups
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Host of canonical map URLs
    #[arg(long, value_name = "HOST")]
    long_form_host: Option<String>,

    /// Host of redirecting short links
    #[arg(long, value_name = "HOST")]
    short_link_host: Option<String>,
}

impl Cli {
    /// Applies command-line overrides on top of the environment configuration.
    ///
    /// Only the resolver settings are validated; listener, logging and body
    /// limit settings do not apply here.
    fn config(&self) -> Result<Config> {
        let mut config = Config::from_env();

        if let Some(timeout) = self.timeout {
            config.upstream_timeout_seconds = timeout;
        }
        if let Some(host) = &self.long_form_host {
            config.long_form_host = host.to_ascii_lowercase();
        }
        if let Some(host) = &self.short_link_host {
            config.short_link_host = host.to_ascii_lowercase();
        }

        config.validate_resolver()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = cli.config()?;
    let service = build_location_service(&config)?;

    let failed = locate_all(&service, &cli.urls, cli.json, &mut io::stdout()).await?;

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Resolves every URL in order and writes one report per URL.
///
/// Returns the number of URLs that failed.
async fn locate_all<W: Write>(
    service: &LocationService,
    urls: &[String],
    json: bool,
    out: &mut W,
) -> Result<usize> {
    let mut failed = 0;

    for url in urls {
        match service.locate(url.as_bytes()).await {
            Ok(location) if json => {
                writeln!(
                    out,
                    "{}",
                    serde_json::to_string(&LocateResponse::from(location))?
                )?;
            }
            Ok(location) => print_location(out, url, &location)?,
            Err(err) => {
                failed += 1;
                tracing::debug!("{} failed: {}", url, err);

                if json {
                    writeln!(out, "{}", json!({ "ok": false, "error": err.to_error_info() }))?;
                } else {
                    print_error(out, url, &err)?;
                }
            }
        }
    }

    Ok(failed)
}

fn print_location<W: Write>(
    out: &mut W,
    url: &str,
    location: &ResolvedLocation,
) -> io::Result<()> {
    writeln!(out, "{} {}", "✔".green().bold(), url.bright_white())?;
    writeln!(out, "  Type:      {}", location.kind.to_string().cyan())?;
    writeln!(
        out,
        "  Latitude:  {}",
        location.latitude.to_string().bright_yellow()
    )?;
    writeln!(
        out,
        "  Longitude: {}",
        location.longitude.to_string().bright_yellow()
    )?;
    if let Some(zoom) = &location.zoom {
        writeln!(out, "  Zoom:      {}", zoom)?;
    }
    if let Some(query) = location.query.as_deref().filter(|q| !q.is_empty()) {
        writeln!(out, "  Query:     {}", query.cyan())?;
    }
    writeln!(out)
}

fn print_error<W: Write>(out: &mut W, url: &str, err: &AppError) -> io::Result<()> {
    writeln!(out, "{} {}", "✘".red().bold(), url.bright_white())?;
    writeln!(
        out,
        "  Error {}: {}",
        err.code().to_string().red(),
        err.message().red()
    )?;
    writeln!(out, "  {}", err.to_string().dimmed())?;
    writeln!(out)
}
