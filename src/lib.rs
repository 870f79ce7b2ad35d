//! # Maps Locator
//!
//! Resolves Google Maps links into coordinates.
//!
//! A request body holding a map URL (a long-form `www.google.com/maps/...`
//! URL or a `maps.app.goo.gl` short link) is turned into a latitude, a
//! longitude, an optional zoom/radius token, an optional search query, and
//! the kind of reference it was (search, place, or direct coordinates).
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the outbound redirect contract
//! - **Application Layer** ([`application`]) - Link resolution and location lookup
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest-backed redirect lookup
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//! - **Utilities** ([`utils`]) - The pure path grammar and percent-decoding
//!
//! ## Request Flow
//!
//! 1. Raw body → URL ([`application::services::LinkResolver::resolve`])
//! 2. Short links → one GET, `Location` header read, no redirect followed
//! 3. Canonical URL → [`domain::entities::ResolvedLocation`]
//!    ([`utils::path_grammar::parse`])
//!
//! No state is kept between requests.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -d 'https://www.google.com/maps/@40.0,-73.5,15z' http://localhost:8000/
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkResolver, LocationService, ResolveError};
    pub use crate::domain::entities::{HostRules, PlaceKind, ResolvedLocation};
    pub use crate::domain::upstream::{RedirectSource, UpstreamError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::path_grammar::ParseError;
}
