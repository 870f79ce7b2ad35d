//! Application layer services.
//!
//! This layer orchestrates domain operations: host classification, the
//! single outbound redirect lookup, and path parsing. Services consume the
//! [`crate::domain::upstream::RedirectSource`] trait and provide a clean API
//! for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::link_resolver::LinkResolver`] - Input URL to canonical URL
//! - [`services::location_service::LocationService`] - Input URL to resolved location

pub mod services;
