//! Core domain entities.
//!
//! Entities are immutable, request-scoped values. Each processing stage
//! produces a fresh value consumed by the next one.
//!
//! # Entity Types
//!
//! - [`HostRules`] / [`HostKind`] - Classification of an input URL by host
//! - [`PathSegments`] - A canonical URL path split on `/`
//! - [`ResolvedLocation`] / [`PlaceKind`] - The extracted geolocation

pub mod host;
pub mod location;
pub mod segments;

pub use host::{DEFAULT_LONG_FORM_HOST, DEFAULT_SHORT_LINK_HOST, HostKind, HostRules};
pub use location::{PlaceKind, ResolvedLocation};
pub use segments::PathSegments;
