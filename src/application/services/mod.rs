//! Business logic services for the application layer.

pub mod link_resolver;
pub mod location_service;

pub use link_resolver::{LinkResolver, ResolveError};
pub use location_service::LocationService;
