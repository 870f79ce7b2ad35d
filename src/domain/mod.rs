//! Domain layer containing the location model and the outbound contract.
//!
//! # Architecture
//!
//! - [`entities`] - Host classification, path segments and resolved locations
//! - [`upstream`] - The [`upstream::RedirectSource`] trait for short-link lookups
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The outbound trait is implemented by the infrastructure layer
//! - Resolution and parsing live in [`crate::application::services`] and
//!   [`crate::utils::path_grammar`]

pub mod entities;
pub mod upstream;
