//! Pure helpers for URL path processing.
//!
//! - [`path_grammar`] - Shape dispatch and field extraction for map URL paths
//! - [`percent`] - Strict percent-decoding

pub mod path_grammar;
pub mod percent;
