//! Outbound HTTP integrations.

mod reqwest_source;

pub use reqwest_source::ReqwestRedirectSource;
