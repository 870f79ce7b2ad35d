//! HTTP request handlers for API endpoints.

pub mod health;
pub mod locate;

pub use health::health_handler;
pub use locate::locate_handler;
