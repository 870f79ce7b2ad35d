//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::LocationService;

#[derive(Clone)]
pub struct AppState {
    pub location_service: Arc<LocationService>,
}

impl AppState {
    pub fn new(location_service: Arc<LocationService>) -> Self {
        Self { location_service }
    }
}
