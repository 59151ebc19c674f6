//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{ForecastService, ProbeService};

/// Immutable service handles shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub forecast_service: Arc<ForecastService>,
    pub probe_service: Arc<ProbeService>,
}

impl AppState {
    pub fn new(forecast_service: Arc<ForecastService>, probe_service: Arc<ProbeService>) -> Self {
        Self {
            forecast_service,
            probe_service,
        }
    }
}
