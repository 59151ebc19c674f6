#![allow(dead_code)]

use std::sync::Arc;
use weather_api::application::services::{ForecastService, ProbeService};
use weather_api::infrastructure::diagnostics::NullSink;
use weather_api::state::AppState;

pub const TEST_DEFAULT_DAYS: u16 = 5;
pub const TEST_MAX_DAYS: u16 = 14;

pub fn create_test_state() -> AppState {
    let diagnostics = Arc::new(NullSink);

    let forecast_service = Arc::new(ForecastService::new(
        diagnostics.clone(),
        TEST_DEFAULT_DAYS,
        TEST_MAX_DAYS,
    ));
    let probe_service = Arc::new(ProbeService::new(diagnostics));

    AppState {
        forecast_service,
        probe_service,
    }
}
