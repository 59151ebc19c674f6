//! Business logic services for the application layer.

pub mod forecast_service;
pub mod probe_service;

pub use forecast_service::ForecastService;
pub use probe_service::ProbeService;
