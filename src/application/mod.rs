//! Application layer services implementing business logic.
//!
//! Services consume the domain diagnostics port and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::forecast_service::ForecastService`] - Daily forecast generation
//! - [`services::probe_service::ProbeService`] - Liveness/readiness probing

pub mod services;
