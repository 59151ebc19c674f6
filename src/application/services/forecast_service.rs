//! Daily forecast generation service.

use crate::domain::diagnostics::DiagnosticsSink;
use crate::domain::entities::{Forecast, SUMMARIES};
use crate::error::AppError;
use chrono::{Duration, Utc};
use rand::Rng;
use serde_json::json;
use std::sync::Arc;

/// Coldest temperature a forecast may carry, in Celsius.
const TEMPERATURE_MIN_C: i32 = -20;

/// Hottest temperature a forecast may carry, in Celsius (exclusive).
const TEMPERATURE_MAX_C: i32 = 55;

/// Service generating daily weather forecasts.
///
/// Forecasts are sampled fresh on every call: the temperature uniformly
/// from [-20, 55) °C and the summary uniformly from [`SUMMARIES`]. The
/// window starts tomorrow and covers consecutive days.
pub struct ForecastService {
    diagnostics: Arc<dyn DiagnosticsSink>,
    default_days: u16,
    max_days: u16,
}

impl ForecastService {
    /// Creates a new forecast service.
    ///
    /// # Arguments
    ///
    /// - `diagnostics` - sink receiving generation events
    /// - `default_days` - window used when a request does not specify one
    /// - `max_days` - largest window a single request may ask for
    pub fn new(diagnostics: Arc<dyn DiagnosticsSink>, default_days: u16, max_days: u16) -> Self {
        Self {
            diagnostics,
            default_days,
            max_days,
        }
    }

    /// Window used when a request does not specify one.
    pub fn default_days(&self) -> u16 {
        self.default_days
    }

    /// Generates one forecast per day for `days` consecutive days,
    /// starting tomorrow.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `days` is zero or exceeds the
    /// configured maximum.
    pub fn daily(&self, days: u16) -> Result<Vec<Forecast>, AppError> {
        if days == 0 || days > self.max_days {
            return Err(AppError::bad_request(
                "Forecast window out of range",
                json!({ "requested": days, "min": 1, "max": self.max_days }),
            ));
        }

        let today = Utc::now().date_naive();
        let mut rng = rand::rng();

        let forecasts = (1..=i64::from(days))
            .map(|offset| {
                Forecast::new(
                    today + Duration::days(offset),
                    rng.random_range(TEMPERATURE_MIN_C..TEMPERATURE_MAX_C),
                    SUMMARIES[rng.random_range(0..SUMMARIES.len())].to_string(),
                )
            })
            .collect();

        self.diagnostics.forecast_generated(days);

        Ok(forecasts)
    }
}
