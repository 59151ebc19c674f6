//! DTOs for the daily forecast endpoint.

use crate::domain::entities::Forecast;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the forecast endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct ForecastQuery {
    /// Number of days to forecast. Defaults to the configured window.
    ///
    /// The protocol-level cap is 31; the configured maximum may be lower
    /// and is enforced by the service.
    #[validate(range(min = 1, max = 31))]
    pub days: Option<u16>,
}

/// Response containing the forecast window.
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub count: usize,
    pub items: Vec<ForecastItem>,
}

/// A single day's forecast.
#[derive(Debug, Serialize)]
pub struct ForecastItem {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: String,
}

impl From<Forecast> for ForecastItem {
    fn from(forecast: Forecast) -> Self {
        Self {
            date: forecast.date,
            temperature_c: forecast.temperature_c,
            temperature_f: forecast.temperature_f(),
            summary: forecast.summary,
        }
    }
}
