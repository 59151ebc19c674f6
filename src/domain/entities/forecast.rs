//! Forecast entity for a single day.

use chrono::NaiveDate;

/// Descriptive summaries a forecast may carry, coldest to hottest.
///
/// The summary is sampled independently of the temperature, so a
/// "Freezing" day at 40 °C is possible. The vocabulary is fixed.
pub const SUMMARIES: &[&str] = &[
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// A weather forecast for a single calendar day.
///
/// Temperature is stored in Celsius; Fahrenheit is derived on demand via
/// [`Forecast::temperature_f`].
#[derive(Debug, Clone)]
pub struct Forecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: String,
}

impl Forecast {
    /// Creates a new Forecast instance.
    pub fn new(date: NaiveDate, temperature_c: i32, summary: String) -> Self {
        Self {
            date,
            temperature_c,
            summary,
        }
    }

    /// Temperature in Fahrenheit.
    ///
    /// Uses the truncating conversion `32 + trunc(c / 0.5556)`, so results
    /// differ by up to one degree from the exact `c * 9/5 + 32` formula.
    pub fn temperature_f(&self) -> i32 {
        32 + (f64::from(self.temperature_c) / 0.5556) as i32
    }
}
