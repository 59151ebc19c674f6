//! Handler for the daily forecast endpoint.

use axum::{Json, extract::Query, extract::State};
use validator::Validate;

use crate::api::dto::forecast::{ForecastItem, ForecastQuery, ForecastResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns daily weather forecasts.
///
/// # Endpoint
///
/// `GET /api/forecast?days=N`
///
/// The `days` parameter is optional; when omitted the configured default
/// window is used.
///
/// # Response
///
/// ```json
/// {
///   "count": 2,
///   "items": [
///     {
///       "date": "2026-08-08",
///       "temperature_c": 21,
///       "temperature_f": 69,
///       "summary": "Warm"
///     },
///     {
///       "date": "2026-08-09",
///       "temperature_c": -3,
///       "temperature_f": 26,
///       "summary": "Bracing"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `days` is zero or exceeds the configured
/// maximum window.
pub async fn forecast_handler(
    State(state): State<AppState>,
    Query(params): Query<ForecastQuery>,
) -> Result<Json<ForecastResponse>, AppError> {
    params.validate()?;

    let days = params
        .days
        .unwrap_or_else(|| state.forecast_service.default_days());

    let forecasts = state.forecast_service.daily(days)?;

    metrics::counter!("forecast_requests_total").increment(1);

    Ok(Json(ForecastResponse {
        count: forecasts.len(),
        items: forecasts.into_iter().map(ForecastItem::from).collect(),
    }))
}
