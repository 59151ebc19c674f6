//! API route configuration.

use crate::api::handlers::forecast_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// API routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `GET /forecast` - Daily forecasts (optional `days` query parameter)
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/forecast", get(forecast_handler))
}
