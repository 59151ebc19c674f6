//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Forecast**: Generates a one-day sample
/// 2. **Probe**: Evaluates the readiness probe
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let forecast_check = check_forecast(&state);

    let probe_check = check_probe(&state);

    let all_healthy = forecast_check.status == "ok" && probe_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            forecast: forecast_check,
            probe: probe_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the forecast generator by sampling a one-day window.
fn check_forecast(state: &AppState) -> CheckStatus {
    match state.forecast_service.daily(1) {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Sample forecast generated".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Forecast error: {}", e)),
        },
    }
}

/// Checks the readiness probe.
fn check_probe(state: &AppState) -> CheckStatus {
    if state.probe_service.is_ready() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Ready".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Probe reported not ready".to_string()),
        }
    }
}
