//! Handler for the readiness probe endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::ready::ReadyResponse;
use crate::state::AppState;

/// Reports whether the service is ready to accept traffic.
///
/// # Endpoint
///
/// `GET /ready`
///
/// # Response Codes
///
/// - **200 OK**: `{"ready": true}`
/// - **503 Service Unavailable**: the probe reported not ready
pub async fn ready_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadyResponse>, StatusCode> {
    if state.probe_service.check() {
        Ok(Json(ReadyResponse { ready: true }))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}
