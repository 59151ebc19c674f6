//! HTTP server initialization and runtime setup.
//!
//! Handles service wiring and the Axum server lifecycle.

use crate::application::services::{ForecastService, ProbeService};
use crate::config::Config;
use crate::domain::diagnostics::DiagnosticsSink;
use crate::infrastructure::diagnostics::TracingSink;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Tracing-backed diagnostics sink
/// - Forecast and probe services
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let diagnostics: Arc<dyn DiagnosticsSink> = Arc::new(TracingSink::new());

    let forecast_service = Arc::new(ForecastService::new(
        diagnostics.clone(),
        config.forecast_days_default,
        config.forecast_days_max,
    ));
    let probe_service = Arc::new(ProbeService::new(diagnostics));

    let state = AppState::new(forecast_service, probe_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {e}");
        return;
    }

    tracing::info!("Shutdown signal received");
}
