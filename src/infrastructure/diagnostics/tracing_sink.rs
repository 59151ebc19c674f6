//! Tracing-backed diagnostics sink.

use crate::domain::diagnostics::DiagnosticsSink;

/// Forwards diagnostic events to the global `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticsSink for TracingSink {
    fn forecast_generated(&self, days: u16) {
        tracing::debug!(days, "Forecast batch generated");
    }

    fn probe_evaluated(&self, ready: bool) {
        tracing::debug!(ready, "Readiness probe evaluated");
    }
}
