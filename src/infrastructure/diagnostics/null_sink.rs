//! No-op diagnostics sink.

use crate::domain::diagnostics::DiagnosticsSink;

/// Discards all diagnostic events.
///
/// Used by integration tests that need a functioning service without a
/// subscriber.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn forecast_generated(&self, _days: u16) {}

    fn probe_evaluated(&self, _ready: bool) {}
}
