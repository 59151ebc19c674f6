//! Diagnostics port for application-level events.

/// Sink for diagnostic events emitted by application services.
///
/// Services receive a sink at construction time rather than logging
/// directly, so tests can observe (or assert the absence of) diagnostic
/// output.
///
/// # Implementations
///
/// - [`crate::infrastructure::diagnostics::TracingSink`] - forwards to the `tracing` facade
/// - [`crate::infrastructure::diagnostics::NullSink`] - no-op, for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticsSink: Send + Sync {
    /// Records that a forecast batch of `days` entries was generated.
    fn forecast_generated(&self, days: u16);

    /// Records the outcome of a readiness probe evaluation.
    fn probe_evaluated(&self, ready: bool);
}
