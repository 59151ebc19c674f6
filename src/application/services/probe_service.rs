//! Liveness/readiness probe service.

use crate::domain::diagnostics::DiagnosticsSink;
use std::sync::Arc;

/// Service answering readiness probes.
///
/// The service holds no state and no external connections, so readiness
/// never degrades once the process is up.
pub struct ProbeService {
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl ProbeService {
    /// Creates a new probe service with the given diagnostics sink.
    pub fn new(diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        Self { diagnostics }
    }

    /// Reports whether the service is ready to accept traffic.
    ///
    /// Takes no input, has no side effects, and cannot fail. A stateless
    /// service is ready as soon as it is constructed, so this always
    /// returns `true`.
    pub fn is_ready(&self) -> bool {
        true
    }

    /// Evaluates readiness and records the outcome.
    ///
    /// Used by the `/ready` endpoint so probe traffic shows up in
    /// diagnostics.
    pub fn check(&self) -> bool {
        let ready = self.is_ready();
        self.diagnostics.probe_evaluated(ready);
        ready
    }
}
