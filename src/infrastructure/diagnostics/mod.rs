//! Diagnostics sink implementations.
//!
//! Provides two implementations of
//! [`crate::domain::diagnostics::DiagnosticsSink`]:
//! - [`TracingSink`] - Production sink forwarding to the `tracing` facade
//! - [`NullSink`] - No-op implementation for testing

mod null_sink;
mod tracing_sink;

pub use null_sink::NullSink;
pub use tracing_sink::TracingSink;
