//! DTO for the readiness probe endpoint.

use serde::Serialize;

/// Readiness probe response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
}
