//! Gateway error taxonomy
//!
//! Every failure a gateway handler can see falls into one of three kinds.
//! Raw downstream diagnostics stay in the log sink; the `Display` strings
//! here are what clients are allowed to see.

use thiserror::Error;

/// Failures the gateway can surface to clients.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The internal service explicitly reported the id as absent.
    #[error("Item not found")]
    NotFound,

    /// Network-level failure reaching the internal service.
    #[error("Internal backend is not reachable")]
    UpstreamUnreachable(#[source] reqwest::Error),

    /// The internal service answered, but not with what we expected.
    #[error("Unexpected response from internal backend")]
    Internal(String),
}

impl GatewayError {
    /// Map a `reqwest` failure on an upstream call into the taxonomy.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Internal(err.to_string())
        } else {
            GatewayError::UpstreamUnreachable(err)
        }
    }
}
