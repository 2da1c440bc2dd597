//! Error types for calls to the analysis backend

use thiserror::Error;

/// Everything that can go wrong with a single backend call.
///
/// Payloads are plain strings so the error can be cloned into promises and
/// session actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The configured base URL could not be parsed or joined
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Connection refused, DNS failure, timeout...
    #[error("Network error: {0}")]
    Transport(String),

    /// Server answered with a non-2xx status
    #[error("Server responded with status {0}")]
    Status(u16),

    /// Body was not the expected JSON shape
    #[error("Unreadable response: {0}")]
    Decode(String),
}
