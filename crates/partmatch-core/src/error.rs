//! Error types for the PartMatch client core.

use thiserror::Error;

/// Errors produced by calls against the part-matching backend.
///
/// The flows treat every variant the same way: the failed call becomes a
/// fixed per-flow toast and the error stops there. The variants exist so
/// logs can tell a dead network from a server rejection from a payload
/// the client no longer understands.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request could not be sent or the connection failed mid-flight
    #[error("Request failed: {0}")]
    Transport(String),
    /// Backend answered with a non-2xx status
    #[error("Backend returned HTTP {0}")]
    Status(u16),
    /// Response body could not be decoded into the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> String {
        err.to_string()
    }
}
