//! Error types for Pixgrid
//!
//! Failures raised while talking to the search API or downloading images.

use thiserror::Error;

/// Main error type for search and download operations.
///
/// Variants carry rendered strings instead of the underlying errors so the
/// type stays `Clone` and can ride inside UI messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Transport(String),

    #[error("search API returned HTTP {0}")]
    Status(u16),

    #[error("malformed search response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
