//! Fetch error types.

use thiserror::Error;

/// Message shown when the service gave no usable detail.
pub const GENERIC_DETAIL: &str = "Failed to load timeline";

/// Errors that can occur when reading from the timeline service.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error (connection refused, timeout, reset).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or(GENERIC_DETAIL))]
    Status {
        /// HTTP status code returned by the service.
        status: u16,
        /// `detail` field of the error body, when the body carried one.
        detail: Option<String>,
    },

    /// A success response whose body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Human-readable message for the error banner.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail,
            _ => GENERIC_DETAIL,
        }
    }

    /// HTTP status, when the service answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}
