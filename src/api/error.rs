//! Error types for upstream API calls.

use thiserror::Error;

/// Errors that can occur while talking to the CoWIN API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or body read failure.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status.
    #[error("Upstream returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// Body was not the JSON shape we expect.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Short message for the status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "HTTP client unavailable",
            ApiError::Transport { .. } => "Could not reach CoWIN",
            ApiError::Status { .. } => "CoWIN rejected the request",
            ApiError::Decode { .. } => "Unexpected response from CoWIN",
        }
    }
}
