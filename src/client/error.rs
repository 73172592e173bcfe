//! Client-side failures surfaced by the dashboard.

use std::time::Duration;

/// Failure of a single dashboard request.
///
/// The `Display` text is what the dashboard shows in its error slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// No response arrived within the configured timeout.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The backend answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message from the backend's error body, or the status reason.
        message: String,
    },

    /// The request never completed (connection refused, reset, DNS...).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The configured backend URL cannot be used.
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Classifies a `reqwest` failure.
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Returns `true` if the backend rejected the request as invalid.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Http { status, .. } if *status >= 400 && *status < 500)
    }

    /// Returns `true` if the backend reported a server-side failure.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Http { status, .. } if *status >= 500)
    }
}
