//! Service error types with HTTP status code mapping.
//!
//! [`StatusError`] is the central error type for the server. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid input: client_name must not be empty"
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see [`StatusError::error_code`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// Store errors travel unchanged from the store through the service to the
/// API boundary, which only translates them into a response.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                   |
/// |-----------|------------|-------------------------------|
/// | 1000–1999 | Validation | 400 Bad Request               |
/// | 3000–3999 | Server     | 500 / 503                     |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    /// Caller-supplied data failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store was reachable but rejected the write.
    #[error("store write failed: {0}")]
    StoreWriteError(String),

    /// The store was reachable but the read failed.
    #[error("store read failed: {0}")]
    StoreReadError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl StatusError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidInput(_) => 1001,
            Self::Internal(_) => 3000,
            Self::StoreUnavailable(_) => 3001,
            Self::StoreWriteError(_) => 3002,
            Self::StoreReadError(_) => 3003,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::StoreWriteError(_) | Self::StoreReadError(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns `true` for failures caused by the caller.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl IntoResponse for StatusError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        } else {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
