//! Status-check DTOs for the record and list endpoints.
//!
//! Responses reuse the domain types directly: a listing is a JSON array of
//! [`crate::domain::StatusRecord`] and health is a
//! [`crate::domain::HealthSnapshot`].

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Request body for `POST /api/status`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStatusRequest {
    /// Name of the reporting client. Must be non-empty after trimming.
    /// A missing field is treated as empty.
    #[serde(default)]
    pub client_name: String,
}

impl CreateStatusRequest {
    /// Builds a request for the given client name.
    #[must_use]
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
        }
    }
}

/// Query parameters for `GET /api/status`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentQuery {
    /// Number of records to return. Defaults to 5; out-of-range values
    /// are clamped to [1, 100].
    #[serde(default)]
    pub limit: Option<i64>,
}

impl RecentQuery {
    /// The requested limit saturated into `u32`; the service clamps it
    /// to its window.
    #[must_use]
    pub fn requested_limit(&self) -> Option<u32> {
        self.limit
            .map(|limit| u32::try_from(limit.max(0)).unwrap_or(u32::MAX))
    }
}
