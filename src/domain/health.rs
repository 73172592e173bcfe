//! Point-in-time backend health assessment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Overall service status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// Every dependency is reachable.
    Ok,
    /// The service answers but its store does not.
    Degraded,
}

/// Reachability of the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DbStatus {
    /// The store answered the probe.
    Connected,
    /// The store could not be reached.
    Unavailable,
}

impl ServiceStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Degraded => "degraded",
        }
    }
}

impl DbStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Derived, never-cached view of backend health.
///
/// A failed probe is still a successful health computation; it only
/// changes the reported values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthSnapshot {
    /// Overall service status.
    pub status: ServiceStatus,
    /// Store reachability.
    pub db: DbStatus,
    /// When the probe ran.
    pub checked_at: DateTime<Utc>,
}

impl HealthSnapshot {
    /// Builds a snapshot from the outcome of a store probe.
    #[must_use]
    pub fn from_probe(reachable: bool, checked_at: DateTime<Utc>) -> Self {
        if reachable {
            Self {
                status: ServiceStatus::Ok,
                db: DbStatus::Connected,
                checked_at,
            }
        } else {
            Self {
                status: ServiceStatus::Degraded,
                db: DbStatus::Unavailable,
                checked_at,
            }
        }
    }

    /// Returns `true` when the store is reachable.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self.status, ServiceStatus::Ok)
    }
}
