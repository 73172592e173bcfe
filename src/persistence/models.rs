//! Database models for stored status checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{RecordId, StatusRecord};

/// Store-assigned insertion sequence.
///
/// Strictly increasing in insertion order; used as the secondary sort key
/// when two records share a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredId(pub i64);

impl std::fmt::Display for StoredId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row from the `status_checks` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckRow {
    /// Auto-increment insertion sequence.
    pub seq: i64,
    /// Record identifier.
    pub id: Uuid,
    /// Reporting client name.
    pub client_name: String,
    /// Server-side creation timestamp.
    pub timestamp: DateTime<Utc>,
}

impl From<(i64, Uuid, String, DateTime<Utc>)> for StatusCheckRow {
    fn from((seq, id, client_name, timestamp): (i64, Uuid, String, DateTime<Utc>)) -> Self {
        Self {
            seq,
            id,
            client_name,
            timestamp,
        }
    }
}

impl From<StatusCheckRow> for StatusRecord {
    fn from(row: StatusCheckRow) -> Self {
        Self {
            id: RecordId::from_uuid(row.id),
            client_name: row.client_name,
            timestamp: row.timestamp,
        }
    }
}
