//! Persistence layer: append-and-list storage of status records.
//!
//! [`StatusStore`] is the seam between the service and the storage engine.
//! Two implementations ship with the crate: [`InMemoryStore`] for
//! single-process deployments and tests, and [`PostgresStore`] backed by
//! `sqlx::PgPool`.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

pub use memory::InMemoryStore;
pub use models::StoredId;
pub use postgres::PostgresStore;

use crate::domain::StatusRecord;
use crate::error::StatusError;

/// Durable, append-only storage of [`StatusRecord`]s.
///
/// Records are never updated or deleted. Ordering for listings is
/// `timestamp` descending, then insertion sequence descending, which gives
/// a total order even when two records share a timestamp.
#[async_trait]
pub trait StatusStore: Send + Sync + std::fmt::Debug {
    /// Persists a new record and returns its insertion sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::StoreUnavailable`] if the storage cannot be
    /// reached and [`StatusError::StoreWriteError`] for any other failure.
    async fn append(&self, record: &StatusRecord) -> Result<StoredId, StatusError>;

    /// Returns up to `limit` most recently created records, newest first.
    ///
    /// An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::StoreUnavailable`] if the storage cannot be
    /// reached.
    async fn list_recent(&self, limit: u32) -> Result<Vec<StatusRecord>, StatusError>;

    /// Probes storage reachability. Never fails; unreachable is `false`.
    async fn ping(&self) -> bool;
}
