//! In-process implementation of [`StatusStore`].
//!
//! Rows live in a `Vec` behind a [`tokio::sync::RwLock`]. Sequence
//! assignment and insertion happen under the same write lock, so the
//! insertion order is total. Reachability can be switched off to exercise
//! the degraded paths without a real database.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StatusStore, StoredId};
use crate::domain::StatusRecord;
use crate::error::StatusError;

#[derive(Debug, Default)]
struct Rows {
    entries: Vec<(StoredId, StatusRecord)>,
    last_seq: i64,
}

/// Volatile store holding every record in memory.
///
/// # Concurrency
///
/// - Listings take a read lock and may run concurrently.
/// - Appends take the write lock and are serialized.
#[derive(Debug)]
pub struct InMemoryStore {
    rows: RwLock<Rows>,
    available: AtomicBool,
}

impl InMemoryStore {
    /// Creates an empty, reachable store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Marks the store reachable or unreachable.
    ///
    /// While unreachable, `append` and `list_recent` fail with
    /// [`StatusError::StoreUnavailable`] and `ping` returns `false`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
        tracing::debug!(available, "in-memory store reachability changed");
    }

    /// Returns `true` if the store is currently reachable.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.rows.read().await.entries.len()
    }

    /// Returns `true` if no record has been stored.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.entries.is_empty()
    }

    fn ensure_available(&self) -> Result<(), StatusError> {
        if self.is_available() {
            Ok(())
        } else {
            Err(StatusError::StoreUnavailable(
                "in-memory store is offline".to_string(),
            ))
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusStore for InMemoryStore {
    async fn append(&self, record: &StatusRecord) -> Result<StoredId, StatusError> {
        self.ensure_available()?;
        let mut rows = self.rows.write().await;
        if rows.entries.iter().any(|(_, r)| r.id == record.id) {
            return Err(StatusError::StoreWriteError(format!(
                "record {} already exists",
                record.id
            )));
        }
        rows.last_seq = rows
            .last_seq
            .checked_add(1)
            .ok_or_else(|| StatusError::StoreWriteError("sequence exhausted".to_string()))?;
        let seq = StoredId(rows.last_seq);
        rows.entries.push((seq, record.clone()));
        Ok(seq)
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<StatusRecord>, StatusError> {
        self.ensure_available()?;
        let rows = self.rows.read().await;
        let mut ordered: Vec<&(StoredId, StatusRecord)> = rows.entries.iter().collect();
        ordered.sort_by(|(seq_a, a), (seq_b, b)| {
            b.timestamp.cmp(&a.timestamp).then_with(|| seq_b.cmp(seq_a))
        });
        Ok(ordered
            .into_iter()
            .take(limit as usize)
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn ping(&self) -> bool {
        self.is_available()
    }
}
