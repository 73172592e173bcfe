//! Status service: validates input, stamps records, reads the recent window.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{ClientName, HealthSnapshot, MonotonicClock, StatusRecord};
use crate::error::StatusError;
use crate::persistence::StatusStore;

/// Bounds of the recent window returned by [`StatusService::recent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentWindow {
    default_limit: u32,
    cap: u32,
}

impl RecentWindow {
    /// Limit applied when the caller supplies none.
    pub const DEFAULT_LIMIT: u32 = 5;
    /// Upper bound on any listing, whatever the caller asks for.
    pub const DEFAULT_CAP: u32 = 100;

    /// Creates a window. `cap` is raised to at least 1 and `default_limit`
    /// is clamped into `[1, cap]`.
    #[must_use]
    pub fn new(default_limit: u32, cap: u32) -> Self {
        let cap = cap.max(1);
        Self {
            default_limit: default_limit.clamp(1, cap),
            cap,
        }
    }

    /// Limit used when none is requested.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Maximum number of records ever returned.
    #[must_use]
    pub const fn cap(&self) -> u32 {
        self.cap
    }

    /// Resolves a caller-supplied limit to one within `[1, cap]`.
    #[must_use]
    pub fn resolve(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_limit)
            .clamp(1, self.cap)
    }
}

impl Default for RecentWindow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, Self::DEFAULT_CAP)
    }
}

/// Business logic for recording and listing status checks.
///
/// Holds no record state of its own: every record lives in the
/// [`StatusStore`]. The only internal state is the [`MonotonicClock`]
/// that keeps creation timestamps non-decreasing.
#[derive(Debug)]
pub struct StatusService {
    store: Arc<dyn StatusStore>,
    clock: MonotonicClock,
    window: RecentWindow,
    greeting: String,
}

impl StatusService {
    /// Creates a new `StatusService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn StatusStore>, window: RecentWindow, greeting: impl Into<String>) -> Self {
        Self {
            store,
            clock: MonotonicClock::new(),
            window,
            greeting: greeting.into(),
        }
    }

    /// Records that `client_name` reported in.
    ///
    /// This is the only write path. The name is trimmed and validated
    /// before anything touches the store.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::InvalidInput`] for an empty or oversized
    /// name, or the store's error if the append fails.
    pub async fn record(&self, client_name: &str) -> Result<StatusRecord, StatusError> {
        let name = ClientName::parse(client_name)?;
        let record = StatusRecord::new(name, self.clock.now());

        let seq = self.store.append(&record).await?;

        tracing::info!(
            id = %record.id,
            %seq,
            client_name = %record.client_name,
            "status recorded"
        );
        Ok(record)
    }

    /// Lists the most recent records, newest first.
    ///
    /// `limit` defaults to the window's default and is clamped into
    /// `[1, cap]`.
    ///
    /// # Errors
    ///
    /// Propagates the store's error unchanged.
    pub async fn recent(&self, limit: Option<u32>) -> Result<Vec<StatusRecord>, StatusError> {
        let limit = self.window.resolve(limit);
        let records = self.store.list_recent(limit).await?;
        tracing::debug!(limit, returned = records.len(), "recent status listed");
        Ok(records)
    }

    /// Probes the store and reports health. Never fails.
    pub async fn health(&self) -> HealthSnapshot {
        let reachable = self.store.ping().await;
        if !reachable {
            tracing::warn!("store unreachable; reporting degraded health");
        }
        HealthSnapshot::from_probe(reachable, Utc::now())
    }

    /// Static liveness greeting.
    #[must_use]
    pub fn greet(&self) -> &str {
        &self.greeting
    }
}
