//! PostgreSQL implementation of [`StatusStore`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::models::StatusCheckRow;
use super::{StatusStore, StoredId};
use crate::config::DatabaseSettings;
use crate::domain::StatusRecord;
use crate::error::StatusError;

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds a lazily-connecting pool from the given settings.
    ///
    /// No connection is opened until the first query, so the server can
    /// start (and report itself degraded) while the database is down.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Internal`] if the connection URL is invalid.
    pub fn connect_lazy(settings: &DatabaseSettings) -> Result<Self, StatusError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .acquire_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .connect_lazy(&settings.url)
            .map_err(|e| StatusError::Internal(format!("invalid database url: {e}")))?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::StoreUnavailable`] if the database cannot be
    /// reached, or [`StatusError::Internal`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), StatusError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::migrate::MigrateError::Execute(inner) if is_unreachable(&inner) => {
                    StatusError::StoreUnavailable(inner.to_string())
                }
                other => StatusError::Internal(format!("migration failed: {other}")),
            })?;
        tracing::info!("database migrations applied");
        Ok(())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl StatusStore for PostgresStore {
    async fn append(&self, record: &StatusRecord) -> Result<StoredId, StatusError> {
        let seq = sqlx::query_scalar::<_, i64>(
            "INSERT INTO status_checks (id, client_name, timestamp) VALUES ($1, $2, $3) RETURNING seq",
        )
        .bind(*record.id.as_uuid())
        .bind(&record.client_name)
        .bind(record.timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unreachable(&e) {
                StatusError::StoreUnavailable(e.to_string())
            } else {
                StatusError::StoreWriteError(e.to_string())
            }
        })?;

        Ok(StoredId(seq))
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<StatusRecord>, StatusError> {
        let rows = sqlx::query_as::<_, (i64, Uuid, String, DateTime<Utc>)>(
            "SELECT seq, id, client_name, timestamp FROM status_checks \
             ORDER BY timestamp DESC, seq DESC LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            if is_unreachable(&e) {
                StatusError::StoreUnavailable(e.to_string())
            } else {
                StatusError::StoreReadError(e.to_string())
            }
        })?;

        Ok(rows
            .into_iter()
            .map(|row| StatusRecord::from(StatusCheckRow::from(row)))
            .collect())
    }

    async fn ping(&self) -> bool {
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "database ping failed");
                false
            }
        }
    }
}

/// Returns `true` for errors meaning the database could not be reached at
/// all, as opposed to a reachable database rejecting the statement.
fn is_unreachable(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}
