//! Dashboard controller: fetch-on-mount and record-then-refresh.

use std::sync::Arc;

use tokio::task::JoinSet;

use super::render::DashboardView;
use super::state::{DashboardState, FetchOutcome};
use super::{ClientError, DashboardApi};
use crate::domain::StatusRecord;

/// Drives the dashboard against a [`DashboardApi`].
///
/// # Concurrency
///
/// - [`Dashboard::mount`] runs the three initial fetches as independent
///   tasks. Each outcome is applied as soon as its task finishes, so one
///   slow or failing fetch never holds back the others.
/// - [`Dashboard::record`] is sequential: the refresh is only issued after
///   the create call resolves.
/// - Neither path retries.
#[derive(Debug)]
pub struct Dashboard<A> {
    api: Arc<A>,
    state: DashboardState,
}

impl<A: DashboardApi> Dashboard<A> {
    /// Creates an idle dashboard with empty slots.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self::with_shared(Arc::new(api))
    }

    /// Creates a dashboard over an already shared API handle.
    #[must_use]
    pub fn with_shared(api: Arc<A>) -> Self {
        Self {
            api,
            state: DashboardState::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Renders the current state.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView::from_state(&self.state)
    }

    /// Fetches greeting, health, and recent list concurrently.
    pub async fn mount(&mut self) {
        let mut tasks = JoinSet::new();

        let api = Arc::clone(&self.api);
        tasks.spawn(async move { FetchOutcome::Hello(api.greet().await) });

        let api = Arc::clone(&self.api);
        tasks.spawn(async move { FetchOutcome::Health(api.health().await) });

        let api = Arc::clone(&self.api);
        tasks.spawn(async move { FetchOutcome::Items(api.recent().await) });

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => {
                    if let Some(err) = outcome_error(&outcome) {
                        tracing::warn!(error = %err, "dashboard fetch failed");
                    }
                    self.state.apply(outcome);
                }
                Err(join_err) => {
                    tracing::error!(error = %join_err, "dashboard fetch task aborted");
                    self.state
                        .fail(&ClientError::Transport(format!("fetch task aborted: {join_err}")));
                }
            }
        }
    }

    /// Records `client_name`, then refreshes the recent list.
    ///
    /// Returns the created record when the create call succeeded, even if
    /// the refresh afterwards failed. Any failure lands in the error slot;
    /// the dashboard always ends back in `Idle`. Returns `None` without
    /// doing anything if an action is already in flight.
    pub async fn record(&mut self, client_name: &str) -> Option<StatusRecord> {
        if !self.state.begin_record() {
            return None;
        }

        let created = match self.api.record(client_name).await {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(error = %err, "recording status failed");
                self.state.finish_record(Err(err));
                return None;
            }
        };

        let refreshed = self.api.recent().await;
        if let Err(err) = &refreshed {
            tracing::warn!(error = %err, "refreshing recent list failed");
        }
        self.state.finish_record(refreshed);
        Some(created)
    }
}

fn outcome_error(outcome: &FetchOutcome) -> Option<&ClientError> {
    match outcome {
        FetchOutcome::Hello(Err(err))
        | FetchOutcome::Health(Err(err))
        | FetchOutcome::Items(Err(err)) => Some(err),
        _ => None,
    }
}
