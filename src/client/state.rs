//! Explicit dashboard state and its transitions.
//!
//! [`DashboardState`] is only mutated through the methods defined here.
//! Each initial fetch resolves into a [`FetchOutcome`] that owns exactly
//! one slot; the error slot is shared and holds the latest failure.

use super::ClientError;
use crate::domain::{HealthSnapshot, StatusRecord};

/// Whether a record-then-refresh action is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in flight; the dashboard accepts actions.
    #[default]
    Idle,
    /// A record action and its follow-up refresh are running.
    Loading,
}

/// Result of one of the independent initial fetches.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Greeting fetch.
    Hello(Result<String, ClientError>),
    /// Health fetch.
    Health(Result<HealthSnapshot, ClientError>),
    /// Recent-list fetch.
    Items(Result<Vec<StatusRecord>, ClientError>),
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    phase: Phase,
    hello: Option<String>,
    health: Option<HealthSnapshot>,
    items: Vec<StatusRecord>,
    error: Option<String>,
}

impl DashboardState {
    /// Creates an idle, empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one fetch outcome.
    ///
    /// Success writes only the outcome's own slot. Failure leaves every
    /// data slot untouched and records the message in the error slot.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Hello(Ok(message)) => self.hello = Some(message),
            FetchOutcome::Health(Ok(snapshot)) => self.health = Some(snapshot),
            FetchOutcome::Items(Ok(items)) => self.items = items,
            FetchOutcome::Hello(Err(err))
            | FetchOutcome::Health(Err(err))
            | FetchOutcome::Items(Err(err)) => self.fail(&err),
        }
    }

    /// `Idle -> Loading`. A new attempt supersedes the previous error.
    ///
    /// Returns `false`, changing nothing, if an action is already in
    /// flight.
    pub fn begin_record(&mut self) -> bool {
        if self.phase == Phase::Loading {
            return false;
        }
        self.phase = Phase::Loading;
        self.error = None;
        true
    }

    /// `Loading -> Idle`, applying the refreshed list or the failure.
    pub fn finish_record(&mut self, refreshed: Result<Vec<StatusRecord>, ClientError>) {
        match refreshed {
            Ok(items) => self.items = items,
            Err(err) => self.fail(&err),
        }
        self.phase = Phase::Idle;
    }

    /// Records a failure message without touching any data slot.
    pub fn fail(&mut self, err: &ClientError) {
        self.error = Some(err.to_string());
    }

    /// Returns `true` while a record action is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Current action phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Greeting from the backend, once fetched.
    #[must_use]
    pub fn hello(&self) -> Option<&str> {
        self.hello.as_deref()
    }

    /// Latest health snapshot, once fetched.
    #[must_use]
    pub const fn health(&self) -> Option<HealthSnapshot> {
        self.health
    }

    /// Recent records as returned by the backend.
    #[must_use]
    pub fn items(&self) -> &[StatusRecord] {
        &self.items
    }

    /// Human-readable message of the latest failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::ClientName;

    fn record(name: &str) -> StatusRecord {
        let Ok(name) = ClientName::parse(name) else {
            panic!("valid name");
        };
        StatusRecord::new(name, Utc::now())
    }

    fn server_error() -> ClientError {
        ClientError::Http {
            status: 503,
            message: "store unavailable".to_string(),
        }
    }

    #[test]
    fn failed_fetch_keeps_other_slots() {
        let mut state = DashboardState::new();
        state.apply(FetchOutcome::Hello(Ok("Hello World".to_string())));
        state.apply(FetchOutcome::Health(Ok(HealthSnapshot::from_probe(
            false,
            Utc::now(),
        ))));
        state.apply(FetchOutcome::Items(Err(server_error())));

        assert_eq!(state.hello(), Some("Hello World"));
        assert!(state.health().is_some());
        assert!(state.items().is_empty());
        assert_eq!(
            state.error(),
            Some("store unavailable (HTTP 503)")
        );
    }

    #[test]
    fn failed_fetch_does_not_clear_previous_items() {
        let mut state = DashboardState::new();
        state.apply(FetchOutcome::Items(Ok(vec![record("a")])));
        state.apply(FetchOutcome::Items(Err(server_error())));
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn last_failure_wins() {
        let mut state = DashboardState::new();
        state.apply(FetchOutcome::Hello(Err(ClientError::Transport(
            "first".to_string(),
        ))));
        state.apply(FetchOutcome::Health(Err(ClientError::Transport(
            "second".to_string(),
        ))));
        assert_eq!(state.error(), Some("network error: second"));
    }

    #[test]
    fn record_cycle_returns_to_idle() {
        let mut state = DashboardState::new();
        state.fail(&server_error());

        assert!(state.begin_record());
        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert!(!state.begin_record());

        state.finish_record(Ok(vec![record("web-app")]));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.items().len(), 1);
        assert!(state.error().is_none());
    }

    #[test]
    fn failed_record_is_advisory() {
        let mut state = DashboardState::new();
        assert!(state.begin_record());
        state.finish_record(Err(ClientError::Http {
            status: 400,
            message: "invalid input: client_name must not be empty".to_string(),
        }));
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.error().is_some());
        assert!(state.begin_record());
    }
}
