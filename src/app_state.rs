//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::persistence::StatusStore;
use crate::service::{RecentWindow, StatusService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Status service for all business logic.
    pub status_service: Arc<StatusService>,
    /// Handle of the installed Prometheus recorder, rendered by `/metrics`.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Wraps a store in a [`StatusService`] and builds the state.
    #[must_use]
    pub fn new(
        store: Arc<dyn StatusStore>,
        window: RecentWindow,
        greeting: impl Into<String>,
        metrics: PrometheusHandle,
    ) -> Self {
        Self {
            status_service: Arc::new(StatusService::new(store, window, greeting)),
            metrics,
        }
    }
}
