//! System endpoints: greeting, health check, and Prometheus metrics.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::MessageResponse;
use crate::app_state::AppState;
use crate::domain::HealthSnapshot;

/// `GET /api/` — Liveness greeting.
#[utoipa::path(
    get,
    path = "/api/",
    tag = "System",
    summary = "Greeting",
    description = "Static informational message used by the dashboard to show the backend is alive.",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse),
    )
)]
pub async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(MessageResponse::new(state.status_service.greet()))
}

/// `GET /api/health` — Backend and store health.
///
/// Always answers 200: an unreachable store is reported in the body as
/// `degraded` / `unavailable`, not as an error status.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    summary = "Health check",
    description = "Probes the store and reports service and database status. Never cached.",
    responses(
        (status = 200, description = "Health snapshot", body = HealthSnapshot),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.status_service.health().await))
}

/// Content type of the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// `GET /metrics` — Prometheus scrape endpoint.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "System",
    summary = "Prometheus metrics",
    description = "Request counters and latency histograms in the Prometheus text format.",
    responses(
        (status = 200, description = "Metrics exposition", body = String, content_type = "text/plain"),
    )
)]
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        state.metrics.render(),
    )
}

/// System routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/", get(root_handler))
        .route("/api/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
}
