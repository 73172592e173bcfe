//! Prometheus request metrics.
//!
//! Every HTTP request is counted in `http_requests_total{method,endpoint,status}`
//! and timed in `http_request_duration_seconds{method,endpoint}`. The
//! `endpoint` label is the matched route template, so unknown paths collapse
//! into a single `unmatched` series. The text exposition is served at
//! `GET /metrics`.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{Unit, counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};

use crate::error::StatusError;

/// Request counter name.
pub const REQUESTS_TOTAL: &str = "http_requests_total";

/// Request latency histogram name.
pub const REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// `endpoint` label for requests that matched no route.
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

const DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

static RECORDER: OnceLock<Result<PrometheusHandle, String>> = OnceLock::new();

/// Installs the process-wide Prometheus recorder and returns its handle.
///
/// Only the first call installs; later calls return the same handle.
///
/// # Errors
///
/// Returns [`StatusError::Internal`] if a different global recorder was
/// already installed.
pub fn install_recorder() -> Result<PrometheusHandle, StatusError> {
    RECORDER
        .get_or_init(|| build_recorder().map_err(|e| e.to_string()))
        .clone()
        .map_err(StatusError::Internal)
}

fn build_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(REQUEST_DURATION_SECONDS.to_string()),
            DURATION_BUCKETS,
        )?
        .install_recorder()?;

    describe_counter!(REQUESTS_TOTAL, "Total HTTP requests");
    describe_histogram!(REQUEST_DURATION_SECONDS, Unit::Seconds, "HTTP request duration");
    tracing::info!("prometheus recorder installed");

    Ok(handle)
}

/// Axum middleware recording the count and latency of every request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_ENDPOINT, MatchedPath::as_str)
        .to_string();

    let response = next.run(request).await;

    record_request(method, endpoint, response.status().as_u16(), start.elapsed());
    response
}

/// Records one finished request.
pub fn record_request(method: String, endpoint: String, status: u16, elapsed: Duration) {
    counter!(
        REQUESTS_TOTAL,
        "method" => method.clone(),
        "endpoint" => endpoint.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(REQUEST_DURATION_SECONDS, "method" => method, "endpoint" => endpoint)
        .record(elapsed.as_secs_f64());
}
