//! Status-check handlers: record and list.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateStatusRequest, RecentQuery};
use crate::app_state::AppState;
use crate::domain::StatusRecord;
use crate::error::{ErrorResponse, StatusError};

/// `POST /api/status` — Record a status check.
///
/// # Errors
///
/// Returns [`StatusError::InvalidInput`] for a malformed body or an empty
/// `client_name`, or a storage error if the write fails.
#[utoipa::path(
    post,
    path = "/api/status",
    tag = "Status",
    summary = "Record a status check",
    description = "Creates a status record for the given client. The server assigns the identifier and timestamp.",
    request_body = CreateStatusRequest,
    responses(
        (status = 201, description = "Status recorded", body = StatusRecord),
        (status = 400, description = "Missing or empty client_name", body = ErrorResponse),
        (status = 500, description = "Store rejected the write", body = ErrorResponse),
        (status = 503, description = "Store unreachable", body = ErrorResponse),
    )
)]
pub async fn create_status(
    State(state): State<AppState>,
    payload: Result<Json<CreateStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, StatusError> {
    let Json(req) = payload.map_err(|rejection| StatusError::InvalidInput(rejection.body_text()))?;

    let record = state.status_service.record(&req.client_name).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /api/status` — List the most recent status checks.
///
/// # Errors
///
/// Returns [`StatusError::InvalidInput`] for a non-integer `limit`, or a
/// storage error if the read fails.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Status",
    summary = "List recent status checks",
    description = "Returns the most recent status records, newest first. `limit` defaults to 5; any integer is clamped to [1, 100].",
    params(RecentQuery),
    responses(
        (status = 200, description = "Recent records, newest first", body = Vec<StatusRecord>),
        (status = 400, description = "Non-integer limit", body = ErrorResponse),
        (status = 503, description = "Store unreachable", body = ErrorResponse),
    )
)]
pub async fn list_status(
    State(state): State<AppState>,
    query: Result<Query<RecentQuery>, QueryRejection>,
) -> Result<impl IntoResponse, StatusError> {
    let Query(params) = query.map_err(|rejection| StatusError::InvalidInput(rejection.body_text()))?;

    let records = state.status_service.recent(params.requested_limit()).await?;

    Ok(Json(records))
}

/// Status routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/status", get(list_status).post(create_status))
}
