//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{CreateStatusRequest, MessageResponse};
use crate::api::handlers;
use crate::domain::{DbStatus, HealthSnapshot, RecordId, ServiceStatus, StatusRecord};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description of every `/api` endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "status-gateway",
        description = "Records client status checks and lists the most recent ones."
    ),
    paths(
        handlers::system::root_handler,
        handlers::system::health_handler,
        handlers::system::metrics_handler,
        handlers::status::list_status,
        handlers::status::create_status,
    ),
    components(schemas(
        CreateStatusRequest,
        MessageResponse,
        StatusRecord,
        RecordId,
        HealthSnapshot,
        ServiceStatus,
        DbStatus,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "System", description = "Liveness, health, and metrics"),
        (name = "Status", description = "Status-check recording and listing"),
    )
)]
pub struct ApiDoc;
