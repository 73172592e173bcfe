//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted under `/api`, apart from the Prometheus scrape
//! endpoint at `/metrics`. The OpenAPI document is served at
//! `/api-docs/openapi.json`, with Swagger UI at `/swagger-ui` when the
//! `swagger-ui` feature is enabled.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::time::Duration;

use axum::Router;
use axum::middleware;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::telemetry;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new().merge(handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
    );

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route(
        "/api-docs/openapi.json",
        axum::routing::get(|| async { axum::Json(openapi::ApiDoc::openapi()) }),
    );

    router
}

/// Builds the servable application: routes, state, and the HTTP layers.
///
/// Layers, outermost first: request tracing, permissive CORS, request
/// metrics, per-request timeout. Metrics sit outside the timeout so timed
/// out requests are counted with their `408`.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    build_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(telemetry::track_requests))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
