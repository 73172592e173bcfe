//! HTTP-level scenarios for the `/api` endpoints.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use status_gateway::api;
use status_gateway::domain::StatusRecord;
use status_gateway::error::ErrorResponse;

async fn body_json(response: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn greeting_and_health_over_router() -> anyhow::Result<()> {
    let (state, _) = common::test_state()?;
    let app = api::build_app(state, std::time::Duration::from_secs(10));

    let response = app
        .clone()
        .oneshot(Request::get("/api/").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await?, json!({ "message": "Hello World" }));

    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let health = body_json(response).await?;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["db"], "connected");
    Ok(())
}

#[tokio::test]
async fn malformed_body_and_limit_are_client_errors() -> anyhow::Result<()> {
    let (state, store) = common::test_state()?;
    let app = api::build_app(state, std::time::Duration::from_secs(10));

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/status")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await?;
    assert_eq!(body["error"]["code"], 1001);

    let response = app
        .oneshot(Request::get("/api/status?limit=many").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(store.is_empty().await);
    Ok(())
}

async fn scrape(app: Router) -> anyhow::Result<String> {
    let response = app
        .oneshot(Request::get("/metrics").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"), "{content_type}");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Sum of `http_requests_total` samples for one method/endpoint/status.
fn requests_counted(exposition: &str, method: &str, endpoint: &str, status: u16) -> f64 {
    let method = format!(r#"method="{method}""#);
    let endpoint = format!(r#"endpoint="{endpoint}""#);
    let status = format!(r#"status="{status}""#);
    exposition
        .lines()
        .filter(|line| line.starts_with("http_requests_total{"))
        .filter(|line| line.contains(&method) && line.contains(&endpoint) && line.contains(&status))
        .filter_map(|line| line.rsplit(' ').next()?.parse::<f64>().ok())
        .sum()
}

#[tokio::test]
async fn handled_requests_are_counted_in_metrics() -> anyhow::Result<()> {
    let (state, _) = common::test_state()?;
    let app = api::build_app(state, std::time::Duration::from_secs(10));

    let before = scrape(app.clone()).await?;
    let health_before = requests_counted(&before, "GET", "/api/health", 200);
    let rejected_before = requests_counted(&before, "POST", "/api/status", 400);

    let response = app
        .clone()
        .oneshot(Request::get("/api/health").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/status")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"client_name":""}"#))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let after = scrape(app).await?;
    assert!(
        requests_counted(&after, "GET", "/api/health", 200) >= health_before + 1.0,
        "{after}"
    );
    assert!(
        requests_counted(&after, "POST", "/api/status", 400) >= rejected_before + 1.0,
        "{after}"
    );
    assert!(
        after
            .lines()
            .any(|line| line.starts_with("http_request_duration_seconds_bucket")
                && line.contains(r#"endpoint="/api/health""#)),
        "{after}"
    );
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let (state, _) = common::test_state()?;
    let app = api::build_app(state, std::time::Duration::from_secs(10));

    let response = app
        .oneshot(Request::get("/api-docs/openapi.json").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await?;
    assert!(doc["paths"]["/api/status"].is_object());
    Ok(())
}

#[tokio::test]
async fn empty_store_lists_nothing() -> anyhow::Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/api/status")).send().await?;
    assert_eq!(response.status().as_u16(), 200);
    let list: Vec<StatusRecord> = response.json().await?;
    assert!(list.is_empty());
    Ok(())
}

#[tokio::test]
async fn created_record_is_listed_first() -> anyhow::Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let _ = client
        .post(server.url("/api/status"))
        .json(&json!({ "client_name": "older" }))
        .send()
        .await?;

    let response = client
        .post(server.url("/api/status"))
        .json(&json!({ "client_name": "web-app" }))
        .send()
        .await?;
    assert_eq!(response.status().as_u16(), 201);
    let created: StatusRecord = response.json().await?;
    assert_eq!(created.client_name, "web-app");

    let list: Vec<StatusRecord> = client
        .get(server.url("/api/status"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(list.len(), 2);
    assert_eq!(list.first(), Some(&created));
    Ok(())
}

#[tokio::test]
async fn empty_client_name_is_rejected_and_list_unchanged() -> anyhow::Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let _ = client
        .post(server.url("/api/status"))
        .json(&json!({ "client_name": "keep" }))
        .send()
        .await?;
    let before: Vec<StatusRecord> = client
        .get(server.url("/api/status"))
        .send()
        .await?
        .json()
        .await?;

    for body in [json!({ "client_name": "" }), json!({ "client_name": "  " }), json!({})] {
        let response = client
            .post(server.url("/api/status"))
            .json(&body)
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 400, "{body}");
        let error: ErrorResponse = response.json().await?;
        assert_eq!(error.error.code, 1001);
    }

    let after: Vec<StatusRecord> = client
        .get(server.url("/api/status"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(before, after);
    assert_eq!(server.store.len().await, 1);
    Ok(())
}

#[tokio::test]
async fn listing_honours_limit_and_cap() -> anyhow::Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    for i in 0..7 {
        let response = client
            .post(server.url("/api/status"))
            .json(&json!({ "client_name": format!("client-{i}") }))
            .send()
            .await?;
        tokio_test::assert_ok!(response.error_for_status());
    }

    let default_window: Vec<StatusRecord> = client
        .get(server.url("/api/status"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(default_window.len(), 5);
    let names: Vec<&str> = default_window
        .iter()
        .map(|r| r.client_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["client-6", "client-5", "client-4", "client-3", "client-2"]
    );

    let all: Vec<StatusRecord> = client
        .get(server.url("/api/status?limit=1000"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(all.len(), 7);

    let one: Vec<StatusRecord> = client
        .get(server.url("/api/status?limit=0"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(one.len(), 1);

    let negative: Vec<StatusRecord> = client
        .get(server.url("/api/status?limit=-1"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(negative.len(), 1);

    let response = client
        .get(server.url("/api/status?limit=5000000000"))
        .send()
        .await?;
    assert_eq!(response.status().as_u16(), 200);
    let oversized: Vec<StatusRecord> = response.json().await?;
    assert_eq!(oversized.len(), 7);
    Ok(())
}

#[tokio::test]
async fn unreachable_store_degrades_health_and_fails_listing() -> anyhow::Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();
    server.store.set_available(false);

    let response = client.get(server.url("/api/health")).send().await?;
    assert_eq!(response.status().as_u16(), 200);
    let health: Value = response.json().await?;
    assert_eq!(health["status"], "degraded");
    assert_eq!(health["db"], "unavailable");

    let response = client.get(server.url("/api/status")).send().await?;
    assert!(response.status().is_server_error());

    let response = client
        .post(server.url("/api/status"))
        .json(&json!({ "client_name": "web-app" }))
        .send()
        .await?;
    assert!(response.status().is_server_error());
    tokio_test::assert_err!(response.error_for_status());
    Ok(())
}
