//! Backend access for the dashboard.
//!
//! [`DashboardApi`] is the seam the controller talks through;
//! [`HttpDashboardApi`] implements it over HTTP with `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use super::ClientError;
use crate::api::dto::{CreateStatusRequest, MessageResponse};
use crate::domain::{HealthSnapshot, StatusRecord};
use crate::error::ErrorResponse;

/// Default bound on every dashboard request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The four backend calls the dashboard makes.
#[async_trait]
pub trait DashboardApi: Send + Sync + 'static {
    /// `GET /api/` — greeting message.
    async fn greet(&self) -> Result<String, ClientError>;

    /// `GET /api/health` — health snapshot.
    async fn health(&self) -> Result<HealthSnapshot, ClientError>;

    /// `GET /api/status` — recent records, newest first.
    async fn recent(&self) -> Result<Vec<StatusRecord>, ClientError>;

    /// `POST /api/status` — record a status check.
    async fn record(&self, client_name: &str) -> Result<StatusRecord, ClientError>;
}

/// [`DashboardApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    http: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpDashboardApi {
    /// Creates a client for the backend at `base_url`.
    ///
    /// Every request is bounded by `timeout`; exceeding it yields
    /// [`ClientError::Timeout`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is not an absolute
    /// http(s) URL, or [`ClientError::Transport`] if the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "unsupported scheme: {}",
                base_url.scheme()
            )));
        }
        // Relative joins replace the last path segment unless the base
        // path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        tracing::debug!(%base_url, timeout_ms = timeout.as_millis(), "dashboard api client created");

        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    /// Returns the normalized backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(&e, self.timeout))?;
        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::from_reqwest(&e, self.timeout))
    }
}

/// Turns a non-success response into [`ClientError::Http`], preferring the
/// backend's structured error message.
async fn error_from_response(response: Response) -> ClientError {
    let status = response.status();
    let fallback = status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string();
    let message = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorResponse>(&body)
            .map(|parsed| parsed.error.message)
            .ok()
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or(fallback),
        Err(_) => fallback,
    };
    ClientError::Http {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn greet(&self) -> Result<String, ClientError> {
        let body: MessageResponse = self.get_json("api/").await?;
        Ok(body.message)
    }

    async fn health(&self) -> Result<HealthSnapshot, ClientError> {
        self.get_json("api/health").await
    }

    async fn recent(&self) -> Result<Vec<StatusRecord>, ClientError> {
        self.get_json("api/status").await
    }

    async fn record(&self, client_name: &str) -> Result<StatusRecord, ClientError> {
        let url = self.endpoint("api/status")?;
        let response = self
            .http
            .post(url)
            .json(&CreateStatusRequest::new(client_name))
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(&e, self.timeout))?;
        self.decode(response).await
    }
}
