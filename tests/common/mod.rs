//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use status_gateway::api;
use status_gateway::app_state::AppState;
use status_gateway::persistence::{InMemoryStore, StatusStore};
use status_gateway::service::RecentWindow;
use status_gateway::telemetry;

/// A server bound to an ephemeral local port.
pub struct TestServer {
    /// Backing store, for toggling reachability and inspecting size.
    pub store: Arc<InMemoryStore>,
    /// Address the server listens on.
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Base URL such as `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Absolute URL for `path` (which starts with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Builds the application state over a fresh in-memory store.
///
/// The metrics recorder is process-wide, so every test in a binary shares
/// the same counters.
pub fn test_state() -> anyhow::Result<(AppState, Arc<InMemoryStore>)> {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(
        Arc::clone(&store) as Arc<dyn StatusStore>,
        RecentWindow::default(),
        "Hello World",
        telemetry::install_recorder()?,
    );
    Ok((state, store))
}

/// Starts the full application on `127.0.0.1:0`.
pub async fn spawn_server() -> anyhow::Result<TestServer> {
    let (state, store) = test_state()?;
    let app = api::build_app(state, Duration::from_secs(10));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server stopped: {e}");
        }
    });

    Ok(TestServer {
        store,
        addr,
        handle,
    })
}
