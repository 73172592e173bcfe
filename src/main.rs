//! status-gateway server entry point.
//!
//! Starts the Axum HTTP server exposing the `/api` endpoints.

use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use status_gateway::api;
use status_gateway::app_state::AppState;
use status_gateway::config::{LogFormat, ServerConfig, StoreBackend};
use status_gateway::persistence::{InMemoryStore, PostgresStore, StatusStore};
use status_gateway::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }

    tracing::info!(
        addr = %config.listen_addr,
        backend = ?config.store_backend,
        "starting status-gateway"
    );

    // Build persistence layer
    let mut postgres = None;
    let store: Arc<dyn StatusStore> = match config.store_backend {
        StoreBackend::Memory => Arc::new(InMemoryStore::new()),
        StoreBackend::Postgres => {
            let pg = PostgresStore::connect_lazy(&config.database)?;
            if config.database.run_migrations {
                // The server still starts; health reports the store as
                // unavailable until the database comes up.
                if let Err(e) = pg.migrate().await {
                    tracing::warn!(error = %e, "migrations not applied");
                }
            }
            postgres = Some(pg.clone());
            Arc::new(pg)
        }
    };

    // Install metrics recorder
    let metrics = telemetry::install_recorder()?;

    // Build application state and router
    let app_state = AppState::new(
        store,
        config.recent_window,
        config.greeting.clone(),
        metrics,
    );
    let app = api::build_app(app_state, config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pg) = postgres {
        pg.close().await;
        tracing::info!("database pool closed");
    }
    tracing::info!("server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
