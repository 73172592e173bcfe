//! Terminal status dashboard.
//!
//! Fetches greeting, health, and the recent list from the backend, can
//! record a status check, and prints the rendered dashboard.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use status_gateway::client::{Dashboard, HttpDashboardApi};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "Show and record backend status checks")]
struct Cli {
    /// Base URL of the status backend.
    #[arg(long, env = "BACKEND_URL", default_value = "http://127.0.0.1:3000")]
    backend_url: String,

    /// Record a status check under this client name before printing.
    #[arg(long, value_name = "CLIENT_NAME")]
    record: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "DASHBOARD_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let api = HttpDashboardApi::new(&cli.backend_url, Duration::from_secs(cli.timeout_secs))?;
    let mut dashboard = Dashboard::new(api);

    dashboard.mount().await;
    if let Some(name) = cli.record.as_deref() {
        if let Some(created) = dashboard.record(name).await {
            println!("Recorded {} for {}", created.id, created.client_name);
        }
    }

    let view = dashboard.view();
    print!("{view}");

    Ok(if view.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
