//! Text rendering of the dashboard.

use std::fmt;

use super::DashboardState;
use crate::domain::StatusRecord;

/// Maximum number of records shown, whatever the backend returned.
pub const DISPLAY_LIMIT: usize = 5;

/// Shown instead of the list when there is nothing to display.
pub const EMPTY_PLACEHOLDER: &str = "No status yet...";

/// Recent-list section of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// The backend returned no records.
    Placeholder(&'static str),
    /// Up to [`DISPLAY_LIMIT`] records, in backend order.
    Entries(Vec<StatusRecord>),
}

/// Snapshot of what the dashboard shows, derived from [`DashboardState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// Greeting line.
    pub hello: String,
    /// Health line.
    pub health: String,
    /// Recent-list section.
    pub list: ListView,
    /// Error banner, if the latest action failed.
    pub error: Option<String>,
    /// Whether a record action is in flight.
    pub loading: bool,
}

impl DashboardView {
    /// Derives the view from the current state.
    #[must_use]
    pub fn from_state(state: &DashboardState) -> Self {
        let hello = state.hello().unwrap_or("(no greeting)").to_string();

        let health = state.health().map_or_else(
            || "unknown".to_string(),
            |h| format!("{} (db: {})", h.status.as_str(), h.db.as_str()),
        );

        let list = if state.items().is_empty() {
            ListView::Placeholder(EMPTY_PLACEHOLDER)
        } else {
            ListView::Entries(state.items().iter().take(DISPLAY_LIMIT).cloned().collect())
        };

        Self {
            hello,
            health,
            list,
            error: state.error().map(str::to_string),
            loading: state.is_loading(),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Backend: {}", self.hello)?;
        writeln!(f, "Health:  {}", self.health)?;
        writeln!(f, "Recent status:")?;
        match &self.list {
            ListView::Placeholder(text) => writeln!(f, "  {text}")?,
            ListView::Entries(records) => {
                for record in records {
                    writeln!(
                        f,
                        "  - {}  {}  {}",
                        record.client_name,
                        record.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                        record.id
                    )?;
                }
            }
        }
        if self.loading {
            writeln!(f, "Recording...")?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "Error: {error}")?;
        }
        Ok(())
    }
}
