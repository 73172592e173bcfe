//! Dashboard client: the controller behind the status dashboard.
//!
//! The [`Dashboard`] owns an explicit [`DashboardState`], fetches
//! greeting, health, and the recent list on mount, and runs the
//! record-then-refresh action. It talks to the backend through the
//! [`DashboardApi`] trait; [`HttpDashboardApi`] is the HTTP implementation.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod state;

pub use api::{DEFAULT_TIMEOUT, DashboardApi, HttpDashboardApi};
pub use dashboard::Dashboard;
pub use error::ClientError;
pub use render::{DISPLAY_LIMIT, DashboardView, EMPTY_PLACEHOLDER, ListView};
pub use state::{DashboardState, FetchOutcome, Phase};
