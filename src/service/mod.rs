//! Service layer: business logic orchestration.
//!
//! [`StatusService`] validates caller input, stamps new records, and
//! delegates every read and write to a [`crate::persistence::StatusStore`].

pub mod status_service;

pub use status_service::{RecentWindow, StatusService};
