//! # status-gateway
//!
//! Minimal status-reporting backend and dashboard client.
//!
//! Clients record "status check" events under a client name; the backend
//! stamps each with an identifier and a server-side timestamp and serves
//! the most recent ones newest first, alongside a health probe of its
//! store.
//!
//! ## Architecture
//!
//! ```text
//! Dashboard (client/)
//!     │  HTTP
//!     ├── REST Handlers (api/)
//!     │
//!     ├── StatusService (service/)
//!     │
//!     ├── StatusStore (persistence/)
//!     │     ├── InMemoryStore
//!     │     └── PostgresStore
//!     │
//!     └── Domain types (domain/)
//!
//! Request metrics (telemetry/) wrap every route and are exposed at `/metrics`.
//! ```

pub mod api;
pub mod app_state;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
pub mod telemetry;
