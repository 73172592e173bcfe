//! Domain layer: status records, identifiers, health, and time.
//!
//! This module holds the server-side data model: the immutable
//! [`StatusRecord`] with its [`RecordId`], the validated [`ClientName`],
//! the derived [`HealthSnapshot`], and the [`MonotonicClock`] that stamps
//! new records.

pub mod clock;
pub mod health;
pub mod record_id;
pub mod status_record;

pub use clock::MonotonicClock;
pub use health::{DbStatus, HealthSnapshot, ServiceStatus};
pub use record_id::RecordId;
pub use status_record::{ClientName, StatusRecord};
