//! Data Transfer Objects for REST request/response serialization.
//!
//! The types derive both `Serialize` and `Deserialize` so the dashboard
//! client speaks the exact wire format the handlers produce.

pub mod common_dto;
pub mod status_dto;

pub use common_dto::*;
pub use status_dto::*;
