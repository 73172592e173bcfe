//! The persisted status-check entity and its validated client name.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RecordId;
use crate::error::StatusError;

/// Maximum accepted length of a client name, in characters.
pub const MAX_CLIENT_NAME_CHARS: usize = 256;

/// One immutable event recording that a named client reported in.
///
/// Created exclusively by [`crate::service::StatusService::record`]. There
/// is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusRecord {
    /// Unique record identifier.
    pub id: RecordId,
    /// Name of the reporting client, trimmed and non-empty.
    pub client_name: String,
    /// Server-observed creation instant.
    pub timestamp: DateTime<Utc>,
}

impl StatusRecord {
    /// Builds a record with a fresh [`RecordId`].
    #[must_use]
    pub fn new(client_name: ClientName, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            client_name: client_name.into_inner(),
            timestamp,
        }
    }
}

/// A client name that passed validation.
///
/// Leading and trailing whitespace is removed; the remainder is non-empty
/// and at most [`MAX_CLIENT_NAME_CHARS`] characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientName(String);

impl ClientName {
    /// Validates and normalizes a raw client name.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::InvalidInput`] if the name is empty or
    /// whitespace-only, or longer than [`MAX_CLIENT_NAME_CHARS`].
    pub fn parse(raw: &str) -> Result<Self, StatusError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StatusError::InvalidInput(
                "client_name must not be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_CLIENT_NAME_CHARS {
            return Err(StatusError::InvalidInput(format!(
                "client_name must be at most {MAX_CLIENT_NAME_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, returning the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
