//! User identity and read-only profile projections.
//!
//! The engine never owns user records; it reads the id, display name, email,
//! and provider flag it needs and mutates nothing.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

/// Error returned when parsing a [`UserId`] from its string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("user id must be a valid UUID")]
pub struct UserIdParseError;

impl UserId {
    /// Wrap an already-validated UUID.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a [`UserId`] from its canonical string form.
    pub fn parse(raw: &str) -> Result<Self, UserIdParseError> {
        Uuid::parse_str(raw).map(Self).map_err(|_| UserIdParseError)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Read-only projection of a collaborator-owned user record.
///
/// `is_provider` marks users eligible to receive bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub is_provider: bool,
}

impl UserProfile {
    /// Build a profile projection.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        is_provider: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            is_provider,
        }
    }
}
