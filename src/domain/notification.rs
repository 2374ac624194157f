//! Durable notification record created alongside a successful booking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Notification shown to a provider in their activity feed.
///
/// Created by the dispatcher in the same logical unit as the triggering
/// booking; the `read` flag is flipped by a collaborator outside this crate
/// and the record is never deleted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub content: String,
    pub user: UserId,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Build an unread notification for the target user.
    pub fn new(content: impl Into<String>, user: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            user,
            read: false,
            created_at,
        }
    }
}
