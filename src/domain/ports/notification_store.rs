//! Port for durable notification records.

use async_trait::async_trait;

use crate::domain::{Notification, UserId};

/// Errors raised by notification store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotificationStoreError {
    /// Store connection could not be established.
    #[error("notification store connection failed: {message}")]
    Connection { message: String },
    /// Write failed during execution.
    #[error("notification store write failed: {message}")]
    Write { message: String },
}

impl NotificationStoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// Port for creating notification records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Durably create an unread notification for the target user.
    async fn create(
        &self,
        content: &str,
        target_user_id: &UserId,
    ) -> Result<Notification, NotificationStoreError>;
}

/// Fixture implementation for tests that do not inspect notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNotificationStore;

#[async_trait]
impl NotificationStore for FixtureNotificationStore {
    async fn create(
        &self,
        content: &str,
        target_user_id: &UserId,
    ) -> Result<Notification, NotificationStoreError> {
        Ok(Notification::new(
            content,
            *target_user_id,
            chrono::Utc::now(),
        ))
    }
}
