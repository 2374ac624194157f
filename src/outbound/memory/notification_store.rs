//! In-memory notification store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{NotificationStore, NotificationStoreError};
use crate::domain::{Notification, UserId};

/// Append-only notification log behind a mutex.
pub struct InMemoryNotificationStore {
    rows: Mutex<Vec<Notification>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryNotificationStore {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            clock,
        }
    }

    /// Snapshot of every notification written so far, in creation order.
    pub fn all(&self) -> Result<Vec<Notification>, NotificationStoreError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| NotificationStoreError::write("notification store mutex poisoned"))?;
        Ok(rows.clone())
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn create(
        &self,
        content: &str,
        target_user_id: &UserId,
    ) -> Result<Notification, NotificationStoreError> {
        let notification = Notification::new(content, *target_user_id, self.clock.utc());
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| NotificationStoreError::write("notification store mutex poisoned"))?;
        rows.push(notification.clone());
        Ok(notification)
    }
}
