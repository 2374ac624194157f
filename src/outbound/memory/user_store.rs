//! In-memory user directory.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{UserId, UserProfile};

/// User directory backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<UserId, UserProfile>>,
}

impl InMemoryUserStore {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a profile.
    pub fn insert(&self, profile: UserProfile) -> Result<(), UserStoreError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| UserStoreError::query("user store mutex poisoned"))?;
        users.insert(profile.id, profile);
        Ok(())
    }

    fn lookup(&self, id: &UserId) -> Result<Option<UserProfile>, UserStoreError> {
        let users = self
            .users
            .lock()
            .map_err(|_| UserStoreError::query("user store mutex poisoned"))?;
        Ok(users.get(id).cloned())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, UserStoreError> {
        self.lookup(id)
    }

    async fn find_provider_by_id(
        &self,
        id: &UserId,
    ) -> Result<Option<UserProfile>, UserStoreError> {
        Ok(self.lookup(id)?.filter(|profile| profile.is_provider))
    }
}
