//! Port for read-only user lookups.

use async_trait::async_trait;

use crate::domain::{UserId, UserProfile};

/// Errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection { message: String },
    /// Query failed during execution.
    #[error("user store query failed: {message}")]
    Query { message: String },
}

impl UserStoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for resolving user and provider projections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find any user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, UserStoreError>;

    /// Find a user by id only if they carry the provider flag.
    async fn find_provider_by_id(&self, id: &UserId)
    -> Result<Option<UserProfile>, UserStoreError>;
}

/// Fixture implementation for tests that do not exercise user lookups.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserStore;

#[async_trait]
impl UserStore for FixtureUserStore {
    async fn find_by_id(&self, _id: &UserId) -> Result<Option<UserProfile>, UserStoreError> {
        Ok(None)
    }

    async fn find_provider_by_id(
        &self,
        _id: &UserId,
    ) -> Result<Option<UserProfile>, UserStoreError> {
        Ok(None)
    }
}
