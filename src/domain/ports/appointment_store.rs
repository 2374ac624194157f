//! Port for durable appointment storage.
//!
//! The store, not the advisory pre-check, is the authoritative guard against
//! slot races: `create` must enforce a uniqueness constraint on
//! `(provider_id, date)` scoped to non-canceled rows, and `mark_canceled`
//! must be a conditional update that loses cleanly when the row is already
//! canceled.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{Appointment, AppointmentView, Slot, UserId};

/// Errors raised by appointment store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentStoreError {
    /// Store connection could not be established.
    #[error("appointment store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("appointment store query failed: {message}")]
    Query { message: String },
    /// The active-slot uniqueness constraint rejected an insert.
    #[error("active appointment already exists for provider {provider_id} at {starts_at}")]
    SlotTaken {
        provider_id: UserId,
        starts_at: DateTime<Utc>,
    },
    /// A conditional cancellation lost to an earlier cancellation.
    #[error("appointment {id} is already canceled")]
    AlreadyCanceled { id: Uuid },
    /// The referenced appointment does not exist.
    #[error("appointment {id} not found")]
    NotFound { id: Uuid },
}

impl AppointmentStoreError {
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

    pub fn slot_taken(slot: &Slot) -> Self {
        Self::SlotTaken {
            provider_id: *slot.provider_id(),
            starts_at: slot.starts_at(),
        }
    }
}

/// Port for appointment persistence and slot-scoped reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Find the active appointment occupying a slot, if any.
    async fn find_active_in_slot(
        &self,
        slot: &Slot,
    ) -> Result<Option<Appointment>, AppointmentStoreError>;

    /// Persist a new appointment.
    ///
    /// Fails with [`AppointmentStoreError::SlotTaken`] when another active
    /// appointment already occupies the same slot; this check and the insert
    /// are one atomic step.
    async fn create(&self, appointment: &Appointment) -> Result<(), AppointmentStoreError>;

    /// Load an appointment together with its participant projections.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AppointmentView>, AppointmentStoreError>;

    /// Conditionally set `canceled_at` on an active appointment.
    ///
    /// Fails with [`AppointmentStoreError::AlreadyCanceled`] when the row was
    /// canceled concurrently and [`AppointmentStoreError::NotFound`] when the
    /// id is unknown. Returns the updated appointment.
    async fn mark_canceled(
        &self,
        id: Uuid,
        canceled_at: DateTime<Utc>,
    ) -> Result<Appointment, AppointmentStoreError>;

    /// Page through a client's active appointments, ordered by date
    /// ascending. Pages are 1-based.
    async fn list_active_for_user(
        &self,
        user_id: &UserId,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<AppointmentView>, AppointmentStoreError>;

    /// A provider's active appointments within one calendar day, ordered by
    /// date ascending.
    async fn list_active_for_provider_on(
        &self,
        provider_id: &UserId,
        day: NaiveDate,
    ) -> Result<Vec<AppointmentView>, AppointmentStoreError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAppointmentStore;

#[async_trait]
impl AppointmentStore for FixtureAppointmentStore {
    async fn find_active_in_slot(
        &self,
        _slot: &Slot,
    ) -> Result<Option<Appointment>, AppointmentStoreError> {
        Ok(None)
    }

    async fn create(&self, _appointment: &Appointment) -> Result<(), AppointmentStoreError> {
        Ok(())
    }

    async fn find_by_id(
        &self,
        _id: Uuid,
    ) -> Result<Option<AppointmentView>, AppointmentStoreError> {
        Ok(None)
    }

    async fn mark_canceled(
        &self,
        id: Uuid,
        _canceled_at: DateTime<Utc>,
    ) -> Result<Appointment, AppointmentStoreError> {
        Err(AppointmentStoreError::NotFound { id })
    }

    async fn list_active_for_user(
        &self,
        _user_id: &UserId,
        _page: u32,
        _page_size: u32,
    ) -> Result<Vec<AppointmentView>, AppointmentStoreError> {
        Ok(Vec::new())
    }

    async fn list_active_for_provider_on(
        &self,
        _provider_id: &UserId,
        _day: NaiveDate,
    ) -> Result<Vec<AppointmentView>, AppointmentStoreError> {
        Ok(Vec::new())
    }
}
