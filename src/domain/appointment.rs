//! Appointment entity, slot value type, and participant read model.

use std::fmt;

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Truncate a timestamp to the start of its containing hour.
pub fn start_of_hour(at: DateTime<Utc>) -> DateTime<Utc> {
    at.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}

/// An hour-aligned `(provider, start)` pair; the unit of booking exclusivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    provider_id: UserId,
    starts_at: DateTime<Utc>,
}

impl Slot {
    /// Derive the slot containing an arbitrary timestamp.
    pub fn containing(provider_id: UserId, at: DateTime<Utc>) -> Self {
        Self {
            provider_id,
            starts_at: start_of_hour(at),
        }
    }

    /// Provider receiving the booking.
    pub fn provider_id(&self) -> &UserId {
        &self.provider_id
    }

    /// Hour-aligned slot start.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }
}

/// Validation errors returned by [`Appointment::book`] and
/// [`Appointment::cancel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentValidationError {
    DateNotHourAligned,
    SelfBooking,
    AlreadyCanceled,
}

impl fmt::Display for AppointmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateNotHourAligned => {
                write!(f, "appointment date must be aligned to the start of an hour")
            }
            Self::SelfBooking => write!(f, "client and provider must be different users"),
            Self::AlreadyCanceled => write!(f, "appointment is already canceled and is terminal"),
        }
    }
}

impl std::error::Error for AppointmentValidationError {}

/// Lifecycle state derived from `canceled_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Active,
    Canceled,
}

/// Input payload for [`Appointment::book`].
#[derive(Debug, Clone)]
pub struct AppointmentDraft {
    pub id: Uuid,
    pub user_id: UserId,
    pub provider_id: UserId,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A booked time slot between a client and a provider.
///
/// ## Invariants
/// - `date` is hour-aligned (minutes, seconds, and nanoseconds zeroed).
/// - `user_id != provider_id`.
/// - Once `canceled_at` is set the appointment is terminal; no further
///   mutation is permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    id: Uuid,
    user_id: UserId,
    provider_id: UserId,
    date: DateTime<Utc>,
    canceled_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Appointment {
    /// Create a validated, active appointment.
    pub fn book(draft: AppointmentDraft) -> Result<Self, AppointmentValidationError> {
        if draft.date != start_of_hour(draft.date) {
            return Err(AppointmentValidationError::DateNotHourAligned);
        }
        if draft.user_id == draft.provider_id {
            return Err(AppointmentValidationError::SelfBooking);
        }

        Ok(Self {
            id: draft.id,
            user_id: draft.user_id,
            provider_id: draft.provider_id,
            date: draft.date,
            canceled_at: None,
            created_at: draft.created_at,
        })
    }

    /// Stable appointment identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Client who requested the booking.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Provider receiving the booking.
    pub fn provider_id(&self) -> &UserId {
        &self.provider_id
    }

    /// Hour-aligned start of the booked slot.
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Cancellation timestamp, set at most once.
    pub fn canceled_at(&self) -> Option<DateTime<Utc>> {
        self.canceled_at
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Lifecycle state derived from `canceled_at`.
    pub fn status(&self) -> AppointmentStatus {
        if self.canceled_at.is_some() {
            AppointmentStatus::Canceled
        } else {
            AppointmentStatus::Active
        }
    }

    /// The slot this appointment occupies.
    pub fn slot(&self) -> Slot {
        Slot::containing(self.provider_id, self.date)
    }

    /// Perform the one-way `Active -> Canceled` transition.
    ///
    /// Returns the canceled appointment; fails if the transition already
    /// happened.
    pub fn cancel(&self, canceled_at: DateTime<Utc>) -> Result<Self, AppointmentValidationError> {
        if self.canceled_at.is_some() {
            return Err(AppointmentValidationError::AlreadyCanceled);
        }

        let mut canceled = self.clone();
        canceled.canceled_at = Some(canceled_at);
        Ok(canceled)
    }
}

/// Appointment joined with the participant projections the side-effect
/// pipeline needs: provider name and email for mail, client name for the
/// provider's schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentView {
    pub appointment: Appointment,
    pub provider_name: String,
    pub provider_email: String,
    pub client_name: String,
}
