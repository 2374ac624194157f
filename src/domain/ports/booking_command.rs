//! Driving port for booking a new appointment.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Appointment, AppointmentStatus, Error, Slot, UserId};

/// Serializable appointment payload returned by driving ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    pub id: Uuid,
    pub user_id: UserId,
    pub provider_id: UserId,
    pub date: DateTime<Utc>,
    pub canceled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub status: AppointmentStatus,
}

impl From<&Appointment> for AppointmentPayload {
    fn from(value: &Appointment) -> Self {
        Self {
            id: value.id(),
            user_id: *value.user_id(),
            provider_id: *value.provider_id(),
            date: value.date(),
            canceled_at: value.canceled_at(),
            created_at: value.created_at(),
            status: value.status(),
        }
    }
}

/// Request to book a provider's slot.
///
/// `date` may carry sub-hour precision; the engine truncates it to the
/// containing hour before any check or write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub user_id: UserId,
    pub provider_id: UserId,
    pub date: DateTime<Utc>,
}

/// Response from a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentResponse {
    pub appointment: AppointmentPayload,
}

/// Driving port for the booking transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Validate the candidate, commit the appointment, and fan out side
    /// effects. Rejections carry one of the stable booking error codes;
    /// a slot race lost at write time surfaces as `SlotUnavailable`.
    async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<BookAppointmentResponse, Error>;
}

/// Fixture command for tests that only need the payload plumbing.
///
/// Echoes the request back as an active appointment with a normalized date
/// and performs no persistence or side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingCommand;

#[async_trait]
impl BookingCommand for FixtureBookingCommand {
    async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<BookAppointmentResponse, Error> {
        let slot = Slot::containing(request.provider_id, request.date);
        Ok(BookAppointmentResponse {
            appointment: AppointmentPayload {
                id: Uuid::new_v4(),
                user_id: request.user_id,
                provider_id: request.provider_id,
                date: slot.starts_at(),
                canceled_at: None,
                created_at: slot.starts_at(),
                status: AppointmentStatus::Active,
            },
        })
    }
}
