//! Driving port for canceling an existing appointment.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AppointmentPayload;
use crate::domain::{Error, UserId};

/// Request to cancel an appointment, keyed by appointment id and
/// owner-checked against the booking's client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAppointmentRequest {
    pub appointment_id: Uuid,
    pub requesting_user_id: UserId,
}

/// Response from a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAppointmentResponse {
    pub appointment: AppointmentPayload,
}

/// Driving port for the cancellation policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CancellationCommand: Send + Sync {
    /// Check ownership and the two-hour lead window, set `canceled_at`, and
    /// fan out the cancellation mail and cache invalidation.
    async fn cancel_appointment(
        &self,
        request: CancelAppointmentRequest,
    ) -> Result<CancelAppointmentResponse, Error>;
}

/// Fixture command for tests that only need the port wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCancellationCommand;

#[async_trait]
impl CancellationCommand for FixtureCancellationCommand {
    async fn cancel_appointment(
        &self,
        request: CancelAppointmentRequest,
    ) -> Result<CancelAppointmentResponse, Error> {
        Err(Error::not_found(format!(
            "appointment {} not found",
            request.appointment_id
        )))
    }
}
