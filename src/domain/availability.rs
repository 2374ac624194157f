//! Pure slot-availability decision logic.
//!
//! Given a candidate booking, accept with the normalized slot or reject with
//! a specific reason. Read-only against the stores; given unchanged store
//! state and wall clock, the verdict is always the same.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::domain::ports::{AppointmentStore, UserStore};
use crate::domain::service_support::{map_appointment_store_error, map_user_store_error};
use crate::domain::{Error, Slot, UserId};

/// Candidate booking under validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCandidate {
    pub user_id: UserId,
    pub provider_id: UserId,
    pub date: DateTime<Utc>,
}

/// Validates booking candidates against the provider registry, the wall
/// clock, and current slot occupancy.
///
/// The slot-occupancy read here is advisory only; the store's uniqueness
/// constraint is the authoritative race guard at write time.
#[derive(Clone)]
pub struct AvailabilityValidator<U, A> {
    user_store: Arc<U>,
    appointment_store: Arc<A>,
    clock: Arc<dyn Clock>,
}

impl<U, A> AvailabilityValidator<U, A> {
    /// Create a validator over the injected stores and clock.
    pub fn new(user_store: Arc<U>, appointment_store: Arc<A>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_store,
            appointment_store,
            clock,
        }
    }
}

impl<U, A> AvailabilityValidator<U, A>
where
    U: UserStore,
    A: AppointmentStore,
{
    /// Run the checks in order, short-circuiting on the first failure:
    /// provider exists, slot not in the past, slot unoccupied, no
    /// self-booking. Returns the hour-normalized slot.
    pub async fn validate(&self, candidate: &BookingCandidate) -> Result<Slot, Error> {
        let provider = self
            .user_store
            .find_provider_by_id(&candidate.provider_id)
            .await
            .map_err(map_user_store_error)?;
        if provider.is_none() {
            return Err(Error::provider_not_found(
                "appointments can only be created with providers",
            ));
        }

        let slot = Slot::containing(candidate.provider_id, candidate.date);
        if slot.starts_at() < self.clock.utc() {
            return Err(Error::past_date("past dates are not permitted"));
        }

        let occupied = self
            .appointment_store
            .find_active_in_slot(&slot)
            .await
            .map_err(map_appointment_store_error)?;
        if occupied.is_some() {
            return Err(Error::slot_unavailable("appointment slot is not available"));
        }

        if candidate.provider_id == candidate.user_id {
            return Err(Error::self_booking(
                "creating an appointment with yourself is not permitted",
            ));
        }

        Ok(slot)
    }
}

#[cfg(test)]
#[path = "availability_tests.rs"]
mod tests;
