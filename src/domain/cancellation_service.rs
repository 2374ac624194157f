//! Cancellation policy: ownership, lead-time window, and conditional write.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::TimeDelta;
use mockable::Clock;

use crate::domain::Error;
use crate::domain::ports::{
    AppointmentSnapshot, AppointmentStore, CancelAppointmentRequest, CancelAppointmentResponse,
    CancellationCommand, ListingCache, ListingCachePrefix, MailJob, MailQueue,
};
use crate::domain::service_support::map_appointment_store_error;

/// Minimum lead time before an appointment's start at which cancellation is
/// still permitted.
pub fn cancellation_window() -> TimeDelta {
    TimeDelta::hours(2)
}

/// Cancels appointments on behalf of the booking owner.
///
/// The only state transition in the model happens here: a successful run
/// moves the appointment from `Active` to the terminal `Canceled` state via
/// a conditional store update, so two racing cancellations cannot both
/// succeed.
#[derive(Clone)]
pub struct CancellationService<A, Q, C> {
    appointment_store: Arc<A>,
    mail_queue: Arc<Q>,
    cache: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<A, Q, C> CancellationService<A, Q, C> {
    /// Create a cancellation service over the injected collaborators.
    pub fn new(
        appointment_store: Arc<A>,
        mail_queue: Arc<Q>,
        cache: Arc<C>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            appointment_store,
            mail_queue,
            cache,
            clock,
        }
    }
}

#[async_trait]
impl<A, Q, C> CancellationCommand for CancellationService<A, Q, C>
where
    A: AppointmentStore,
    Q: MailQueue,
    C: ListingCache,
{
    async fn cancel_appointment(
        &self,
        request: CancelAppointmentRequest,
    ) -> Result<CancelAppointmentResponse, Error> {
        let view = self
            .appointment_store
            .find_by_id(request.appointment_id)
            .await
            .map_err(map_appointment_store_error)?
            .ok_or_else(|| {
                Error::not_found(format!(
                    "appointment {} not found",
                    request.appointment_id
                ))
            })?;

        if view.appointment.user_id() != &request.requesting_user_id {
            return Err(Error::permission_denied(
                "only the booking owner may cancel this appointment",
            ));
        }

        let now = self.clock.utc();
        let deadline = view.appointment.date() - cancellation_window();
        if now >= deadline {
            return Err(Error::cancellation_window_expired(
                "appointments can only be canceled at least 2 hours in advance",
            ));
        }

        // Conditional update: of two racing cancellations only one lands,
        // the other surfaces the already-canceled conflict.
        let canceled = self
            .appointment_store
            .mark_canceled(request.appointment_id, now)
            .await
            .map_err(map_appointment_store_error)?;

        let mail = MailJob::AppointmentCanceled {
            appointment: AppointmentSnapshot::from(&canceled),
            provider_name: view.provider_name,
            provider_email: view.provider_email,
        };
        if let Err(error) = self.mail_queue.enqueue(&mail).await {
            tracing::warn!(appointment = %canceled.id(), %error, "failed to enqueue cancellation mail");
        }

        let prefix = ListingCachePrefix::user_listings(&request.requesting_user_id);
        if let Err(error) = self.cache.invalidate_prefix(&prefix).await {
            tracing::warn!(prefix = %prefix, %error, "listing cache invalidation failed");
        }

        Ok(CancelAppointmentResponse {
            appointment: (&canceled).into(),
        })
    }
}

#[cfg(test)]
#[path = "cancellation_service_tests.rs"]
mod tests;
