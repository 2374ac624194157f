//! Booking transaction: validation, atomic commit, and side-effect fan-out.

use std::sync::Arc;

use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{
    AppointmentSnapshot, AppointmentStore, AppointmentStoreError, BookAppointmentRequest,
    BookAppointmentResponse, BookingCommand, ListingCache, ListingCachePrefix, MailJob, MailQueue,
    NotificationStore, UserStore,
};
use crate::domain::service_support::map_appointment_store_error;
use crate::domain::{
    Appointment, AppointmentDraft, AvailabilityValidator, BookingCandidate, Error,
    NotificationDispatcher, localization,
};

use async_trait::async_trait;

/// Books appointments: runs the availability checks, commits the new row,
/// then notifies the provider and invalidates the client's cached listings.
///
/// The commit and the side effects are deliberately not one all-or-nothing
/// unit: once the store accepted the row, the booking stands and any
/// side-effect failure is logged, never returned.
#[derive(Clone)]
pub struct BookingService<U, A, N, Q, C> {
    user_store: Arc<U>,
    appointment_store: Arc<A>,
    validator: AvailabilityValidator<U, A>,
    dispatcher: NotificationDispatcher<N, Q>,
    cache: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<U, A, N, Q, C> BookingService<U, A, N, Q, C>
where
    U: UserStore,
    A: AppointmentStore,
{
    /// Create a booking service over the injected collaborators.
    ///
    /// The validator is built over the same store handles the commit uses,
    /// so pre-check and write always observe the same backing state.
    pub fn new(
        user_store: Arc<U>,
        appointment_store: Arc<A>,
        dispatcher: NotificationDispatcher<N, Q>,
        cache: Arc<C>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let validator = AvailabilityValidator::new(
            Arc::clone(&user_store),
            Arc::clone(&appointment_store),
            Arc::clone(&clock),
        );
        Self {
            user_store,
            appointment_store,
            validator,
            dispatcher,
            cache,
            clock,
        }
    }
}

impl<U, A, N, Q, C> BookingService<U, A, N, Q, C>
where
    U: UserStore,
    A: AppointmentStore,
    N: NotificationStore,
    Q: MailQueue,
    C: ListingCache,
{
    /// Post-commit fan-out: provider notification, mail job, and listing
    /// invalidation. Failures here are logged and never unwind the booking.
    async fn dispatch_side_effects(&self, appointment: &Appointment) {
        let client_name = match self.user_store.find_by_id(appointment.user_id()).await {
            Ok(Some(profile)) => profile.name,
            Ok(None) => {
                tracing::warn!(
                    appointment = %appointment.id(),
                    "booking client vanished before notification dispatch"
                );
                return;
            }
            Err(error) => {
                tracing::warn!(appointment = %appointment.id(), %error, "client lookup failed");
                return;
            }
        };
        let provider = match self
            .user_store
            .find_provider_by_id(appointment.provider_id())
            .await
        {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                tracing::warn!(
                    appointment = %appointment.id(),
                    "provider vanished before notification dispatch"
                );
                return;
            }
            Err(error) => {
                tracing::warn!(appointment = %appointment.id(), %error, "provider lookup failed");
                return;
            }
        };

        let content = localization::booking_notification(&client_name, appointment.date());
        let mail = MailJob::BookingCreated {
            appointment: AppointmentSnapshot::from(appointment),
            provider_name: provider.name,
            provider_email: provider.email,
            client_name,
        };
        if let Err(error) = self
            .dispatcher
            .notify(appointment.provider_id(), &content, mail)
            .await
        {
            tracing::warn!(appointment = %appointment.id(), %error, "notification dispatch failed");
        }
    }

    async fn invalidate_client_listings(&self, appointment: &Appointment) {
        let prefix = ListingCachePrefix::user_listings(appointment.user_id());
        if let Err(error) = self.cache.invalidate_prefix(&prefix).await {
            tracing::warn!(prefix = %prefix, %error, "listing cache invalidation failed");
        }
    }
}

#[async_trait]
impl<U, A, N, Q, C> BookingCommand for BookingService<U, A, N, Q, C>
where
    U: UserStore,
    A: AppointmentStore,
    N: NotificationStore,
    Q: MailQueue,
    C: ListingCache,
{
    async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<BookAppointmentResponse, Error> {
        let candidate = BookingCandidate {
            user_id: request.user_id,
            provider_id: request.provider_id,
            date: request.date,
        };
        let slot = self.validator.validate(&candidate).await?;

        let appointment = Appointment::book(AppointmentDraft {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            provider_id: request.provider_id,
            date: slot.starts_at(),
            created_at: self.clock.utc(),
        })
        .map_err(|err| Error::invalid_request(format!("invalid booking: {err}")))?;

        // The store constraint is the real race guard; losing it here is the
        // same outcome as failing the advisory pre-check.
        match self.appointment_store.create(&appointment).await {
            Ok(()) => {}
            Err(AppointmentStoreError::SlotTaken { .. }) => {
                return Err(Error::slot_unavailable("appointment slot is not available"));
            }
            Err(error) => return Err(map_appointment_store_error(error)),
        }

        self.dispatch_side_effects(&appointment).await;
        self.invalidate_client_listings(&appointment).await;

        Ok(BookAppointmentResponse {
            appointment: (&appointment).into(),
        })
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
