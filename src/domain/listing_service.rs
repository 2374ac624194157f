//! Appointment reads: cached client listings and provider day schedules.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ports::{
    AppointmentStore, AppointmentsQuery, ListAppointmentsRequest, ListAppointmentsResponse,
    ListingCache, ListingCacheKey, ListingEntryPayload, ProviderScheduleRequest,
    ProviderScheduleResponse, ScheduleEntryPayload, UserStore,
};
use crate::domain::service_support::{map_appointment_store_error, map_user_store_error};

/// Fixed page size for client listings.
pub const LISTING_PAGE_SIZE: u32 = 20;

/// Cached listing pages expire after a day; writes invalidate them sooner.
const LISTING_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Serves appointment reads, consulting the listing cache before the store.
///
/// The cache is an optimisation only: a miss, a corrupt entry, or an
/// unreachable backend all fall through to the store transparently.
#[derive(Clone)]
pub struct ListingService<U, A, C> {
    user_store: Arc<U>,
    appointment_store: Arc<A>,
    cache: Arc<C>,
}

impl<U, A, C> ListingService<U, A, C> {
    /// Create a listing service over the injected collaborators.
    pub fn new(user_store: Arc<U>, appointment_store: Arc<A>, cache: Arc<C>) -> Self {
        Self {
            user_store,
            appointment_store,
            cache,
        }
    }
}

impl<U, A, C> ListingService<U, A, C>
where
    C: ListingCache,
{
    async fn cached_page(&self, key: &ListingCacheKey) -> Option<Vec<ListingEntryPayload>> {
        let value = match self.cache.get(key).await {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(key = %key, %error, "listing cache read failed; falling back to store");
                return None;
            }
        };
        match serde_json::from_value(value) {
            Ok(entries) => Some(entries),
            Err(error) => {
                tracing::warn!(key = %key, %error, "discarding undecodable cached listing page");
                None
            }
        }
    }

    async fn fill_page(&self, key: &ListingCacheKey, entries: &[ListingEntryPayload]) {
        let value = match serde_json::to_value(entries) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key = %key, %error, "failed to serialize listing page for cache");
                return;
            }
        };
        if let Err(error) = self.cache.put(key, &value, LISTING_TTL).await {
            tracing::warn!(key = %key, %error, "listing cache write failed");
        }
    }
}

#[async_trait]
impl<U, A, C> AppointmentsQuery for ListingService<U, A, C>
where
    U: UserStore,
    A: AppointmentStore,
    C: ListingCache,
{
    async fn list_appointments(
        &self,
        request: ListAppointmentsRequest,
    ) -> Result<ListAppointmentsResponse, Error> {
        if request.page == 0 {
            return Err(Error::invalid_request("pages are numbered from 1"));
        }

        let key = ListingCacheKey::user_page(&request.user_id, request.page);
        if let Some(appointments) = self.cached_page(&key).await {
            return Ok(ListAppointmentsResponse { appointments });
        }

        let views = self
            .appointment_store
            .list_active_for_user(&request.user_id, request.page, LISTING_PAGE_SIZE)
            .await
            .map_err(map_appointment_store_error)?;
        let appointments: Vec<ListingEntryPayload> =
            views.iter().map(ListingEntryPayload::from).collect();

        self.fill_page(&key, &appointments).await;

        Ok(ListAppointmentsResponse { appointments })
    }

    async fn provider_schedule(
        &self,
        request: ProviderScheduleRequest,
    ) -> Result<ProviderScheduleResponse, Error> {
        let provider = self
            .user_store
            .find_provider_by_id(&request.provider_id)
            .await
            .map_err(map_user_store_error)?;
        if provider.is_none() {
            return Err(Error::permission_denied(
                "only providers can load a schedule",
            ));
        }

        let views = self
            .appointment_store
            .list_active_for_provider_on(&request.provider_id, request.day)
            .await
            .map_err(map_appointment_store_error)?;

        Ok(ProviderScheduleResponse {
            appointments: views.iter().map(ScheduleEntryPayload::from).collect(),
        })
    }
}

#[cfg(test)]
#[path = "listing_service_tests.rs"]
mod tests;
