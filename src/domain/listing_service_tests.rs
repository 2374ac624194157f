//! Tests for the listing service.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use super::*;
use crate::domain::ports::{
    ListingCacheError, MockAppointmentStore, MockListingCache, MockUserStore,
};
use crate::domain::{
    Appointment, AppointmentDraft, AppointmentView, ErrorCode, UserId, UserProfile,
};

fn ts(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, h, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn view(client: UserId, provider: UserId, hour: u32) -> AppointmentView {
    AppointmentView {
        appointment: Appointment::book(AppointmentDraft {
            id: Uuid::new_v4(),
            user_id: client,
            provider_id: provider,
            date: ts(hour),
            created_at: ts(7),
        })
        .expect("valid draft"),
        provider_name: "Diego".to_owned(),
        provider_email: "diego@example.com".to_owned(),
        client_name: "Cecilia".to_owned(),
    }
}

fn service(
    users: MockUserStore,
    appointments: MockAppointmentStore,
    cache: MockListingCache,
) -> ListingService<MockUserStore, MockAppointmentStore, MockListingCache> {
    ListingService::new(Arc::new(users), Arc::new(appointments), Arc::new(cache))
}

#[tokio::test]
async fn cache_hits_skip_the_store() {
    let client = UserId::random();
    let cached = vec![ListingEntryPayload::from(&view(
        client,
        UserId::random(),
        14,
    ))];
    let cached_value = serde_json::to_value(&cached).expect("cached page serializes");

    let mut cache = MockListingCache::new();
    cache
        .expect_get()
        .times(1)
        .return_once(move |_| Ok(Some(cached_value)));
    let mut appointments = MockAppointmentStore::new();
    appointments.expect_list_active_for_user().times(0);

    let response = service(MockUserStore::new(), appointments, cache)
        .list_appointments(ListAppointmentsRequest {
            user_id: client,
            page: 1,
        })
        .await
        .expect("cached listing succeeds");

    assert_eq!(response.appointments, cached);
}

#[tokio::test]
async fn cache_misses_fill_the_page_from_the_store() {
    let client = UserId::random();

    let mut cache = MockListingCache::new();
    cache.expect_get().times(1).return_once(|_| Ok(None));
    cache
        .expect_put()
        .times(1)
        .withf(move |key, _, _| key.as_str() == format!("user:{client}:appointments:1"))
        .return_once(|_, _, _| Ok(()));
    let mut appointments = MockAppointmentStore::new();
    appointments
        .expect_list_active_for_user()
        .times(1)
        .withf(move |user_id, page, page_size| {
            user_id == &client && *page == 1 && *page_size == LISTING_PAGE_SIZE
        })
        .return_once(move |user_id, _, _| {
            Ok(vec![
                view(*user_id, UserId::random(), 9),
                view(*user_id, UserId::random(), 14),
            ])
        });

    let response = service(MockUserStore::new(), appointments, cache)
        .list_appointments(ListAppointmentsRequest {
            user_id: client,
            page: 1,
        })
        .await
        .expect("listing succeeds");

    assert_eq!(response.appointments.len(), 2);
    assert!(response.appointments[0].date < response.appointments[1].date);
}

#[tokio::test]
async fn cache_faults_fall_back_to_the_store() {
    let client = UserId::random();

    let mut cache = MockListingCache::new();
    cache
        .expect_get()
        .times(1)
        .return_once(|_| Err(ListingCacheError::backend("redis unreachable")));
    cache
        .expect_put()
        .times(1)
        .return_once(|_, _, _| Err(ListingCacheError::backend("redis unreachable")));
    let mut appointments = MockAppointmentStore::new();
    appointments
        .expect_list_active_for_user()
        .times(1)
        .return_once(|_, _, _| Ok(Vec::new()));

    let response = service(MockUserStore::new(), appointments, cache)
        .list_appointments(ListAppointmentsRequest {
            user_id: client,
            page: 1,
        })
        .await
        .expect("listing survives cache faults");

    assert!(response.appointments.is_empty());
}

#[tokio::test]
async fn page_zero_is_rejected() {
    let error = service(
        MockUserStore::new(),
        MockAppointmentStore::new(),
        MockListingCache::new(),
    )
    .list_appointments(ListAppointmentsRequest {
        user_id: UserId::random(),
        page: 0,
    })
    .await
    .expect_err("page 0 rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn schedule_requires_the_provider_flag() {
    let mut users = MockUserStore::new();
    users
        .expect_find_provider_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    let mut appointments = MockAppointmentStore::new();
    appointments.expect_list_active_for_provider_on().times(0);

    let error = service(users, appointments, MockListingCache::new())
        .provider_schedule(ProviderScheduleRequest {
            provider_id: UserId::random(),
            day: NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid fixture day"),
        })
        .await
        .expect_err("non-provider rejected");

    assert_eq!(error.code(), ErrorCode::PermissionDenied);
}

#[tokio::test]
async fn schedule_returns_the_days_entries_with_client_names() {
    let provider = UserId::random();
    let day = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid fixture day");

    let mut users = MockUserStore::new();
    users
        .expect_find_provider_by_id()
        .times(1)
        .return_once(|id| Ok(Some(UserProfile::new(*id, "Diego", "diego@example.com", true))));
    let mut appointments = MockAppointmentStore::new();
    appointments
        .expect_list_active_for_provider_on()
        .times(1)
        .return_once(move |provider_id, _| Ok(vec![view(UserId::random(), *provider_id, 14)]));

    let response = service(users, appointments, MockListingCache::new())
        .provider_schedule(ProviderScheduleRequest {
            provider_id: provider,
            day,
        })
        .await
        .expect("schedule succeeds");

    assert_eq!(response.appointments.len(), 1);
    assert_eq!(response.appointments[0].client_name, "Cecilia");
}
