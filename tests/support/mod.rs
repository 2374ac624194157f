//! Shared world wiring the in-memory adapters to the real services.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use agenda::domain::ports::{
    BookAppointmentRequest, BookAppointmentResponse, BookingCommand, CancelAppointmentRequest,
    CancelAppointmentResponse, CancellationCommand,
};
use agenda::domain::{
    BookingService, CancellationService, Error, ListingService, NotificationDispatcher, UserId,
    UserProfile,
};
use agenda::outbound::memory::{
    InMemoryAppointmentStore, InMemoryListingCache, InMemoryMailQueue, InMemoryNotificationStore,
    InMemoryUserStore,
};
use uuid::Uuid;

/// Clock the tests move by hand.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock mutex poisoned") = now;
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().expect("clock mutex poisoned");
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock mutex poisoned")
    }
}

pub type WorldBookingService = BookingService<
    InMemoryUserStore,
    InMemoryAppointmentStore,
    InMemoryNotificationStore,
    InMemoryMailQueue,
    InMemoryListingCache,
>;

pub type WorldCancellationService =
    CancellationService<InMemoryAppointmentStore, InMemoryMailQueue, InMemoryListingCache>;

pub type WorldListingService =
    ListingService<InMemoryUserStore, InMemoryAppointmentStore, InMemoryListingCache>;

/// Fully wired engine over in-memory adapters and a manual clock.
pub struct World {
    pub clock: Arc<ManualClock>,
    pub users: Arc<InMemoryUserStore>,
    pub appointments: Arc<InMemoryAppointmentStore>,
    pub notifications: Arc<InMemoryNotificationStore>,
    pub mail_queue: Arc<InMemoryMailQueue>,
    pub cache: Arc<InMemoryListingCache>,
    pub booking: Arc<WorldBookingService>,
    pub cancellation: Arc<WorldCancellationService>,
    pub listing: Arc<WorldListingService>,
}

impl World {
    /// Wire every adapter and service with the clock at `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        let clock = Arc::new(ManualClock::at(now));
        let dyn_clock: Arc<dyn Clock> = Arc::clone(&clock) as Arc<dyn Clock>;

        let users = Arc::new(InMemoryUserStore::new());
        let appointments = Arc::new(InMemoryAppointmentStore::new(Arc::clone(&users)));
        let notifications = Arc::new(InMemoryNotificationStore::new(Arc::clone(&dyn_clock)));
        let mail_queue = Arc::new(InMemoryMailQueue::new());
        let cache = Arc::new(InMemoryListingCache::new(Arc::clone(&dyn_clock)));

        let dispatcher =
            NotificationDispatcher::new(Arc::clone(&notifications), Arc::clone(&mail_queue));
        let booking = Arc::new(BookingService::new(
            Arc::clone(&users),
            Arc::clone(&appointments),
            dispatcher,
            Arc::clone(&cache),
            Arc::clone(&dyn_clock),
        ));
        let cancellation = Arc::new(CancellationService::new(
            Arc::clone(&appointments),
            Arc::clone(&mail_queue),
            Arc::clone(&cache),
            Arc::clone(&dyn_clock),
        ));
        let listing = Arc::new(ListingService::new(
            Arc::clone(&users),
            Arc::clone(&appointments),
            Arc::clone(&cache),
        ));

        Self {
            clock,
            users,
            appointments,
            notifications,
            mail_queue,
            cache,
            booking,
            cancellation,
            listing,
        }
    }

    /// Register a non-provider user.
    pub fn seed_client(&self, name: &str) -> UserId {
        let id = UserId::random();
        let email = format!("{}@example.com", name.to_lowercase());
        self.users
            .insert(UserProfile::new(id, name, email, false))
            .expect("seeding a client succeeds");
        id
    }

    /// Register a provider.
    pub fn seed_provider(&self, name: &str) -> UserId {
        let id = UserId::random();
        let email = format!("{}@example.com", name.to_lowercase());
        self.users
            .insert(UserProfile::new(id, name, email, true))
            .expect("seeding a provider succeeds");
        id
    }

    pub async fn book(
        &self,
        user_id: UserId,
        provider_id: UserId,
        date: DateTime<Utc>,
    ) -> Result<BookAppointmentResponse, Error> {
        self.booking
            .book_appointment(BookAppointmentRequest {
                user_id,
                provider_id,
                date,
            })
            .await
    }

    pub async fn cancel(
        &self,
        appointment_id: Uuid,
        requesting_user_id: UserId,
    ) -> Result<CancelAppointmentResponse, Error> {
        self.cancellation
            .cancel_appointment(CancelAppointmentRequest {
                appointment_id,
                requesting_user_id,
            })
            .await
    }
}

/// 2025-03-10 at the given hour and minute, UTC.
pub fn march_10(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0)
        .single()
        .expect("valid fixture timestamp")
}
