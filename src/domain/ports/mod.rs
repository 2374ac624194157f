//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (stores, cache, queue) describe the contracts the engine
//! requires from its collaborators; driving ports (commands, queries) are
//! the operations the excluded transport layer consumes.

mod appointment_store;
mod appointments_query;
mod booking_command;
mod cache_key;
mod cancellation_command;
mod listing_cache;
mod mail_queue;
mod notification_store;
mod user_store;

#[cfg(test)]
pub use appointment_store::MockAppointmentStore;
pub use appointment_store::{AppointmentStore, AppointmentStoreError, FixtureAppointmentStore};
#[cfg(test)]
pub use appointments_query::MockAppointmentsQuery;
pub use appointments_query::{
    AppointmentsQuery, FixtureAppointmentsQuery, ListAppointmentsRequest, ListAppointmentsResponse,
    ListingEntryPayload, ProviderScheduleRequest, ProviderScheduleResponse, ScheduleEntryPayload,
};
#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_command::{
    AppointmentPayload, BookAppointmentRequest, BookAppointmentResponse, BookingCommand,
    FixtureBookingCommand,
};
pub use cache_key::{ListingCacheKey, ListingCachePrefix};
#[cfg(test)]
pub use cancellation_command::MockCancellationCommand;
pub use cancellation_command::{
    CancelAppointmentRequest, CancelAppointmentResponse, CancellationCommand,
    FixtureCancellationCommand,
};
#[cfg(test)]
pub use listing_cache::MockListingCache;
pub use listing_cache::{FixtureListingCache, ListingCache, ListingCacheError};
#[cfg(test)]
pub use mail_queue::MockMailQueue;
pub use mail_queue::{
    AppointmentSnapshot, FixtureMailQueue, MailJob, MailQueue, MailQueueError,
};
#[cfg(test)]
pub use notification_store::MockNotificationStore;
pub use notification_store::{
    FixtureNotificationStore, NotificationStore, NotificationStoreError,
};
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{FixtureUserStore, UserStore, UserStoreError};
