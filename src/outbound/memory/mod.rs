//! In-memory adapters for the driven ports.
//!
//! Each adapter serialises its critical section behind one mutex, so the
//! check-then-act sequences the ports promise to be atomic really are, even
//! under concurrent callers.

mod appointment_store;
mod cache;
mod mail_queue;
mod notification_store;
mod user_store;

pub use appointment_store::InMemoryAppointmentStore;
pub use cache::InMemoryListingCache;
pub use mail_queue::InMemoryMailQueue;
pub use notification_store::InMemoryNotificationStore;
pub use user_store::InMemoryUserStore;
