//! Domain entities, ports, and scheduling services.
//!
//! Purpose: keep every business rule of the booking engine behind typed,
//! clock-injected services so adapters stay free of policy. Entities are
//! immutable value objects; the only permitted mutation in the whole model
//! is the one-way `Active -> Canceled` appointment transition.

pub mod appointment;
pub mod availability;
pub mod booking_service;
pub mod cancellation_service;
pub mod error;
pub mod listing_service;
pub mod localization;
pub mod notification;
pub mod notification_dispatcher;
pub mod ports;
pub(crate) mod service_support;
pub mod user;

pub use self::appointment::{
    Appointment, AppointmentDraft, AppointmentStatus, AppointmentValidationError, AppointmentView,
    Slot, start_of_hour,
};
pub use self::availability::{AvailabilityValidator, BookingCandidate};
pub use self::booking_service::BookingService;
pub use self::cancellation_service::{CancellationService, cancellation_window};
pub use self::error::{Error, ErrorCode};
pub use self::listing_service::{LISTING_PAGE_SIZE, ListingService};
pub use self::notification::Notification;
pub use self::notification_dispatcher::NotificationDispatcher;
pub use self::user::{UserId, UserIdParseError, UserProfile};

/// Convenient result alias for driving-port operations.
pub type DomainResult<T> = Result<T, Error>;
