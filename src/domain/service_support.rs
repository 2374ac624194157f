//! Shared adapter-error mapping used by the scheduling services.
//!
//! Connection faults become `ServiceUnavailable`; execution faults become
//! `InternalError`. Port-specific conflict variants are mapped at the call
//! site where the stable vocabulary rule applies.

use crate::domain::Error;
use crate::domain::ports::{AppointmentStoreError, NotificationStoreError, UserStoreError};

pub(crate) fn map_user_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserStoreError::Query { message } => Error::internal(format!("user store error: {message}")),
    }
}

pub(crate) fn map_appointment_store_error(error: AppointmentStoreError) -> Error {
    match error {
        AppointmentStoreError::Connection { message } => {
            Error::service_unavailable(format!("appointment store unavailable: {message}"))
        }
        AppointmentStoreError::Query { message } => {
            Error::internal(format!("appointment store error: {message}"))
        }
        AppointmentStoreError::SlotTaken { .. } => {
            Error::slot_unavailable("appointment slot is not available")
        }
        AppointmentStoreError::AlreadyCanceled { id } => {
            Error::conflict(format!("appointment {id} is already canceled"))
        }
        AppointmentStoreError::NotFound { id } => {
            Error::not_found(format!("appointment {id} not found"))
        }
    }
}

pub(crate) fn map_notification_store_error(error: NotificationStoreError) -> Error {
    match error {
        NotificationStoreError::Connection { message } => {
            Error::service_unavailable(format!("notification store unavailable: {message}"))
        }
        NotificationStoreError::Write { message } => {
            Error::internal(format!("notification store error: {message}"))
        }
    }
}
