//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope; the engine guarantees
//! one stable vocabulary regardless of which layer detected the failure
//! (for example, a slot race lost at write time surfaces the same code as
//! the advisory pre-check).

use serde::{Deserialize, Serialize};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The referenced provider does not exist or is not flagged as one.
    ProviderNotFound,
    /// The requested slot starts before the current wall-clock hour.
    PastDate,
    /// An active appointment already occupies the requested slot.
    SlotUnavailable,
    /// A user attempted to book an appointment with themselves.
    SelfBooking,
    /// The requester is not permitted to act on this appointment.
    PermissionDenied,
    /// Cancellation was attempted inside the two-hour lead window.
    CancellationWindowExpired,
    /// The mutation raced with a conflicting write and lost.
    Conflict,
    /// The requested record does not exist.
    NotFound,
    /// A backing store or cache could not be reached.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload carried back to the transport layer.
///
/// All variants are recoverable by the caller; none represent process-fatal
/// conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error from a code and human-readable message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::ProviderNotFound`].
    pub fn provider_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProviderNotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::PastDate`].
    pub fn past_date(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PastDate, message)
    }

    /// Convenience constructor for [`ErrorCode::SlotUnavailable`].
    pub fn slot_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SlotUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::SelfBooking`].
    pub fn self_booking(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SelfBooking, message)
    }

    /// Convenience constructor for [`ErrorCode::PermissionDenied`].
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PermissionDenied, message)
    }

    /// Convenience constructor for [`ErrorCode::CancellationWindowExpired`].
    pub fn cancellation_window_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CancellationWindowExpired, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
