//! Appointment booking and cancellation engine.
//!
//! The crate exposes a transport-agnostic scheduling core: availability
//! validation, atomic slot booking, cancellation-window policy, and the
//! side-effect pipeline (durable notification, listing-cache invalidation,
//! asynchronous mail dispatch) that follows every state change. Inbound
//! adapters (HTTP or otherwise) call the driving ports in
//! [`domain::ports`]; driven ports describe the record store, cache, and
//! queue contracts that outbound adapters implement.

pub mod domain;
pub mod outbound;
