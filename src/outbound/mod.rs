//! Outbound adapters implementing the driven ports.
//!
//! Durable SQL, Redis, and broker-backed adapters live with the deployment
//! that owns those resources; this crate ships in-memory adapters that
//! honour every port contract, including the atomic active-slot constraint
//! and the conditional cancellation write.

pub mod memory;
