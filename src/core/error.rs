//! Error types for lot operations.

use thiserror::Error;

use crate::core::spot::SizeClass;

/// Errors produced by lot, floor, and spot operations.
#[derive(Debug, Error)]
pub enum ParkError {
    /// Spot-level invariant violation: the spot is already occupied, already
    /// free, or out of service. Retryable when calling `assign`/`release`
    /// directly without the lot's coordinating lock.
    #[error("spot conflict: {0}")]
    Conflict(String),
    /// The vehicle already holds an active ticket.
    #[error("vehicle {0} is already parked")]
    AlreadyParked(String),
    /// No compatible spot is available anywhere in the lot.
    #[error("no available spot for a {0:?}-class vehicle")]
    NoAvailableSpot(SizeClass),
    /// The vehicle has no active ticket in this lot.
    #[error("vehicle {0} is not parked here")]
    NotParked(String),
    /// The vehicle type tag is not recognized by the factory.
    #[error("unknown vehicle type: {0}")]
    UnknownVehicleType(String),
    /// Ticket/index mismatch observed under the coordinating lock. Indicates a
    /// bug in this library, not a caller error.
    #[error("internal consistency violation: {0}")]
    InternalConsistency(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
