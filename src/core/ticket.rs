//! Parking session records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::spot::SpotId;
use crate::util::clock::now_ms;

/// Unique identifier for a ticket.
pub type TicketId = Uuid;

/// The record of one parking session, from entry to exit.
///
/// Immutable after creation except for the single exit-timestamp write at
/// unpark. The canonical copy lives in the lot's index until closed; callers
/// receive clones by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingTicket {
    /// Unique ticket id.
    pub ticket_id: TicketId,
    /// Plate of the parked vehicle.
    pub plate: String,
    /// Floor the vehicle parked on.
    pub floor_number: u32,
    /// Spot the vehicle occupies.
    pub spot_id: SpotId,
    /// Entry timestamp, milliseconds since epoch.
    pub entered_at_ms: u128,
    /// Exit timestamp, set exactly once at unpark.
    pub exited_at_ms: Option<u128>,
}

impl ParkingTicket {
    /// Open a ticket for a fresh parking session, stamped with the current time.
    pub fn open(plate: impl Into<String>, floor_number: u32, spot_id: SpotId) -> Self {
        Self {
            ticket_id: Uuid::new_v4(),
            plate: plate.into(),
            floor_number,
            spot_id,
            entered_at_ms: now_ms(),
            exited_at_ms: None,
        }
    }

    /// True once the exit timestamp has been written.
    pub const fn is_closed(&self) -> bool {
        self.exited_at_ms.is_some()
    }
}
