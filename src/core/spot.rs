//! A single parking spot: one resource unit with an atomic occupancy state.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::ParkError;
use crate::core::vehicle::Vehicle;

/// Unique identifier for a spot.
pub type SpotId = Uuid;

/// Ordered compatibility tier of a spot or vehicle.
///
/// A vehicle requiring class `S` may occupy a spot of class `S` or any strictly
/// larger class, never a smaller one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    /// Smallest (and cheapest) tier.
    Small,
    /// Middle tier.
    Medium,
    /// Largest tier.
    Large,
}

impl SizeClass {
    /// All size classes in ascending order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// This class and every larger class, in ascending order: the set of spot
    /// classes compatible with a vehicle of this class.
    pub fn upward(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |c| *c >= self)
    }
}

/// Occupancy status of a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotStatus {
    /// Free for assignment.
    Available,
    /// Holds exactly one vehicle.
    Occupied,
    /// Withdrawn from service; never offered to strategies.
    OutOfService,
}

/// Mutable state guarded by the spot-level lock.
///
/// Invariant: `status == Occupied` iff `occupant` is set, and
/// `status == Available` iff `occupant` is unset.
#[derive(Debug)]
struct SpotState {
    status: SpotStatus,
    occupant: Option<String>,
}

/// One physical parking spot of a fixed size class.
///
/// The status/occupant pair is guarded by its own `parking_lot::Mutex`, so
/// `assign` and `release` are atomic with respect to concurrent callers on the
/// same spot regardless of any outer lock.
#[derive(Debug)]
pub struct ParkingSpot {
    id: SpotId,
    size: SizeClass,
    state: Mutex<SpotState>,
}

impl ParkingSpot {
    /// Create a fresh available spot of the given size class.
    pub fn new(size: SizeClass) -> Self {
        Self {
            id: Uuid::new_v4(),
            size,
            state: Mutex::new(SpotState {
                status: SpotStatus::Available,
                occupant: None,
            }),
        }
    }

    /// Unique id of this spot.
    pub const fn id(&self) -> SpotId {
        self.id
    }

    /// Fixed size class of this spot.
    pub const fn size(&self) -> SizeClass {
        self.size
    }

    /// Current status snapshot.
    pub fn status(&self) -> SpotStatus {
        self.state.lock().status
    }

    /// Plate of the current occupant, if any.
    pub fn occupant(&self) -> Option<String> {
        self.state.lock().occupant.clone()
    }

    /// True iff the spot is `Available` with no occupant.
    ///
    /// A read made without the lot's coordinating lock may be momentarily
    /// stale; the authoritative mutation is `assign`, which fails loudly on a
    /// lost race. Callers bypassing the lot must treat that failure as
    /// retryable rather than ignore it.
    pub fn is_available(&self) -> bool {
        let state = self.state.lock();
        state.status == SpotStatus::Available && state.occupant.is_none()
    }

    /// Assign a vehicle to this spot.
    ///
    /// # Errors
    ///
    /// Returns [`ParkError::Conflict`] if the spot is not available or already
    /// has an occupant.
    pub fn assign(&self, vehicle: &Vehicle) -> Result<(), ParkError> {
        let mut state = self.state.lock();
        if state.status != SpotStatus::Available || state.occupant.is_some() {
            // another caller may have taken it in the gap
            return Err(ParkError::Conflict(format!(
                "spot {} is not available",
                self.id
            )));
        }
        state.occupant = Some(vehicle.plate().to_owned());
        state.status = SpotStatus::Occupied;
        Ok(())
    }

    /// Release the current occupant.
    ///
    /// # Errors
    ///
    /// Returns [`ParkError::Conflict`] if the spot has no occupant.
    pub fn release(&self) -> Result<(), ParkError> {
        let mut state = self.state.lock();
        if state.occupant.is_none() {
            return Err(ParkError::Conflict(format!(
                "spot {} is not occupied",
                self.id
            )));
        }
        state.occupant = None;
        state.status = SpotStatus::Available;
        Ok(())
    }

    /// Withdraw the spot from service.
    ///
    /// # Errors
    ///
    /// Returns [`ParkError::Conflict`] if the spot is currently occupied.
    pub fn take_out_of_service(&self) -> Result<(), ParkError> {
        let mut state = self.state.lock();
        if state.occupant.is_some() {
            return Err(ParkError::Conflict(format!(
                "spot {} is occupied and cannot be withdrawn",
                self.id
            )));
        }
        state.status = SpotStatus::OutOfService;
        Ok(())
    }

    /// Return a withdrawn spot to service.
    ///
    /// # Errors
    ///
    /// Returns [`ParkError::Conflict`] if the spot is not out of service.
    pub fn return_to_service(&self) -> Result<(), ParkError> {
        let mut state = self.state.lock();
        if state.status != SpotStatus::OutOfService {
            return Err(ParkError::Conflict(format!(
                "spot {} is not out of service",
                self.id
            )));
        }
        state.status = SpotStatus::Available;
        Ok(())
    }
}
