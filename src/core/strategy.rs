//! Placement strategies: pure selection policies over floors.

use std::sync::Arc;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::core::floor::Floor;
use crate::core::spot::ParkingSpot;
use crate::core::vehicle::Vehicle;

/// A candidate placement chosen by a strategy: floor number plus the spot.
#[derive(Debug, Clone)]
pub struct Placement {
    /// Number of the floor holding the spot.
    pub floor_number: u32,
    /// The selected spot.
    pub spot: Arc<ParkingSpot>,
}

/// Closed set of placement policies. All variants are stateless and
/// side-effect-free: `select` only reads floor and spot state.
///
/// Shared compatibility rule: a vehicle requiring size class `S` may occupy a
/// spot of class `S` or any strictly larger class, never a smaller one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementStrategy {
    /// First floor in stored order, smallest compatible class within it.
    Nearest,
    /// Uniformly random over the full compatible candidate set.
    Random,
    /// Smallest (cheapest) compatible class across all floors, floors in
    /// stored order within a class. Inverts Nearest's iteration order.
    Cheapest,
}

impl PlacementStrategy {
    /// Select a candidate placement for the vehicle, or `None` if no
    /// compatible spot is available anywhere.
    ///
    /// Reads are only consistent when the caller holds the lot's coordinating
    /// lock; the lot does so for the whole select-then-assign sequence.
    pub fn select(self, floors: &[Floor], vehicle: &Vehicle) -> Option<Placement> {
        match self {
            Self::Nearest => Self::select_nearest(floors, vehicle),
            Self::Random => Self::select_random(floors, vehicle),
            Self::Cheapest => Self::select_cheapest(floors, vehicle),
        }
    }

    fn select_nearest(floors: &[Floor], vehicle: &Vehicle) -> Option<Placement> {
        for floor in floors {
            for size in vehicle.size().upward() {
                if let Some(spot) = floor.available_spots(size).into_iter().next() {
                    return Some(Placement {
                        floor_number: floor.number(),
                        spot,
                    });
                }
            }
        }
        None
    }

    fn select_cheapest(floors: &[Floor], vehicle: &Vehicle) -> Option<Placement> {
        for size in vehicle.size().upward() {
            for floor in floors {
                if let Some(spot) = floor.available_spots(size).into_iter().next() {
                    return Some(Placement {
                        floor_number: floor.number(),
                        spot,
                    });
                }
            }
        }
        None
    }

    fn select_random(floors: &[Floor], vehicle: &Vehicle) -> Option<Placement> {
        let mut candidates = Vec::new();
        for floor in floors {
            for size in vehicle.size().upward() {
                for spot in floor.available_spots(size) {
                    candidates.push(Placement {
                        floor_number: floor.number(),
                        spot,
                    });
                }
            }
        }
        candidates.choose(&mut rand::rng()).cloned()
    }
}
