//! A floor: an ordered group of spots partitioned by size class.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::spot::{ParkingSpot, SizeClass};

/// Whether a floor is open for placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorStatus {
    /// Floor participates in spot selection.
    Active,
    /// Floor reports zero available spots regardless of underlying spot state.
    Closed,
}

/// One floor of the facility, owning its spots.
///
/// Spots are appended at setup time and never destroyed during normal
/// operation; runtime additions must go through the lot's coordinating lock.
#[derive(Debug)]
pub struct Floor {
    number: u32,
    status: FloorStatus,
    spots: HashMap<SizeClass, Vec<Arc<ParkingSpot>>>,
}

impl Floor {
    /// Create an empty active floor.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            status: FloorStatus::Active,
            spots: SizeClass::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    /// Floor number, unique within its lot.
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Current floor status.
    pub const fn status(&self) -> FloorStatus {
        self.status
    }

    /// Open or close the floor as a unit.
    pub fn set_status(&mut self, status: FloorStatus) {
        self.status = status;
    }

    /// Append `count` fresh spots of the given size class.
    pub fn add_spots(&mut self, size: SizeClass, count: usize) {
        let bucket = self.spots.entry(size).or_default();
        for _ in 0..count {
            bucket.push(Arc::new(ParkingSpot::new(size)));
        }
    }

    /// Currently-available spots of exactly the given class, in stored order.
    ///
    /// Returns an empty vector when the floor is not active. Read-only; spot
    /// state may change under concurrent mutation unless the caller holds the
    /// lot's coordinating lock.
    pub fn available_spots(&self, size: SizeClass) -> Vec<Arc<ParkingSpot>> {
        if self.status != FloorStatus::Active {
            return Vec::new();
        }
        self.spots
            .get(&size)
            .map(|bucket| {
                bucket
                    .iter()
                    .filter(|spot| spot.is_available())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Count of currently-available spots of the given class.
    pub fn available_count(&self, size: SizeClass) -> usize {
        self.available_spots(size).len()
    }

    /// Total spots of the given class, regardless of occupancy.
    pub fn spot_count(&self, size: SizeClass) -> usize {
        self.spots.get(&size).map_or(0, Vec::len)
    }
}
