//! The lot coordinator: floors, allocation indexes, and the coordinating lock.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::error::ParkError;
use crate::core::floor::{Floor, FloorStatus};
use crate::core::spot::{ParkingSpot, SizeClass};
use crate::core::strategy::PlacementStrategy;
use crate::core::ticket::{ParkingTicket, TicketId};
use crate::core::vehicle::Vehicle;
use crate::util::clock::now_ms;

/// Per-floor availability counts, keyed by size class.
pub type FloorSummary = BTreeMap<SizeClass, usize>;

/// Shared mutable state guarded by the coordinating lock.
///
/// Invariant: a plate appears in `active` iff its ticket is in `tickets`, and
/// the indexed spot's occupant matches the plate.
#[derive(Debug, Default)]
struct LotState {
    floors: Vec<Floor>,
    /// plate → occupied spot
    active: HashMap<String, Arc<ParkingSpot>>,
    /// ticket id → active ticket (canonical copy until closed)
    tickets: HashMap<TicketId, ParkingTicket>,
}

/// A multi-floor parking lot coordinating concurrent spot allocation.
///
/// All shared mutable state lives behind a single coordinating
/// `parking_lot::Mutex`, so `park`, `unpark`, and the availability summary are
/// serialized end to end: the select-then-assign sequence is atomic from the
/// caller's point of view, and no partial state is ever observable. Absence of
/// capacity is reported immediately; no operation blocks waiting for a spot to
/// free up.
#[derive(Debug)]
pub struct ParkingLot {
    name: String,
    location: String,
    strategy: PlacementStrategy,
    state: Mutex<LotState>,
}

impl ParkingLot {
    /// Create an empty lot with the given placement strategy.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        strategy: PlacementStrategy,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            strategy,
            state: Mutex::new(LotState::default()),
        }
    }

    /// Lot name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lot location.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The injected placement strategy.
    pub const fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }

    /// Append a floor to the lot.
    ///
    /// Floors are ordinarily added at setup time; the coordinating lock makes
    /// this safe to call while `park`/`unpark` are in flight as well.
    pub fn add_floor(&self, floor: Floor) {
        let mut state = self.state.lock();
        tracing::debug!(floor = floor.number(), lot = %self.name, "floor added");
        state.floors.push(floor);
    }

    /// Open or close a floor by number. Returns false if no such floor exists.
    pub fn set_floor_status(&self, floor_number: u32, status: FloorStatus) -> bool {
        let mut state = self.state.lock();
        match state
            .floors
            .iter_mut()
            .find(|f| f.number() == floor_number)
        {
            Some(floor) => {
                floor.set_status(status);
                tracing::info!(floor = floor_number, ?status, "floor status changed");
                true
            }
            None => false,
        }
    }

    /// Park a vehicle: select a compatible spot via the strategy, assign it,
    /// and record the session. Returns the opened ticket by value.
    ///
    /// # Errors
    ///
    /// - [`ParkError::AlreadyParked`] if the vehicle already holds an active
    ///   ticket; state is left unchanged.
    /// - [`ParkError::NoAvailableSpot`] if the strategy finds no compatible
    ///   spot anywhere.
    /// - [`ParkError::InternalConsistency`] if the chosen spot rejects the
    ///   assignment. The coordinating lock makes that unreachable; observing
    ///   it means an invariant was broken elsewhere, so it is surfaced rather
    ///   than retried.
    pub fn park(&self, vehicle: &Vehicle) -> Result<ParkingTicket, ParkError> {
        let mut state = self.state.lock();

        if state.active.contains_key(vehicle.plate()) {
            tracing::warn!(plate = vehicle.plate(), "park rejected: already parked");
            return Err(ParkError::AlreadyParked(vehicle.plate().to_owned()));
        }

        let Some(placement) = self.strategy.select(&state.floors, vehicle) else {
            tracing::warn!(
                plate = vehicle.plate(),
                size = ?vehicle.size(),
                "park rejected: no available spot"
            );
            return Err(ParkError::NoAvailableSpot(vehicle.size()));
        };

        placement.spot.assign(vehicle).map_err(|e| {
            ParkError::InternalConsistency(format!(
                "spot selected under the coordinating lock refused assignment: {e}"
            ))
        })?;

        let ticket = ParkingTicket::open(
            vehicle.plate(),
            placement.floor_number,
            placement.spot.id(),
        );
        state
            .active
            .insert(vehicle.plate().to_owned(), Arc::clone(&placement.spot));
        state.tickets.insert(ticket.ticket_id, ticket.clone());

        tracing::info!(
            plate = vehicle.plate(),
            ticket = %ticket.ticket_id,
            floor = ticket.floor_number,
            spot = %ticket.spot_id,
            "vehicle parked"
        );
        Ok(ticket)
    }

    /// Unpark a vehicle by plate: release its spot, close its ticket, and drop
    /// both index entries. Returns the closed ticket by value.
    ///
    /// # Errors
    ///
    /// - [`ParkError::NotParked`] if the plate has no active session; state is
    ///   left unchanged.
    /// - [`ParkError::InternalConsistency`] if the indexed spot was not
    ///   occupied or the matching ticket is missing — either way the two
    ///   indexes disagreed, which indicates a bug.
    pub fn unpark(&self, plate: &str) -> Result<ParkingTicket, ParkError> {
        let mut state = self.state.lock();

        let Some(spot) = state.active.get(plate).cloned() else {
            tracing::warn!(plate, "unpark rejected: not parked here");
            return Err(ParkError::NotParked(plate.to_owned()));
        };

        spot.release().map_err(|e| {
            ParkError::InternalConsistency(format!(
                "indexed spot for {plate} refused release: {e}"
            ))
        })?;

        let ticket_id = state
            .tickets
            .values()
            .find(|t| t.plate == plate)
            .map(|t| t.ticket_id)
            .ok_or_else(|| {
                ParkError::InternalConsistency(format!(
                    "vehicle {plate} indexed without an active ticket"
                ))
            })?;

        // both removals happen before the lock is released; no partial state
        let mut ticket = state
            .tickets
            .remove(&ticket_id)
            .ok_or_else(|| {
                ParkError::InternalConsistency(format!("ticket {ticket_id} vanished"))
            })?;
        state.active.remove(plate);
        ticket.exited_at_ms = Some(now_ms());

        tracing::info!(
            plate,
            ticket = %ticket.ticket_id,
            floor = ticket.floor_number,
            "vehicle unparked"
        );
        Ok(ticket)
    }

    /// Lock-consistent snapshot of available spot counts:
    /// floor number → size class → count.
    ///
    /// Taken under the coordinating lock, so no park/unpark interleaves while
    /// the snapshot is computed.
    pub fn available_spots_summary(&self) -> BTreeMap<u32, FloorSummary> {
        let state = self.state.lock();
        state
            .floors
            .iter()
            .map(|floor| {
                let per_class = SizeClass::ALL
                    .into_iter()
                    .map(|size| (size, floor.available_count(size)))
                    .collect();
                (floor.number(), per_class)
            })
            .collect()
    }

    /// Look up an active ticket by id. Returns `None` once the session closed.
    pub fn active_ticket(&self, ticket_id: TicketId) -> Option<ParkingTicket> {
        self.state.lock().tickets.get(&ticket_id).cloned()
    }

    /// Number of vehicles currently parked.
    pub fn occupied_count(&self) -> usize {
        self.state.lock().active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vehicle::{VehicleFactory, VehicleType};

    fn small_lot(strategy: PlacementStrategy) -> ParkingLot {
        let lot = ParkingLot::new("Test Lot", "Nowhere", strategy);
        let mut floor = Floor::new(1);
        floor.add_spots(SizeClass::Small, 2);
        floor.add_spots(SizeClass::Large, 1);
        lot.add_floor(floor);
        lot
    }

    #[test]
    fn test_park_assigns_compatible_spot_and_indexes_ticket() {
        let lot = small_lot(PlacementStrategy::Nearest);
        let bike = Vehicle::new(VehicleType::Bike, "BIKE-1");

        let ticket = lot.park(&bike).unwrap();
        assert_eq!(ticket.plate, "BIKE-1");
        assert_eq!(ticket.floor_number, 1);
        assert!(!ticket.is_closed());
        assert_eq!(lot.occupied_count(), 1);
        assert_eq!(
            lot.active_ticket(ticket.ticket_id).unwrap().ticket_id,
            ticket.ticket_id
        );
    }

    #[test]
    fn test_double_park_fails_and_leaves_state_unchanged() {
        let lot = small_lot(PlacementStrategy::Nearest);
        let bike = Vehicle::new(VehicleType::Bike, "BIKE-1");

        lot.park(&bike).unwrap();
        let before = lot.available_spots_summary();

        let err = lot.park(&bike).unwrap_err();
        assert!(matches!(err, ParkError::AlreadyParked(p) if p == "BIKE-1"));
        assert_eq!(lot.available_spots_summary(), before);
        assert_eq!(lot.occupied_count(), 1);
    }

    #[test]
    fn test_unpark_unknown_vehicle_fails() {
        let lot = small_lot(PlacementStrategy::Nearest);
        assert!(matches!(
            lot.unpark("GHOST-1"),
            Err(ParkError::NotParked(p)) if p == "GHOST-1"
        ));
    }

    #[test]
    fn test_unpark_twice_fails_second_time() {
        let lot = small_lot(PlacementStrategy::Nearest);
        let bike = Vehicle::new(VehicleType::Bike, "BIKE-1");

        lot.park(&bike).unwrap();
        lot.unpark("BIKE-1").unwrap();
        assert!(matches!(
            lot.unpark("BIKE-1"),
            Err(ParkError::NotParked(_))
        ));
    }

    #[test]
    fn test_round_trip_conserves_summary() {
        let lot = small_lot(PlacementStrategy::Cheapest);
        let before = lot.available_spots_summary();

        let truck = VehicleFactory::create("truck", "TRUCK-1").unwrap();
        let ticket = lot.park(&truck).unwrap();
        assert_ne!(lot.available_spots_summary(), before);

        let closed = lot.unpark("TRUCK-1").unwrap();
        assert_eq!(closed.ticket_id, ticket.ticket_id);
        assert!(closed.is_closed());
        assert!(closed.exited_at_ms.unwrap() >= closed.entered_at_ms);
        assert_eq!(lot.available_spots_summary(), before);
        assert!(lot.active_ticket(ticket.ticket_id).is_none());
    }

    #[test]
    fn test_capacity_exhaustion_reports_no_available_spot() {
        let lot = small_lot(PlacementStrategy::Nearest);

        // the single large spot can host one truck; smaller classes cannot
        lot.park(&Vehicle::new(VehicleType::Truck, "TRUCK-1"))
            .unwrap();
        let err = lot
            .park(&Vehicle::new(VehicleType::Truck, "TRUCK-2"))
            .unwrap_err();
        assert!(matches!(err, ParkError::NoAvailableSpot(SizeClass::Large)));
    }

    #[test]
    fn test_closing_a_floor_hides_its_spots() {
        let lot = small_lot(PlacementStrategy::Nearest);
        assert!(lot.set_floor_status(1, FloorStatus::Closed));
        assert!(!lot.set_floor_status(99, FloorStatus::Closed));

        let err = lot
            .park(&Vehicle::new(VehicleType::Bike, "BIKE-1"))
            .unwrap_err();
        assert!(matches!(err, ParkError::NoAvailableSpot(_)));

        let summary = lot.available_spots_summary();
        assert_eq!(summary[&1][&SizeClass::Small], 0);
    }
}
