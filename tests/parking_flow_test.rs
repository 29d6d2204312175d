//! Integration tests for the full park/unpark flow.
//!
//! These tests validate:
//! 1. Round trips conserve spot counts
//! 2. The two allocation indexes stay mutually consistent
//! 3. Each error kind surfaces on its documented path
//! 4. Size-class compatibility is honored end to end

use lotkeeper::builders::build_lot;
use lotkeeper::config::LotConfig;
use lotkeeper::core::{ParkError, ParkingLot, SizeClass, VehicleFactory};

fn city_center_lot() -> ParkingLot {
    let cfg = LotConfig::from_json_str(
        r#"{
            "name": "City Center Parking",
            "location": "Downtown",
            "strategy": "nearest",
            "floors": [
                {"number": 1, "small": 2, "medium": 2, "large": 1},
                {"number": 2, "small": 1, "medium": 2, "large": 1}
            ]
        }"#,
    )
    .unwrap();
    build_lot(&cfg).unwrap()
}

#[test]
fn park_unpark_round_trip_conserves_summary() {
    let lot = city_center_lot();
    let before = lot.available_spots_summary();

    let car = VehicleFactory::create("car", "CAR-1234").unwrap();
    let ticket = lot.park(&car).unwrap();
    assert_eq!(ticket.plate, "CAR-1234");

    let after_park = lot.available_spots_summary();
    let total_before: usize = before.values().flat_map(|f| f.values()).sum();
    let total_after: usize = after_park.values().flat_map(|f| f.values()).sum();
    assert_eq!(total_after, total_before - 1);

    let closed = lot.unpark("CAR-1234").unwrap();
    assert_eq!(closed.ticket_id, ticket.ticket_id);
    assert_eq!(closed.plate, "CAR-1234");
    assert!(closed.is_closed());
    assert_eq!(lot.available_spots_summary(), before);
}

#[test]
fn indexes_stay_consistent_across_operation_sequences() {
    let lot = city_center_lot();
    let plates = ["CAR-1", "CAR-2", "BIKE-1", "TRUCK-1"];

    let mut tickets = Vec::new();
    for plate in plates {
        let tag = plate.split('-').next().unwrap();
        let vehicle = VehicleFactory::create(tag, plate).unwrap();
        tickets.push(lot.park(&vehicle).unwrap());
    }
    assert_eq!(lot.occupied_count(), plates.len());
    for ticket in &tickets {
        // every indexed vehicle has its ticket indexed too
        assert!(lot.active_ticket(ticket.ticket_id).is_some());
    }

    // interleave removals and re-additions
    lot.unpark("CAR-1").unwrap();
    lot.unpark("BIKE-1").unwrap();
    let bike = VehicleFactory::create("bike", "BIKE-2").unwrap();
    let bike_ticket = lot.park(&bike).unwrap();

    assert_eq!(lot.occupied_count(), 3);
    assert!(lot.active_ticket(tickets[0].ticket_id).is_none());
    assert!(lot.active_ticket(bike_ticket.ticket_id).is_some());
}

#[test]
fn second_park_for_same_plate_fails_with_already_parked() {
    let lot = city_center_lot();
    let car = VehicleFactory::create("car", "CAR-1").unwrap();

    lot.park(&car).unwrap();
    let snapshot = lot.available_spots_summary();

    assert!(matches!(
        lot.park(&car),
        Err(ParkError::AlreadyParked(p)) if p == "CAR-1"
    ));
    assert_eq!(lot.available_spots_summary(), snapshot);
}

#[test]
fn unpark_without_park_fails_with_not_parked() {
    let lot = city_center_lot();
    let snapshot = lot.available_spots_summary();

    assert!(matches!(
        lot.unpark("NEVER-1"),
        Err(ParkError::NotParked(p)) if p == "NEVER-1"
    ));
    assert_eq!(lot.available_spots_summary(), snapshot);
}

#[test]
fn bike_and_trucks_scenario_respects_compatibility() {
    // one floor, 2 Small + 1 Large
    let cfg = LotConfig::from_json_str(
        r#"{
            "name": "Compat Lot",
            "location": "Edge of town",
            "strategy": "nearest",
            "floors": [{"number": 1, "small": 2, "large": 1}]
        }"#,
    )
    .unwrap();
    let lot = build_lot(&cfg).unwrap();

    // bike takes the first small spot
    let bike = VehicleFactory::create("bike", "BIKE-1").unwrap();
    lot.park(&bike).unwrap();
    let summary = lot.available_spots_summary();
    assert_eq!(summary[&1][&SizeClass::Small], 1);

    // truck takes the large spot
    let truck = VehicleFactory::create("truck", "TRUCK-1").unwrap();
    lot.park(&truck).unwrap();

    // second truck cannot downgrade into small
    let truck2 = VehicleFactory::create("truck", "TRUCK-2").unwrap();
    assert!(matches!(
        lot.park(&truck2),
        Err(ParkError::NoAvailableSpot(SizeClass::Large))
    ));
    assert_eq!(lot.available_spots_summary()[&1][&SizeClass::Small], 1);
}

#[test]
fn vehicle_factory_rejects_unknown_tags() {
    assert!(matches!(
        VehicleFactory::create("hovercraft", "H-1"),
        Err(ParkError::UnknownVehicleType(tag)) if tag == "hovercraft"
    ));
}

#[test]
fn tickets_serialize_for_callers() {
    let lot = city_center_lot();
    let car = VehicleFactory::create("car", "CAR-9").unwrap();
    let ticket = lot.park(&car).unwrap();

    let json = serde_json::to_string(&ticket).unwrap();
    assert!(json.contains("CAR-9"));
    let back: lotkeeper::core::ParkingTicket = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ticket);
}
