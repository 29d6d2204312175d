//! # Lotkeeper
//!
//! A concurrent allocation manager for a multi-floor parking facility.
//!
//! This library models parking spots as a finite, typed, shared resource pool:
//! vehicles acquire and release spots under concurrent access, and placement is
//! governed by a pluggable selection strategy. The engineering core is correct
//! mutual exclusion across two lock granularities (per-spot and whole-lot),
//! atomic multi-step state transitions (select, assign, record), and a strategy
//! abstraction with distinct tie-break semantics.
//!
//! ## Locking model
//!
//! Two explicit lock tiers, both built on `parking_lot::Mutex`:
//!
//! - **Spot-level lock**: guards a single spot's status and occupant; its scope
//!   is exactly one `assign` or `release` call.
//! - **Lot-level coordinating lock**: guards the plate and ticket indexes and
//!   serializes the entire select-then-assign (or lookup-then-release) sequence
//!   for `park`, `unpark`, and the availability summary.
//!
//! Because `park` and `unpark` hold the coordinating lock for their full
//! duration, at most one park-or-unpark executes at a time lot-wide. The
//! spot-level lock is then redundant under that outer lock, but is retained so
//! that `assign`/`release` remain individually atomic even for callers that
//! integrate against [`core::ParkingSpot`] directly.
//!
//! ## Example
//!
//! ```rust,ignore
//! use lotkeeper::core::{Floor, ParkingLot, PlacementStrategy, SizeClass, VehicleFactory};
//!
//! let lot = ParkingLot::new("City Center", "Downtown", PlacementStrategy::Nearest);
//!
//! let mut floor = Floor::new(1);
//! floor.add_spots(SizeClass::Small, 2);
//! floor.add_spots(SizeClass::Large, 1);
//! lot.add_floor(floor);
//!
//! let bike = VehicleFactory::create("bike", "BIKE-1111")?;
//! let ticket = lot.park(&bike)?;
//! let closed = lot.unpark(bike.plate())?;
//! assert_eq!(closed.ticket_id, ticket.ticket_id);
//! ```
//!
//! For complete examples, see:
//! - `tests/parking_flow_test.rs` - Full integration tests
//! - `tests/concurrency_test.rs` - Multi-threaded allocation tests

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Domain core: spots, floors, vehicles, tickets, strategies, and the lot coordinator.
pub mod core;
/// Configuration models for lots, floors, and strategy selection.
pub mod config;
/// Builders to construct a parking lot from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
