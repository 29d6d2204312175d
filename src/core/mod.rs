//! Domain core: resource units, grouping, placement policy, and coordination.

pub mod error;
pub mod spot;
pub mod floor;
pub mod vehicle;
pub mod ticket;
pub mod strategy;
pub mod lot;

pub use error::{AppResult, ParkError};
pub use spot::{ParkingSpot, SizeClass, SpotId, SpotStatus};
pub use floor::{Floor, FloorStatus};
pub use vehicle::{Vehicle, VehicleFactory, VehicleType};
pub use ticket::{ParkingTicket, TicketId};
pub use strategy::{Placement, PlacementStrategy};
pub use lot::ParkingLot;
