//! Vehicles and the type-tag factory.

use serde::{Deserialize, Serialize};

use crate::core::error::ParkError;
use crate::core::spot::SizeClass;

/// Closed set of supported vehicle types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Two-wheeler, needs a Small spot.
    Bike,
    /// Passenger car, needs a Medium spot.
    Car,
    /// Heavy vehicle, needs a Large spot.
    Truck,
}

impl VehicleType {
    /// Minimum size class a vehicle of this type requires.
    pub const fn required_size(self) -> SizeClass {
        match self {
            Self::Bike => SizeClass::Small,
            Self::Car => SizeClass::Medium,
            Self::Truck => SizeClass::Large,
        }
    }
}

/// An immutable vehicle identity: plate, type, and required size class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    plate: String,
    kind: VehicleType,
    size: SizeClass,
}

impl Vehicle {
    /// Create a vehicle of the given type; the size class follows the type.
    pub fn new(kind: VehicleType, plate: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
            kind,
            size: kind.required_size(),
        }
    }

    /// Plate number, the vehicle's unique id.
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Vehicle type.
    pub const fn kind(&self) -> VehicleType {
        self.kind
    }

    /// Minimum size class this vehicle requires.
    pub const fn size(&self) -> SizeClass {
        self.size
    }
}

/// Pure construction dispatch from a case-insensitive type tag.
pub struct VehicleFactory;

impl VehicleFactory {
    /// Create a vehicle from a type tag ("bike", "car", "truck"; any case).
    ///
    /// # Errors
    ///
    /// Returns [`ParkError::UnknownVehicleType`] for unrecognized tags.
    pub fn create(tag: &str, plate: impl Into<String>) -> Result<Vehicle, ParkError> {
        match tag.to_ascii_lowercase().as_str() {
            "bike" => Ok(Vehicle::new(VehicleType::Bike, plate)),
            "car" => Ok(Vehicle::new(VehicleType::Car, plate)),
            "truck" => Ok(Vehicle::new(VehicleType::Truck, plate)),
            _ => Err(ParkError::UnknownVehicleType(tag.to_owned())),
        }
    }
}
