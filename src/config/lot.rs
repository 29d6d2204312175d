//! Lot and floor configuration structures.

use serde::{Deserialize, Serialize};

use crate::core::strategy::PlacementStrategy;

/// Spot counts for one floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorConfig {
    /// Floor number, unique within the lot.
    pub number: u32,
    /// Count of Small spots.
    #[serde(default)]
    pub small: usize,
    /// Count of Medium spots.
    #[serde(default)]
    pub medium: usize,
    /// Count of Large spots.
    #[serde(default)]
    pub large: usize,
}

impl FloorConfig {
    /// Total spots on this floor.
    pub const fn total(&self) -> usize {
        self.small + self.medium + self.large
    }
}

/// Root lot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotConfig {
    /// Display name of the lot.
    pub name: String,
    /// Physical location label.
    pub location: String,
    /// Placement strategy selection.
    pub strategy: PlacementStrategy,
    /// Floors in placement-priority order.
    pub floors: Vec<FloorConfig>,
}

impl LotConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("lot name must not be empty".into());
        }
        if self.floors.is_empty() {
            return Err("at least one floor must be defined".into());
        }
        for (idx, floor) in self.floors.iter().enumerate() {
            if self
                .floors
                .iter()
                .skip(idx + 1)
                .any(|other| other.number == floor.number)
            {
                return Err(format!("duplicate floor number {}", floor.number));
            }
        }
        if self.floors.iter().all(|f| f.total() == 0) {
            return Err("lot must have at least one spot".into());
        }
        Ok(())
    }

    /// Parse lot configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
