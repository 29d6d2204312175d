//! Construct a ready-to-use parking lot from validated configuration.

use anyhow::{anyhow, Context};

use crate::config::LotConfig;
use crate::core::error::AppResult;
use crate::core::floor::Floor;
use crate::core::lot::ParkingLot;
use crate::core::spot::SizeClass;

/// Build a lot with its floors and spots from configuration.
///
/// # Errors
///
/// Fails if the configuration does not validate.
pub fn build_lot(cfg: &LotConfig) -> AppResult<ParkingLot> {
    cfg.validate()
        .map_err(|e| anyhow!(e))
        .context("lot config invalid")?;

    let lot = ParkingLot::new(cfg.name.clone(), cfg.location.clone(), cfg.strategy);
    for floor_cfg in &cfg.floors {
        let mut floor = Floor::new(floor_cfg.number);
        floor.add_spots(SizeClass::Small, floor_cfg.small);
        floor.add_spots(SizeClass::Medium, floor_cfg.medium);
        floor.add_spots(SizeClass::Large, floor_cfg.large);
        lot.add_floor(floor);
    }
    tracing::info!(
        lot = %cfg.name,
        floors = cfg.floors.len(),
        strategy = ?cfg.strategy,
        "lot built from config"
    );
    Ok(lot)
}
