//! Configuration models for lots, floors, and strategy selection.

pub mod lot;

pub use lot::{FloorConfig, LotConfig};
