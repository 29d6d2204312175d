//! Builders to construct a parking lot from configuration.

pub mod lot_builder;

pub use lot_builder::build_lot;
