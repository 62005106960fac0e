//! Ideal-gas pressure model
//!
//! * `ideal_gas` - P = nRT/V from particle count, temperature and volume
//! * `band` - display classification of pressure against container strength

pub mod band;
pub mod ideal_gas;

pub use band::{GasLawReadout, PressureBand};
pub use ideal_gas::{moles, pressure_kpa};
