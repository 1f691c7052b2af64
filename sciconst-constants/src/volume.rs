//! Volume, in cubic meters

use crate::length::INCH;

pub const LITRE: f64 = 1e-3;
pub const LITER: f64 = LITRE;

/// US liquid gallon
pub const GALLON: f64 = 231.0 * INCH * INCH * INCH;
pub const GALLON_US: f64 = GALLON;
pub const PINT: f64 = GALLON_US / 8.0;
pub const FLUID_OUNCE: f64 = GALLON_US / 128.0;
pub const FLUID_OUNCE_US: f64 = FLUID_OUNCE;

/// Oil barrel
pub const BBL: f64 = 42.0 * GALLON_US;
pub const BARREL: f64 = BBL;

/// Imperial (UK) gallon
pub const GALLON_IMP: f64 = 4.54609e-3;
pub const FLUID_OUNCE_IMP: f64 = GALLON_IMP / 160.0;
