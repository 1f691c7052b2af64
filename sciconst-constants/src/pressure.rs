//! Pressure, in pascals

use crate::length::INCH;
use crate::mass::POUND;
use crate::physical::GACC;

/// Standard atmosphere
pub const ATM: f64 = 101325.0;
pub const ATMOSPHERE: f64 = ATM;
pub const BAR: f64 = 1e5;
pub const TORR: f64 = ATM / 760.0;
pub const MM_HG: f64 = TORR;
pub const PSI: f64 = POUND * GACC / (INCH * INCH);
