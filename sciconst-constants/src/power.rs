//! Power, in watts

use crate::length::FOOT;
use crate::mass::POUND;
use crate::physical::GACC;

/// Mechanical (imperial) horsepower
pub const HP: f64 = 550.0 * FOOT * POUND * GACC;
pub const HORSEPOWER: f64 = HP;
