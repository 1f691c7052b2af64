//! Speed, in meters per second

use crate::length::{MILE, NAUTICAL_MILE};
use crate::time::HOUR;

pub const KMH: f64 = 1e3 / HOUR;
pub const MPH: f64 = MILE / HOUR;

/// Speed of sound in dry air at 15 °C and 1 atm
pub const MACH: f64 = 340.5;
pub const SPEED_OF_SOUND: f64 = MACH;
pub const KNOT: f64 = NAUTICAL_MILE / HOUR;
