//! Area, in square meters

use crate::length::FOOT;

pub const HECTARE: f64 = 1e4;
pub const ACRE: f64 = 43560.0 * FOOT * FOOT;
