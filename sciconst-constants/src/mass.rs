//! Mass, in kilograms

use crate::physical::GACC;

pub const GRAM: f64 = 1e-3;
pub const METRIC_TON: f64 = 1e3;
pub const GRAIN: f64 = 64.79891e-6;

/// Avoirdupois pound
pub const LB: f64 = 7000.0 * GRAIN;
pub const POUND: f64 = LB;

/// lbf s^2 / in
pub const BLOB: f64 = POUND * GACC / 0.0254;
pub const SLINCH: f64 = BLOB;

/// lbf s^2 / ft
pub const SLUG: f64 = BLOB / 12.0;

pub const OZ: f64 = POUND / 16.0;
pub const OUNCE: f64 = OZ;
pub const STONE: f64 = 14.0 * POUND;
pub const LONG_TON: f64 = 2240.0 * POUND;
pub const SHORT_TON: f64 = 2000.0 * POUND;

// troy units are for metals and gems only
pub const TROY_OUNCE: f64 = 480.0 * GRAIN;
pub const TROY_POUND: f64 = 12.0 * TROY_OUNCE;
pub const CARAT: f64 = 200e-6;

/// Electron mass
pub const M_E: f64 = 9.1093837015e-31;
/// Proton mass
pub const M_P: f64 = 1.67262192369e-27;
/// Neutron mass
pub const M_N: f64 = 1.67492749804e-27;
/// Atomic mass constant
pub const M_U: f64 = 1.66053906660e-27;
