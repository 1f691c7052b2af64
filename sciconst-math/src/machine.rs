//! IEEE-754 binary64 machine constants

/// Distance from 1.0 to the next larger `f64`
pub const EPS_F64: f64 = 2.2204460492503131e-16;
/// Smallest positive normal `f64`
pub const TINY: f64 = 2.2250738585072014e-308;
/// Largest finite `f64`
pub const HUGE: f64 = 1.7976931348623157e308;
pub const RADIX: u32 = 2;
/// Mantissa digits in base `RADIX`
pub const DIGITS: u32 = 53;
pub const MIN_EXP: i32 = -1021;
pub const MAX_EXP: i32 = 1024;
