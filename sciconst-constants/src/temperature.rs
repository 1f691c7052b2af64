//! Temperature, in kelvin

/// 0 °C expressed in kelvin
pub const ZERO_CELSIUS: f64 = 273.15;

/// Size of one Fahrenheit degree in kelvin. Only valid for differences.
pub const DEGREE_FAHRENHEIT: f64 = 1.0 / 1.8;
