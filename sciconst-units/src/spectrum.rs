//! Wavelength ↔ frequency for electromagnetic radiation in vacuum
//!
//! Inputs are not validated. A zero input gives an infinite result, negative
//! inputs keep their sign and NaN propagates, as plain `f64` division does.

use sciconst_constants::SPEED_OF_LIGHT;

/// Frequency in Hz of light with the given wavelength in meters
pub fn frequency_from_wavelength(wavelength: f64) -> f64 {
    SPEED_OF_LIGHT / wavelength
}

/// Wavelength in meters of light with the given frequency in Hz
pub fn wavelength_from_frequency(frequency: f64) -> f64 {
    SPEED_OF_LIGHT / frequency
}
