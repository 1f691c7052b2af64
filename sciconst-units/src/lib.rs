//! sciconst Units - pure conversion functions
//!
//! - Temperature scale conversion between Kelvin, Celsius and Fahrenheit
//! - Wavelength ↔ frequency conversion through the speed of light
//!
//! No unit algebra and no unit-string parsing: scales are a closed enum and
//! every conversion is a plain function of `f64`.

mod spectrum;
mod temperature;

pub use spectrum::{frequency_from_wavelength, wavelength_from_frequency};
pub use temperature::{convert_temperature, IntoScale, TemperatureScale};
