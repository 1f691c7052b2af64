//! sciconst - physical, mathematical and unit-conversion constants
//!
//! A flat namespace of `f64` constants in SI base units plus a few pure
//! converters:
//!
//! ```text
//! use sciconst::{convert_temperature, TemperatureScale, SPEED_OF_LIGHT};
//!
//! let boiling = convert_temperature(212.0, TemperatureScale::Fahrenheit, TemperatureScale::Kelvin)?;
//! let c = sciconst::lookup("SpeedOfLight")?;
//! assert_eq!(c, SPEED_OF_LIGHT);
//! ```

pub use sciconst_constants::*;
pub use sciconst_core::{codes, Category, Constant, Error, ErrorReport, Result};
pub use sciconst_math::machine;
pub use sciconst_math::{abs_int, max_f64, max_int, min_f64, min_int, pow_int};
pub use sciconst_units::{
    convert_temperature, frequency_from_wavelength, wavelength_from_frequency, IntoScale,
    TemperatureScale,
};

/// The global read-only constant catalog
pub fn catalog() -> &'static ConstantRegistry {
    &CATALOG
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        catalog, convert_temperature, describe, frequency_from_wavelength, lookup,
        wavelength_from_frequency, Category, Constant, ConstantDef, Error, Result,
        TemperatureScale,
    };
}
