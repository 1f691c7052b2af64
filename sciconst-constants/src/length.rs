//! Length, in meters

use crate::angle::ARCSEC;
use crate::physical::C;
use crate::time::JULIAN_YEAR;

pub const INCH: f64 = 0.0254;
pub const FOOT: f64 = 12.0 * INCH;
pub const YARD: f64 = 3.0 * FOOT;
pub const MILE: f64 = 1760.0 * YARD;
pub const MIL: f64 = INCH / 1000.0;

/// Typographic point
pub const PT: f64 = INCH / 72.0;
pub const POINT: f64 = PT;

/// US survey foot
pub const SURVEY_FOOT: f64 = 1200.0 / 3937.0;
pub const SURVEY_MILE: f64 = 5280.0 * SURVEY_FOOT;
pub const NAUTICAL_MILE: f64 = 1852.0;
pub const FERMI: f64 = 1e-15;
pub const ANGSTROM: f64 = 1e-10;
pub const MICRON: f64 = 1e-6;

/// Astronomical unit (IAU 2012, exact)
pub const AU: f64 = 149597870700.0;
pub const ASTRONOMICAL_UNIT: f64 = AU;
pub const LIGHT_YEAR: f64 = JULIAN_YEAR * C;
pub const PARSEC: f64 = AU / ARCSEC;
