//! Time, in seconds

pub const MINUTE: f64 = 60.0;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;
pub const WEEK: f64 = 7.0 * DAY;
pub const YEAR: f64 = 365.0 * DAY;
pub const JULIAN_YEAR: f64 = 365.25 * DAY;
