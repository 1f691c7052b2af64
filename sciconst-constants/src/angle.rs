//! Angle, in radians

use std::f64::consts::PI;

pub const DEGREE: f64 = PI / 180.0;
pub const ARCMIN: f64 = DEGREE / 60.0;
pub const ARCSEC: f64 = ARCMIN / 60.0;
