//! Physical constants (CODATA 2018), SI units

use std::f64::consts::PI;

/// Speed of light in vacuum, m/s (exact)
pub const C: f64 = 299792458.0;
pub const SPEED_OF_LIGHT: f64 = C;

/// Vacuum magnetic permeability, N/A^2
pub const MU0: f64 = 1.25663706212e-6;

/// Vacuum electric permittivity, F/m
pub const EPSILON0: f64 = 8.8541878128e-12;

/// Planck constant, J s (exact)
pub const H: f64 = 6.62607015e-34;
pub const PLANCK: f64 = H;

/// Reduced Planck constant, J s
pub const HBAR: f64 = H / (2.0 * PI);

/// Newtonian constant of gravitation, m^3 kg^-1 s^-2
pub const G: f64 = 6.67430e-11;
pub const GRAVITATIONAL_CONSTANT: f64 = G;

/// Standard acceleration of gravity, m/s^2
pub const GACC: f64 = 9.80665;

/// Elementary charge, C (exact)
pub const E: f64 = 1.602176634e-19;
pub const ELEMENTARY_CHARGE: f64 = E;

/// Molar gas constant, J mol^-1 K^-1
pub const R: f64 = 8.314462618;
pub const GAS_CONSTANT: f64 = R;

/// Fine-structure constant, dimensionless
pub const ALPHA: f64 = 7.2973525693e-3;
pub const FINE_STRUCTURE: f64 = ALPHA;

/// Avogadro constant, mol^-1 (exact)
pub const NA: f64 = 6.02214076e23;
pub const AVOGADRO: f64 = NA;

/// Boltzmann constant, J/K (exact)
pub const K: f64 = 1.380649e-23;
pub const BOLTZMANN: f64 = K;

/// Stefan-Boltzmann constant, W m^-2 K^-4
pub const SIGMA: f64 = 5.670374419e-8;
pub const STEFAN_BOLTZMANN: f64 = SIGMA;

/// Wien wavelength displacement law constant, m K
pub const WIEN: f64 = 2.897771955e-3;

/// Rydberg constant, m^-1
pub const RYDBERG: f64 = 10973731.568160;
