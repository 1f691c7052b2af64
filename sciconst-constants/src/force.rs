//! Force, in newtons

use crate::mass::POUND;
use crate::physical::GACC;

pub const DYN: f64 = 1e-5;
pub const DYNE: f64 = DYN;
pub const LBF: f64 = POUND * GACC;
pub const POUND_FORCE: f64 = LBF;

/// Weight of one kilogram under standard gravity
pub const KGF: f64 = GACC;
pub const KILOGRAM_FORCE: f64 = KGF;
