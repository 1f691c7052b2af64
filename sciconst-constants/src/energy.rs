//! Energy, in joules

use crate::mass::{GRAM, POUND};
use crate::physical::ELEMENTARY_CHARGE;
use crate::temperature::DEGREE_FAHRENHEIT;

/// Elementary charge times one volt
pub const EV: f64 = ELEMENTARY_CHARGE;
pub const ELECTRON_VOLT: f64 = EV;

/// Thermochemical calorie
pub const CALORIE: f64 = 4.184;
pub const CALORIE_TH: f64 = CALORIE;
/// International Steam Table calorie
pub const CALORIE_IT: f64 = 4.1868;
pub const ERG: f64 = 1e-7;
pub const BTU_TH: f64 = POUND * DEGREE_FAHRENHEIT * CALORIE_TH / GRAM;
pub const BTU: f64 = POUND * DEGREE_FAHRENHEIT * CALORIE_IT / GRAM;
pub const BTU_IT: f64 = BTU;
pub const TON_TNT: f64 = 1e9 * CALORIE_TH;
