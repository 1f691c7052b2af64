//! Temperature scale conversion
//!
//! Every conversion goes through kelvin: the input is normalized to kelvin,
//! then converted out to the target scale. Three scales need three formulas
//! each way instead of six pairwise ones.

use sciconst_constants::ZERO_CELSIUS;
use sciconst_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of supported temperature scales
///
/// The discriminant is the integer tag accepted by
/// [`convert_temperature`] and [`TemperatureScale::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum TemperatureScale {
    Kelvin = 0,
    Celsius = 1,
    Fahrenheit = 2,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Kelvin,
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
    ];

    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Whether `tag` names one of the three scales
    pub fn is_valid_tag(tag: i32) -> bool {
        Self::try_from(tag).is_ok()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureScale::Kelvin => "K",
            TemperatureScale::Celsius => "°C",
            TemperatureScale::Fahrenheit => "°F",
        }
    }

    /// Convert a value on this scale to kelvin
    pub fn to_kelvin(self, value: f64) -> f64 {
        match self {
            TemperatureScale::Kelvin => value,
            TemperatureScale::Celsius => value + ZERO_CELSIUS,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + ZERO_CELSIUS,
        }
    }

    /// Convert a kelvin value to this scale
    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            TemperatureScale::Kelvin => kelvin,
            TemperatureScale::Celsius => kelvin - ZERO_CELSIUS,
            TemperatureScale::Fahrenheit => (kelvin - ZERO_CELSIUS) * 9.0 / 5.0 + 32.0,
        }
    }

    /// Convert a value on this scale to `to`
    pub fn convert(self, value: f64, to: TemperatureScale) -> f64 {
        to.from_kelvin(self.to_kelvin(value))
    }
}

impl TryFrom<i32> for TemperatureScale {
    type Error = Error;

    fn try_from(tag: i32) -> Result<Self> {
        match tag {
            0 => Ok(TemperatureScale::Kelvin),
            1 => Ok(TemperatureScale::Celsius),
            2 => Ok(TemperatureScale::Fahrenheit),
            other => Err(Error::InvalidScale(other)),
        }
    }
}

impl From<TemperatureScale> for i32 {
    fn from(scale: TemperatureScale) -> Self {
        scale.tag()
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemperatureScale::Kelvin => "Kelvin",
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
        };
        f.write_str(name)
    }
}

/// Anything that names a temperature scale: the enum itself or a raw tag
pub trait IntoScale {
    fn into_scale(self) -> Result<TemperatureScale>;
}

impl IntoScale for TemperatureScale {
    fn into_scale(self) -> Result<TemperatureScale> {
        Ok(self)
    }
}

impl IntoScale for i32 {
    fn into_scale(self) -> Result<TemperatureScale> {
        TemperatureScale::try_from(self)
    }
}

/// Convert `value` from one temperature scale to another.
///
/// Both scales are validated before any arithmetic; an unknown integer tag
/// returns [`Error::InvalidScale`].
pub fn convert_temperature(value: f64, from: impl IntoScale, to: impl IntoScale) -> Result<f64> {
    let from = checked_scale(from)?;
    let to = checked_scale(to)?;
    Ok(from.convert(value, to))
}

fn checked_scale(scale: impl IntoScale) -> Result<TemperatureScale> {
    scale.into_scale().map_err(|err| {
        tracing::warn!(%err, "temperature conversion rejected");
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use TemperatureScale::*;

    #[test]
    fn test_freezing_point() {
        assert_eq!(convert_temperature(0.0, Celsius, Kelvin).unwrap(), 273.15);
        assert_abs_diff_eq!(convert_temperature(32.0, Fahrenheit, Celsius).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(convert_temperature(273.15, Kelvin, Fahrenheit).unwrap(), 32.0, epsilon = 1e-12);
    }

    #[test]
    fn test_boiling_point() {
        assert_abs_diff_eq!(convert_temperature(212.0, Fahrenheit, Kelvin).unwrap(), 373.15, epsilon = 1e-10);
        assert_abs_diff_eq!(convert_temperature(100.0, Celsius, Fahrenheit).unwrap(), 212.0, epsilon = 1e-10);
    }

    #[test]
    fn test_minus_forty_agrees() {
        assert_abs_diff_eq!(convert_temperature(-40.0, Celsius, Fahrenheit).unwrap(), -40.0, epsilon = 1e-10);
        assert_abs_diff_eq!(convert_temperature(-40.0, Fahrenheit, Celsius).unwrap(), -40.0, epsilon = 1e-10);
    }

    #[test]
    fn test_absolute_zero() {
        assert_abs_diff_eq!(convert_temperature(0.0, Kelvin, Celsius).unwrap(), -273.15, epsilon = 1e-12);
        assert_abs_diff_eq!(convert_temperature(0.0, Kelvin, Fahrenheit).unwrap(), -459.67, epsilon = 1e-10);
    }

    #[test]
    fn test_kelvin_identity_exact() {
        for v in [0.0, 1e-300, 273.15, -5.5, 1e300] {
            assert_eq!(convert_temperature(v, Kelvin, Kelvin).unwrap(), v);
        }
    }

    #[test]
    fn test_raw_tags() {
        assert_eq!(convert_temperature(0.0, 1, 0).unwrap(), 273.15);
        assert_eq!(
            convert_temperature(10.0, Celsius, 1).unwrap(),
            convert_temperature(10.0, 1, Celsius).unwrap()
        );
    }

    #[test]
    fn test_invalid_tags() {
        assert_eq!(convert_temperature(1.0, 3, 0), Err(Error::InvalidScale(3)));
        assert_eq!(convert_temperature(1.0, 0, -1), Err(Error::InvalidScale(-1)));
        assert_eq!(convert_temperature(1.0, Kelvin, i32::MAX), Err(Error::InvalidScale(i32::MAX)));
        // the source tag is checked first
        assert_eq!(convert_temperature(1.0, 7, 9), Err(Error::InvalidScale(7)));
    }

    #[test]
    fn test_is_valid_tag() {
        assert!(TemperatureScale::is_valid_tag(0));
        assert!(TemperatureScale::is_valid_tag(1));
        assert!(TemperatureScale::is_valid_tag(2));
        assert!(!TemperatureScale::is_valid_tag(3));
        assert!(!TemperatureScale::is_valid_tag(-1));
    }

    #[test]
    fn test_tags_round_trip() {
        for scale in TemperatureScale::ALL {
            assert_eq!(TemperatureScale::try_from(scale.tag()), Ok(scale));
            assert_eq!(i32::from(scale), scale.tag());
        }
    }

    #[test]
    fn test_display_and_symbol() {
        assert_eq!(Celsius.to_string(), "Celsius");
        assert_eq!(Fahrenheit.symbol(), "°F");
        assert_eq!(Kelvin.symbol(), "K");
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Fahrenheit).unwrap(), "\"fahrenheit\"");
        let scale: TemperatureScale = serde_json::from_str("\"kelvin\"").unwrap();
        assert_eq!(scale, Kelvin);
    }

    proptest! {
        #[test]
        fn prop_round_trip(v in -1e6..1e6f64, a in 0..3i32, b in 0..3i32) {
            let there = convert_temperature(v, a, b).unwrap();
            let back = convert_temperature(there, b, a).unwrap();
            prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0), "{} -> {} -> {}", v, there, back);
        }

        #[test]
        fn prop_same_scale_identity(v in -1e6..1e6f64, s in 0..3i32) {
            let same = convert_temperature(v, s, s).unwrap();
            prop_assert!((same - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_out_of_range_rejected(tag in prop_oneof![i32::MIN..0i32, 3..i32::MAX]) {
            prop_assert_eq!(convert_temperature(0.0, tag, 0), Err(Error::InvalidScale(tag)));
        }
    }
}
