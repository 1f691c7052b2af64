//! Small integer and float helpers
//!
//! The min/max helpers scan left to right and replace the running value only
//! on a strict comparison, so ties keep the first occurrence and a NaN is
//! returned only when it comes first.

use sciconst_core::{Error, Result};

/// Absolute value. `i64::MIN` wraps to itself.
pub fn abs_int(a: i64) -> i64 {
    a.wrapping_abs()
}

/// Require non-empty input
fn first<T: Copy>(values: &[T], func: &'static str) -> Result<T> {
    values.first().copied().ok_or(Error::EmptyInput(func))
}

pub fn max_f64(values: &[f64]) -> Result<f64> {
    let init = first(values, "max_f64")?;
    Ok(values.iter().fold(init, |max, &v| if v > max { v } else { max }))
}

pub fn min_f64(values: &[f64]) -> Result<f64> {
    let init = first(values, "min_f64")?;
    Ok(values.iter().fold(init, |min, &v| if v < min { v } else { min }))
}

pub fn max_int(values: &[i64]) -> Result<i64> {
    let init = first(values, "max_int")?;
    Ok(values.iter().fold(init, |max, &v| max.max(v)))
}

pub fn min_int(values: &[i64]) -> Result<i64> {
    let init = first(values, "min_int")?;
    Ok(values.iter().fold(init, |min, &v| min.min(v)))
}

/// `base` raised to `exp` by repeated multiplication.
///
/// `exp == 0` gives 1 for every base, including 0. Overflow wraps; negative
/// exponents are rejected.
pub fn pow_int(base: i64, exp: i64) -> Result<i64> {
    if exp < 0 {
        return Err(Error::NegativeExponent(exp));
    }
    let mut result: i64 = 1;
    for _ in 0..exp {
        result = result.wrapping_mul(base);
    }
    Ok(result)
}
