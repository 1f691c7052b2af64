//! sciconst Math - numeric helpers
//!
//! Integer absolute value, min/max over a slice, integer power, and the
//! binary64 machine constants. Helpers that need at least one value return
//! [`sciconst_core::Error::EmptyInput`] instead of reading past an empty slice.

mod helpers;
pub mod machine;

pub use helpers::{abs_int, max_f64, max_int, min_f64, min_int, pow_int};
