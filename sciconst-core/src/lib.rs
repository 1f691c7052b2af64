//! sciconst Core - Fundamental types
//!
//! This crate provides the core types used throughout sciconst:
//! - `Constant`: a reference value with optional description, uncertainty and unit
//! - `Category`: the table group a constant belongs to
//! - `Error`: the single error type, with machine-readable codes

mod constant;
mod error;

pub use constant::{Category, Constant};
pub use error::{codes, Error, ErrorReport, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{Category, Constant, Error, ErrorReport, Result};
}
