//! Structured errors
//!
//! Nothing in sciconst aborts the process. Every failure is a value returned
//! to the caller, with a machine-readable code and a suggestion for fixing it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_SCALE: &str = "INVALID_SCALE";
    pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
    pub const NEGATIVE_EXPONENT: &str = "NEGATIVE_EXPONENT";
    pub const UNKNOWN_CONSTANT: &str = "UNKNOWN_CONSTANT";
}

/// Error type for every fallible sciconst operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Temperature scale tag outside {Kelvin, Celsius, Fahrenheit}
    #[error("Invalid temperature scale tag: {0}")]
    InvalidScale(i32),

    /// A min/max helper was called without values
    #[error("{0}() requires at least one value")]
    EmptyInput(&'static str),

    #[error("Negative exponent: {0}")]
    NegativeExponent(i64),

    /// Catalog lookup miss; `similar` holds the closest known names
    #[error("Unknown constant: {name}")]
    UnknownConstant { name: String, similar: Vec<String> },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Machine-readable code, one of [`codes`]
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidScale(_) => codes::INVALID_SCALE,
            Error::EmptyInput(_) => codes::EMPTY_INPUT,
            Error::NegativeExponent(_) => codes::NEGATIVE_EXPONENT,
            Error::UnknownConstant { .. } => codes::UNKNOWN_CONSTANT,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Error::InvalidScale(_) => {
                Some("Use 0 (Kelvin), 1 (Celsius) or 2 (Fahrenheit)".to_string())
            }
            Error::EmptyInput(func) => Some(format!("Pass at least one value to {}()", func)),
            Error::NegativeExponent(_) => Some("Use a non-negative integer exponent".to_string()),
            Error::UnknownConstant { similar, .. } if !similar.is_empty() => {
                Some(format!("Similar: {}", similar.join(", ")))
            }
            Error::UnknownConstant { .. } => {
                Some("Use catalog().names() to list available constants".to_string())
            }
        }
    }

    /// Flatten into a serializable report
    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

/// Serializable view of an [`Error`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suggestion: Option<String>,
}

impl From<&Error> for ErrorReport {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion(),
        }
    }
}

impl From<Error> for ErrorReport {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
