//! Constant record and table categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named reference value with optional metadata
///
/// Only `value` is required. Exact SI-defined values carry an uncertainty of
/// `Some(0.0)`; `None` means the uncertainty is not recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub value: f64,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// Standard uncertainty, in the same unit as `value`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub uncertainty: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub unit: Option<String>,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            description: None,
            uncertainty: None,
            unit: None,
        }
    }

    /// Builder: add description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: add unit label
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Builder: add standard uncertainty
    pub fn with_uncertainty(mut self, uncertainty: f64) -> Self {
        self.uncertainty = Some(uncertainty);
        self
    }

    /// Builder: mark as exact by definition
    pub fn exact(self) -> Self {
        self.with_uncertainty(0.0)
    }

    pub fn is_exact(&self) -> bool {
        self.uncertainty == Some(0.0)
    }

    /// Uncertainty divided by |value|, when both are known and value is non-zero
    pub fn relative_uncertainty(&self) -> Option<f64> {
        match self.uncertainty {
            Some(u) if self.value != 0.0 => Some(u / self.value.abs()),
            _ => None,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.value)?;
        if let Some(ref unit) = self.unit {
            write!(f, " {}", unit)?;
        }
        Ok(())
    }
}

/// Group a constant belongs to in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mathematical,
    SiPrefix,
    BinaryPrefix,
    Physical,
    Mass,
    Angle,
    Time,
    Length,
    Pressure,
    Area,
    Volume,
    Speed,
    Temperature,
    Energy,
    Power,
    Force,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Mathematical,
        Category::SiPrefix,
        Category::BinaryPrefix,
        Category::Physical,
        Category::Mass,
        Category::Angle,
        Category::Time,
        Category::Length,
        Category::Pressure,
        Category::Area,
        Category::Volume,
        Category::Speed,
        Category::Temperature,
        Category::Energy,
        Category::Power,
        Category::Force,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Mathematical => "mathematical",
            Category::SiPrefix => "si_prefix",
            Category::BinaryPrefix => "binary_prefix",
            Category::Physical => "physical",
            Category::Mass => "mass",
            Category::Angle => "angle",
            Category::Time => "time",
            Category::Length => "length",
            Category::Pressure => "pressure",
            Category::Area => "area",
            Category::Volume => "volume",
            Category::Speed => "speed",
            Category::Temperature => "temperature",
            Category::Energy => "energy",
            Category::Power => "power",
            Category::Force => "force",
        }
    }

    /// SI unit shared by every constant in the category.
    ///
    /// `None` for dimensionless groups and for physical constants, which
    /// each carry their own unit.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Category::Mathematical
            | Category::SiPrefix
            | Category::BinaryPrefix
            | Category::Physical => None,
            Category::Mass => Some("kg"),
            Category::Angle => Some("rad"),
            Category::Time => Some("s"),
            Category::Length => Some("m"),
            Category::Pressure => Some("Pa"),
            Category::Area => Some("m^2"),
            Category::Volume => Some("m^3"),
            Category::Speed => Some("m/s"),
            Category::Temperature => Some("K"),
            Category::Energy => Some("J"),
            Category::Power => Some("W"),
            Category::Force => Some("N"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
