//! Mathematical constants

/// Golden ratio φ = (1 + √5) / 2
pub const GOLDEN_RATIO: f64 = 1.618033988749895;
