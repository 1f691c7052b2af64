//! sciconst Constants - the constant table
//!
//! Every constant is a `pub const f64` in SI base units, grouped by
//! dimension and re-exported flat at the crate root:
//!
//! - Mathematical (golden ratio)
//! - SI prefixes (yotta .. zepto)
//! - Binary prefixes (kibi .. yobi)
//! - Physical (CODATA 2018: c, h, hbar, G, e, k, ...)
//! - Mass (kg), Angle (rad), Time (s), Length (m)
//! - Pressure (Pa), Area (m²), Volume (m³), Speed (m/s)
//! - Temperature (K), Energy (J), Power (W), Force (N)
//!
//! Derived constants are evaluated from their defining expression at compile
//! time. Aliases are the canonical constant itself, so `SPEED_OF_LIGHT` and
//! `C` have identical bits.
//!
//! For lookup by name at runtime use [`CATALOG`].

pub mod angle;
pub mod area;
pub mod energy;
pub mod force;
pub mod length;
pub mod mass;
pub mod mathematical;
pub mod physical;
pub mod power;
pub mod prefixes;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;

mod catalog;
mod registry;

pub use angle::*;
pub use area::*;
pub use energy::*;
pub use force::*;
pub use length::*;
pub use mass::*;
pub use mathematical::*;
pub use physical::*;
pub use power::*;
pub use prefixes::binary::*;
pub use prefixes::si::*;
pub use pressure::*;
pub use speed::*;
pub use temperature::*;
pub use time::*;
pub use volume::*;

pub use registry::{ConstantDef, ConstantRegistry};

use sciconst_core::Result;
use std::sync::LazyLock;

/// Global read-only catalog of every constant, keyed by name
pub static CATALOG: LazyLock<ConstantRegistry> = LazyLock::new(ConstantRegistry::standard);

impl ConstantRegistry {
    /// Build the registry holding the full constant table
    fn standard() -> Self {
        let mut registry = ConstantRegistry::new();
        catalog::register_all(&mut registry);
        tracing::debug!(
            constants = registry.len(),
            aliases = registry.alias_count(),
            "constant catalog built"
        );
        registry
    }
}

/// Look up a constant's value by name or alias
pub fn lookup(name: &str) -> Result<f64> {
    CATALOG.value(name)
}

/// Look up a constant's full catalog entry by name or alias
pub fn describe(name: &str) -> Result<&'static ConstantDef> {
    CATALOG.describe(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sciconst_core::{Category, Error};
    use std::f64::consts::PI;

    /// Every catalog name paired with the Rust constant it must match
    fn named_constants() -> Vec<(&'static str, f64)> {
        vec![
            ("golden_ratio", GOLDEN_RATIO),
            ("yotta", YOTTA), ("zetta", ZETTA), ("exa", EXA), ("peta", PETA),
            ("tera", TERA), ("giga", GIGA), ("mega", MEGA), ("kilo", KILO),
            ("hecto", HECTO), ("deka", DEKA), ("deci", DECI), ("centi", CENTI),
            ("milli", MILLI), ("micro", MICRO), ("nano", NANO), ("pico", PICO),
            ("femto", FEMTO), ("atto", ATTO), ("zepto", ZEPTO),
            ("kibi", KIBI), ("mebi", MEBI), ("gibi", GIBI), ("tebi", TEBI),
            ("pebi", PEBI), ("exbi", EXBI), ("zebi", ZEBI), ("yobi", YOBI),
            ("c", C), ("mu0", MU0), ("epsilon0", EPSILON0), ("h", H), ("hbar", HBAR),
            ("g", G), ("gacc", GACC), ("e", E), ("r", R), ("alpha", ALPHA),
            ("na", NA), ("k", K), ("sigma", SIGMA), ("wien", WIEN), ("rydberg", RYDBERG),
            ("gram", GRAM), ("metric_ton", METRIC_TON), ("grain", GRAIN), ("lb", LB),
            ("blob", BLOB), ("slug", SLUG), ("oz", OZ), ("stone", STONE),
            ("long_ton", LONG_TON), ("short_ton", SHORT_TON), ("troy_ounce", TROY_OUNCE),
            ("troy_pound", TROY_POUND), ("carat", CARAT),
            ("m_e", M_E), ("m_p", M_P), ("m_n", M_N), ("m_u", M_U),
            ("degree", DEGREE), ("arcmin", ARCMIN), ("arcsec", ARCSEC),
            ("minute", MINUTE), ("hour", HOUR), ("day", DAY), ("week", WEEK),
            ("year", YEAR), ("julian_year", JULIAN_YEAR),
            ("inch", INCH), ("foot", FOOT), ("yard", YARD), ("mile", MILE), ("mil", MIL),
            ("pt", PT), ("survey_foot", SURVEY_FOOT), ("survey_mile", SURVEY_MILE),
            ("nautical_mile", NAUTICAL_MILE), ("fermi", FERMI), ("angstrom", ANGSTROM),
            ("micron", MICRON), ("au", AU), ("light_year", LIGHT_YEAR), ("parsec", PARSEC),
            ("atm", ATM), ("bar", BAR), ("torr", TORR), ("psi", PSI),
            ("hectare", HECTARE), ("acre", ACRE),
            ("litre", LITRE), ("gallon", GALLON), ("pint", PINT),
            ("fluid_ounce", FLUID_OUNCE), ("bbl", BBL), ("gallon_imp", GALLON_IMP),
            ("fluid_ounce_imp", FLUID_OUNCE_IMP),
            ("kmh", KMH), ("mph", MPH), ("mach", MACH), ("knot", KNOT),
            ("zero_celsius", ZERO_CELSIUS), ("degree_fahrenheit", DEGREE_FAHRENHEIT),
            ("ev", EV), ("calorie", CALORIE), ("calorie_it", CALORIE_IT), ("erg", ERG),
            ("btu_th", BTU_TH), ("btu", BTU), ("ton_tnt", TON_TNT),
            ("hp", HP),
            ("dyn", DYN), ("lbf", LBF), ("kgf", KGF),
        ]
    }

    /// Alias name, Rust alias constant, canonical Rust constant
    fn alias_pairs() -> Vec<(&'static str, f64, f64)> {
        vec![
            ("speed_of_light", SPEED_OF_LIGHT, C),
            ("planck", PLANCK, H),
            ("gravitational_constant", GRAVITATIONAL_CONSTANT, G),
            ("elementary_charge", ELEMENTARY_CHARGE, E),
            ("gas_constant", GAS_CONSTANT, R),
            ("fine_structure", FINE_STRUCTURE, ALPHA),
            ("avogadro", AVOGADRO, NA),
            ("boltzmann", BOLTZMANN, K),
            ("stefan_boltzmann", STEFAN_BOLTZMANN, SIGMA),
            ("pound", POUND, LB),
            ("slinch", SLINCH, BLOB),
            ("ounce", OUNCE, OZ),
            ("point", POINT, PT),
            ("astronomical_unit", ASTRONOMICAL_UNIT, AU),
            ("atmosphere", ATMOSPHERE, ATM),
            ("mm_hg", MM_HG, TORR),
            ("liter", LITER, LITRE),
            ("gallon_us", GALLON_US, GALLON),
            ("fluid_ounce_us", FLUID_OUNCE_US, FLUID_OUNCE),
            ("barrel", BARREL, BBL),
            ("speed_of_sound", SPEED_OF_SOUND, MACH),
            ("electron_volt", ELECTRON_VOLT, EV),
            ("calorie_th", CALORIE_TH, CALORIE),
            ("btu_it", BTU_IT, BTU),
            ("horsepower", HORSEPOWER, HP),
            ("dyne", DYNE, DYN),
            ("pound_force", POUND_FORCE, LBF),
            ("kilogram_force", KILOGRAM_FORCE, KGF),
        ]
    }

    #[test]
    fn test_catalog_matches_constants() {
        let named = named_constants();
        for (name, value) in &named {
            let found = CATALOG.value(name).unwrap_or_else(|e| panic!("{}: {}", name, e));
            assert_eq!(found.to_bits(), value.to_bits(), "catalog value for {}", name);
        }
        assert_eq!(CATALOG.len(), named.len());
    }

    #[test]
    fn test_aliases_bit_identical() {
        for (alias, alias_value, canonical) in alias_pairs() {
            assert_eq!(alias_value.to_bits(), canonical.to_bits(), "alias {}", alias);
            let found = CATALOG.value(alias).unwrap();
            assert_eq!(found.to_bits(), canonical.to_bits(), "catalog alias {}", alias);
        }
    }

    #[test]
    fn test_lookup_name_styles() {
        for name in ["SpeedOfLight", "SPEED_OF_LIGHT", "speed_of_light", "C", "c"] {
            assert_eq!(lookup(name).unwrap().to_bits(), C.to_bits(), "{}", name);
        }
        assert_eq!(lookup("GallonUS").unwrap(), GALLON_US);
        assert_eq!(lookup("Mu0").unwrap(), MU0);
        assert_eq!(lookup("Me").unwrap(), M_E);
        assert_eq!(lookup("eV").unwrap(), EV);
        assert_eq!(lookup("MmHg").unwrap(), TORR);
    }

    #[test]
    fn test_unknown_constant() {
        let err = lookup("speed_of_lite").unwrap_err();
        assert_eq!(err.code(), sciconst_core::codes::UNKNOWN_CONSTANT);
        match err {
            Error::UnknownConstant { similar, .. } => {
                assert!(similar.len() <= 5);
                assert_eq!(similar.first().map(String::as_str), Some("speed_of_light"));
            }
            other => panic!("expected UnknownConstant, got {:?}", other),
        }
    }

    #[test]
    fn test_describe_metadata() {
        let g = describe("GravitationalConstant").unwrap();
        assert_eq!(g.name, "g");
        assert_eq!(g.category, Category::Physical);
        assert_eq!(g.constant.unit.as_deref(), Some("m^3 kg^-1 s^-2"));
        assert!(!g.constant.is_exact());

        let c = describe("c").unwrap();
        assert!(c.constant.is_exact());
        assert!(c.constant.description.is_some());

        let mile = describe("mile").unwrap();
        assert_eq!(mile.constant.unit.as_deref(), Some("m"));
    }

    #[test]
    fn test_every_entry_described() {
        for def in CATALOG.iter() {
            assert!(def.constant.description.is_some(), "{} has no description", def.name);
        }
    }

    #[test]
    fn test_every_category_populated() {
        for cat in Category::ALL {
            assert!(!CATALOG.by_category(cat).is_empty(), "{} is empty", cat);
        }
    }

    #[test]
    fn test_derived_constants() {
        assert_eq!(HBAR, PLANCK / (2.0 * PI));
        assert_eq!(LIGHT_YEAR, JULIAN_YEAR * SPEED_OF_LIGHT);
        assert_eq!(LBF, POUND * GACC);
        assert_eq!(PARSEC, AU / ARCSEC);
        assert_eq!(TORR, ATM / 760.0);
        assert_eq!(SLUG, BLOB / 12.0);
    }

    #[test]
    fn test_reference_values() {
        assert_relative_eq!(POUND, 0.45359237, max_relative = 1e-15);
        assert_relative_eq!(FOOT, 0.3048, max_relative = 1e-15);
        assert_relative_eq!(MILE, 1609.344, max_relative = 1e-15);
        assert_relative_eq!(TORR, 133.32236842105263, max_relative = 1e-15);
        assert_relative_eq!(LIGHT_YEAR, 9.4607304725808e15, max_relative = 1e-15);
        assert_relative_eq!(PARSEC, 3.0856775814913674e16, max_relative = 1e-12);
        assert_relative_eq!(HBAR, 1.0545718176461565e-34, max_relative = 1e-15);
        assert_relative_eq!(GOLDEN_RATIO, (1.0 + 5f64.sqrt()) / 2.0, max_relative = 1e-15);
    }

    #[test]
    fn test_binary_prefixes_are_powers_of_two() {
        let prefixes = [KIBI, MEBI, GIBI, TEBI, PEBI, EXBI, ZEBI, YOBI];
        for (i, p) in prefixes.iter().enumerate() {
            assert_eq!(*p, 2f64.powi(10 * (i as i32 + 1)));
        }
    }

    #[test]
    fn test_to_json_round_trip() {
        let json = CATALOG.to_json().unwrap();
        let parsed: Vec<ConstantDef> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), CATALOG.len());
        let c = parsed.iter().find(|d| d.name == "c").unwrap();
        assert_eq!(c.value(), C);
    }
}
