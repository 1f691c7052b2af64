//! Catalog population, one function per table group

use crate::registry::ConstantRegistry;
use crate::*;
use sciconst_core::{Category, Constant};

fn def(value: f64, description: &str) -> Constant {
    Constant::new(value).with_description(description)
}

pub(crate) fn register_all(reg: &mut ConstantRegistry) {
    register_mathematical(reg);
    register_si_prefixes(reg);
    register_binary_prefixes(reg);
    register_physical(reg);
    register_mass(reg);
    register_angle(reg);
    register_time(reg);
    register_length(reg);
    register_pressure(reg);
    register_area(reg);
    register_volume(reg);
    register_speed(reg);
    register_temperature(reg);
    register_energy(reg);
    register_power(reg);
    register_force(reg);
}

fn register_mathematical(reg: &mut ConstantRegistry) {
    reg.register(
        "golden_ratio",
        Category::Mathematical,
        def(GOLDEN_RATIO, "golden ratio (1 + sqrt(5)) / 2"),
    );
    reg.alias("phi", "golden_ratio");
}

fn register_si_prefixes(reg: &mut ConstantRegistry) {
    let prefixes = [
        ("yotta", YOTTA, "10^24"),
        ("zetta", ZETTA, "10^21"),
        ("exa", EXA, "10^18"),
        ("peta", PETA, "10^15"),
        ("tera", TERA, "10^12"),
        ("giga", GIGA, "10^9"),
        ("mega", MEGA, "10^6"),
        ("kilo", KILO, "10^3"),
        ("hecto", HECTO, "10^2"),
        ("deka", DEKA, "10^1"),
        ("deci", DECI, "10^-1"),
        ("centi", CENTI, "10^-2"),
        ("milli", MILLI, "10^-3"),
        ("micro", MICRO, "10^-6"),
        ("nano", NANO, "10^-9"),
        ("pico", PICO, "10^-12"),
        ("femto", FEMTO, "10^-15"),
        ("atto", ATTO, "10^-18"),
        ("zepto", ZEPTO, "10^-21"),
    ];
    for (name, value, power) in prefixes {
        reg.register(
            name,
            Category::SiPrefix,
            def(value, &format!("SI prefix {}", power)).exact(),
        );
    }
}

fn register_binary_prefixes(reg: &mut ConstantRegistry) {
    let prefixes = [
        ("kibi", KIBI, "2^10"),
        ("mebi", MEBI, "2^20"),
        ("gibi", GIBI, "2^30"),
        ("tebi", TEBI, "2^40"),
        ("pebi", PEBI, "2^50"),
        ("exbi", EXBI, "2^60"),
        ("zebi", ZEBI, "2^70"),
        ("yobi", YOBI, "2^80"),
    ];
    for (name, value, power) in prefixes {
        reg.register(
            name,
            Category::BinaryPrefix,
            def(value, &format!("binary prefix {}", power)).exact(),
        );
    }
}

fn register_physical(reg: &mut ConstantRegistry) {
    let cat = Category::Physical;
    reg.register("c", cat, def(C, "speed of light in vacuum").with_unit("m/s").exact());
    reg.register(
        "mu0",
        cat,
        def(MU0, "vacuum magnetic permeability")
            .with_unit("N A^-2")
            .with_uncertainty(0.00000000019e-6),
    );
    reg.register(
        "epsilon0",
        cat,
        def(EPSILON0, "vacuum electric permittivity")
            .with_unit("F m^-1")
            .with_uncertainty(0.0000000013e-12),
    );
    reg.register("h", cat, def(H, "Planck constant").with_unit("J s").exact());
    reg.register("hbar", cat, def(HBAR, "reduced Planck constant").with_unit("J s").exact());
    reg.register(
        "g",
        cat,
        def(G, "Newtonian constant of gravitation")
            .with_unit("m^3 kg^-1 s^-2")
            .with_uncertainty(0.00015e-11),
    );
    reg.register(
        "gacc",
        cat,
        def(GACC, "standard acceleration of gravity").with_unit("m s^-2").exact(),
    );
    reg.register("e", cat, def(E, "elementary charge").with_unit("C").exact());
    reg.register("r", cat, def(R, "molar gas constant").with_unit("J mol^-1 K^-1").exact());
    reg.register(
        "alpha",
        cat,
        def(ALPHA, "fine-structure constant").with_uncertainty(0.0000000011e-3),
    );
    reg.register("na", cat, def(NA, "Avogadro constant").with_unit("mol^-1").exact());
    reg.register("k", cat, def(K, "Boltzmann constant").with_unit("J K^-1").exact());
    reg.register(
        "sigma",
        cat,
        def(SIGMA, "Stefan-Boltzmann constant").with_unit("W m^-2 K^-4").exact(),
    );
    reg.register(
        "wien",
        cat,
        def(WIEN, "Wien wavelength displacement law constant").with_unit("m K").exact(),
    );
    reg.register(
        "rydberg",
        cat,
        def(RYDBERG, "Rydberg constant")
            .with_unit("m^-1")
            .with_uncertainty(0.000021),
    );

    reg.alias("speed_of_light", "c");
    reg.alias("planck", "h");
    reg.alias("gravitational_constant", "g");
    reg.alias("elementary_charge", "e");
    reg.alias("gas_constant", "r");
    reg.alias("fine_structure", "alpha");
    reg.alias("avogadro", "na");
    reg.alias("boltzmann", "k");
    reg.alias("stefan_boltzmann", "sigma");
}

fn register_mass(reg: &mut ConstantRegistry) {
    let cat = Category::Mass;
    reg.register("gram", cat, def(GRAM, "gram").exact());
    reg.register("metric_ton", cat, def(METRIC_TON, "metric ton").exact());
    reg.register("grain", cat, def(GRAIN, "grain").exact());
    reg.register("lb", cat, def(LB, "avoirdupois pound").exact());
    reg.register("blob", cat, def(BLOB, "blob, lbf s^2/in"));
    reg.register("slug", cat, def(SLUG, "slug, lbf s^2/ft"));
    reg.register("oz", cat, def(OZ, "avoirdupois ounce").exact());
    reg.register("stone", cat, def(STONE, "stone").exact());
    reg.register("long_ton", cat, def(LONG_TON, "long ton").exact());
    reg.register("short_ton", cat, def(SHORT_TON, "short ton").exact());
    reg.register("troy_ounce", cat, def(TROY_OUNCE, "troy ounce").exact());
    reg.register("troy_pound", cat, def(TROY_POUND, "troy pound").exact());
    reg.register("carat", cat, def(CARAT, "metric carat").exact());
    reg.register(
        "m_e",
        cat,
        def(M_E, "electron mass").with_uncertainty(0.0000000028e-31),
    );
    reg.register(
        "m_p",
        cat,
        def(M_P, "proton mass").with_uncertainty(0.00000000051e-27),
    );
    reg.register(
        "m_n",
        cat,
        def(M_N, "neutron mass").with_uncertainty(0.00000000095e-27),
    );
    reg.register(
        "m_u",
        cat,
        def(M_U, "atomic mass constant").with_uncertainty(0.00000000050e-27),
    );

    reg.alias("pound", "lb");
    reg.alias("slinch", "blob");
    reg.alias("ounce", "oz");
    reg.alias("electron_mass", "m_e");
    reg.alias("proton_mass", "m_p");
    reg.alias("neutron_mass", "m_n");
    reg.alias("atomic_mass", "m_u");
}

fn register_angle(reg: &mut ConstantRegistry) {
    let cat = Category::Angle;
    reg.register("degree", cat, def(DEGREE, "degree of arc"));
    reg.register("arcmin", cat, def(ARCMIN, "arc minute"));
    reg.register("arcsec", cat, def(ARCSEC, "arc second"));
    reg.alias("arcminute", "arcmin");
    reg.alias("arcsecond", "arcsec");
}

fn register_time(reg: &mut ConstantRegistry) {
    let cat = Category::Time;
    reg.register("minute", cat, def(MINUTE, "minute").exact());
    reg.register("hour", cat, def(HOUR, "hour").exact());
    reg.register("day", cat, def(DAY, "day").exact());
    reg.register("week", cat, def(WEEK, "week").exact());
    reg.register("year", cat, def(YEAR, "365-day year").exact());
    reg.register("julian_year", cat, def(JULIAN_YEAR, "Julian year, 365.25 days").exact());
}

fn register_length(reg: &mut ConstantRegistry) {
    let cat = Category::Length;
    reg.register("inch", cat, def(INCH, "international inch").exact());
    reg.register("foot", cat, def(FOOT, "international foot").exact());
    reg.register("yard", cat, def(YARD, "international yard").exact());
    reg.register("mile", cat, def(MILE, "international mile").exact());
    reg.register("mil", cat, def(MIL, "thousandth of an inch").exact());
    reg.register("pt", cat, def(PT, "typographic point").exact());
    reg.register("survey_foot", cat, def(SURVEY_FOOT, "US survey foot"));
    reg.register("survey_mile", cat, def(SURVEY_MILE, "US survey mile"));
    reg.register("nautical_mile", cat, def(NAUTICAL_MILE, "international nautical mile").exact());
    reg.register("fermi", cat, def(FERMI, "fermi, femtometre").exact());
    reg.register("angstrom", cat, def(ANGSTROM, "angstrom").exact());
    reg.register("micron", cat, def(MICRON, "micron, micrometre").exact());
    reg.register("au", cat, def(AU, "astronomical unit").exact());
    reg.register("light_year", cat, def(LIGHT_YEAR, "light year, Julian year times c"));
    reg.register("parsec", cat, def(PARSEC, "parsec"));

    reg.alias("point", "pt");
    reg.alias("astronomical_unit", "au");
}

fn register_pressure(reg: &mut ConstantRegistry) {
    let cat = Category::Pressure;
    reg.register("atm", cat, def(ATM, "standard atmosphere").exact());
    reg.register("bar", cat, def(BAR, "bar").exact());
    reg.register("torr", cat, def(TORR, "torr, 1/760 atm"));
    reg.register("psi", cat, def(PSI, "pound-force per square inch"));

    reg.alias("atmosphere", "atm");
    reg.alias("mm_hg", "torr");
}

fn register_area(reg: &mut ConstantRegistry) {
    let cat = Category::Area;
    reg.register("hectare", cat, def(HECTARE, "hectare").exact());
    reg.register("acre", cat, def(ACRE, "international acre"));
}

fn register_volume(reg: &mut ConstantRegistry) {
    let cat = Category::Volume;
    reg.register("litre", cat, def(LITRE, "litre").exact());
    reg.register("gallon", cat, def(GALLON, "US liquid gallon"));
    reg.register("pint", cat, def(PINT, "US liquid pint"));
    reg.register("fluid_ounce", cat, def(FLUID_OUNCE, "US fluid ounce"));
    reg.register("bbl", cat, def(BBL, "oil barrel"));
    reg.register("gallon_imp", cat, def(GALLON_IMP, "imperial gallon").exact());
    reg.register("fluid_ounce_imp", cat, def(FLUID_OUNCE_IMP, "imperial fluid ounce"));

    reg.alias("liter", "litre");
    reg.alias("gallon_us", "gallon");
    reg.alias("fluid_ounce_us", "fluid_ounce");
    reg.alias("barrel", "bbl");
}

fn register_speed(reg: &mut ConstantRegistry) {
    let cat = Category::Speed;
    reg.register("kmh", cat, def(KMH, "kilometre per hour"));
    reg.register("mph", cat, def(MPH, "mile per hour"));
    reg.register("mach", cat, def(MACH, "speed of sound at 15 degC and 1 atm"));
    reg.register("knot", cat, def(KNOT, "knot, nautical mile per hour"));

    reg.alias("speed_of_sound", "mach");
}

fn register_temperature(reg: &mut ConstantRegistry) {
    let cat = Category::Temperature;
    reg.register("zero_celsius", cat, def(ZERO_CELSIUS, "0 degC in kelvin").exact());
    reg.register(
        "degree_fahrenheit",
        cat,
        def(DEGREE_FAHRENHEIT, "one Fahrenheit degree, for differences only"),
    );
}

fn register_energy(reg: &mut ConstantRegistry) {
    let cat = Category::Energy;
    reg.register("ev", cat, def(EV, "electron volt").exact());
    reg.register("calorie", cat, def(CALORIE, "thermochemical calorie").exact());
    reg.register("calorie_it", cat, def(CALORIE_IT, "International Steam Table calorie").exact());
    reg.register("erg", cat, def(ERG, "erg").exact());
    reg.register("btu_th", cat, def(BTU_TH, "thermochemical British thermal unit"));
    reg.register("btu", cat, def(BTU, "International Steam Table British thermal unit"));
    reg.register("ton_tnt", cat, def(TON_TNT, "ton of TNT").exact());

    reg.alias("electron_volt", "ev");
    reg.alias("calorie_th", "calorie");
    reg.alias("btu_it", "btu");
}

fn register_power(reg: &mut ConstantRegistry) {
    reg.register("hp", Category::Power, def(HP, "mechanical horsepower"));
    reg.alias("horsepower", "hp");
}

fn register_force(reg: &mut ConstantRegistry) {
    let cat = Category::Force;
    reg.register("dyn", cat, def(DYN, "dyne").exact());
    reg.register("lbf", cat, def(LBF, "pound-force"));
    reg.register("kgf", cat, def(KGF, "kilogram-force").exact());

    reg.alias("dyne", "dyn");
    reg.alias("pound_force", "lbf");
    reg.alias("kilogram_force", "kgf");
}
