//! SI and binary prefix multipliers

/// Power-of-ten multipliers
pub mod si {
    pub const YOTTA: f64 = 1e24;
    pub const ZETTA: f64 = 1e21;
    pub const EXA: f64 = 1e18;
    pub const PETA: f64 = 1e15;
    pub const TERA: f64 = 1e12;
    pub const GIGA: f64 = 1e9;
    pub const MEGA: f64 = 1e6;
    pub const KILO: f64 = 1e3;
    pub const HECTO: f64 = 1e2;
    pub const DEKA: f64 = 1e1;
    pub const DECI: f64 = 1e-1;
    pub const CENTI: f64 = 1e-2;
    pub const MILLI: f64 = 1e-3;
    pub const MICRO: f64 = 1e-6;
    pub const NANO: f64 = 1e-9;
    pub const PICO: f64 = 1e-12;
    pub const FEMTO: f64 = 1e-15;
    pub const ATTO: f64 = 1e-18;
    pub const ZEPTO: f64 = 1e-21;
}

/// Power-of-two multipliers (IEC). All are exact in `f64`.
pub mod binary {
    pub const KIBI: f64 = 1024.0; // 2^10
    pub const MEBI: f64 = 1048576.0; // 2^20
    pub const GIBI: f64 = 1073741824.0; // 2^30
    pub const TEBI: f64 = 1099511627776.0; // 2^40
    pub const PEBI: f64 = 1125899906842624.0; // 2^50
    pub const EXBI: f64 = 1152921504606846976.0; // 2^60
    pub const ZEBI: f64 = 1180591620717411303424.0; // 2^70
    pub const YOBI: f64 = 1208925819614629174706176.0; // 2^80
}
