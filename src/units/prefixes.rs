//! Common unit prefixes.
//!
//! Two families are provided: the decimal SI prefixes and the binary (IEC)
//! prefixes. Both are plain multiplicative factors and carry no physical
//! meaning on their own.

// SI prefixes
pub const YOTTA: f64 = 1.0e24;
pub const ZETTA: f64 = 1.0e21;
pub const EXA: f64 = 1.0e18;
pub const PETA: f64 = 1.0e15;
pub const TERA: f64 = 1.0e12;
pub const GIGA: f64 = 1.0e9;
pub const MEGA: f64 = 1.0e6;
pub const KILO: f64 = 1.0e3;
pub const HECTO: f64 = 1.0e2;
pub const DECA: f64 = 1.0e1;
pub const DECI: f64 = 1.0e-1;
pub const CENTI: f64 = 1.0e-2;
pub const MILLI: f64 = 1.0e-3;
pub const MICRO: f64 = 1.0e-6;
pub const NANO: f64 = 1.0e-9;
pub const PICO: f64 = 1.0e-12;
pub const FEMTO: f64 = 1.0e-15;
pub const ATTO: f64 = 1.0e-18;
pub const ZEPTO: f64 = 1.0e-21;
pub const YOCTO: f64 = 1.0e-24;

// Binary prefixes
pub const KIBI: f64 = (1u128 << 10) as f64;
pub const MEBI: f64 = (1u128 << 20) as f64;
pub const GIBI: f64 = (1u128 << 30) as f64;
pub const TEBI: f64 = (1u128 << 40) as f64;
pub const PEBI: f64 = (1u128 << 50) as f64;
pub const EXBI: f64 = (1u128 << 60) as f64;
pub const ZEBI: f64 = (1u128 << 70) as f64;
pub const YOBI: f64 = (1u128 << 80) as f64;

pub const GOOGOL: f64 = 1.0e100;

/// Registry entries, keyed by the conventional prefix name.
pub(crate) const PREFIX_ENTRIES: &[(&str, f64)] = &[
    ("yotta", YOTTA),
    ("zetta", ZETTA),
    ("exa", EXA),
    ("peta", PETA),
    ("tera", TERA),
    ("giga", GIGA),
    ("mega", MEGA),
    ("kilo", KILO),
    ("hecto", HECTO),
    ("deca", DECA),
    ("deci", DECI),
    ("centi", CENTI),
    ("milli", MILLI),
    ("micro", MICRO),
    ("nano", NANO),
    ("pico", PICO),
    ("femto", FEMTO),
    ("atto", ATTO),
    ("zepto", ZEPTO),
    ("yocto", YOCTO),
    ("kibi", KIBI),
    ("mebi", MEBI),
    ("gibi", GIBI),
    ("tebi", TEBI),
    ("pebi", PEBI),
    ("exbi", EXBI),
    ("zebi", ZEBI),
    ("yobi", YOBI),
    ("googol", GOOGOL),
];
