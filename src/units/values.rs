//! Basic physical units and derived units in the HEP system of units.
//!
//! | Quantity            | Name               | Unit |
//! |---------------------|--------------------|------|
//! | Length              | millimeter         | mm   |
//! | Time                | nanosecond         | ns   |
//! | Energy              | mega electron volt | MeV  |
//! | Positron charge     | eplus              |      |
//! | Temperature         | kelvin             | K    |
//! | Amount of substance | mole               | mol  |
//! | Luminous intensity  | candela            | cd   |
//! | Plane angle         | radian             | rad  |
//! | Solid angle         | steradian          | sr   |
//!
//! Every other unit is derived from these by multiplication and division, so
//! a value multiplied by a unit is expressed in base units and dividing by a
//! unit reads it back:
//!
//! ```
//! use hepunits::units::{CM, METER};
//! assert_eq!((1.0 * METER + 5.0 * CM) / METER, 1.05);
//! ```

use std::f64::consts::PI;

use super::prefixes::*;

// Length
pub const MILLIMETER: f64 = 1.0;
pub const MILLIMETER2: f64 = MILLIMETER * MILLIMETER;
pub const MILLIMETER3: f64 = MILLIMETER * MILLIMETER * MILLIMETER;

pub const MM: f64 = MILLIMETER;
pub const MM2: f64 = MILLIMETER2;
pub const MM3: f64 = MILLIMETER3;

pub const METER: f64 = KILO * MILLIMETER;
pub const METER2: f64 = METER * METER;
pub const METER3: f64 = METER * METER * METER;

pub const M: f64 = METER;
pub const M2: f64 = METER2;
pub const M3: f64 = METER3;

pub const CENTIMETER: f64 = CENTI * METER;
pub const CENTIMETER2: f64 = CENTIMETER * CENTIMETER;
pub const CENTIMETER3: f64 = CENTIMETER * CENTIMETER * CENTIMETER;

pub const CM: f64 = CENTIMETER;
pub const CM2: f64 = CENTIMETER2;
pub const CM3: f64 = CENTIMETER3;

pub const KILOMETER: f64 = KILO * METER;
pub const KILOMETER2: f64 = KILOMETER * KILOMETER;
pub const KILOMETER3: f64 = KILOMETER * KILOMETER * KILOMETER;

pub const KM: f64 = KILOMETER;
pub const KM2: f64 = KILOMETER2;
pub const KM3: f64 = KILOMETER3;

pub const MICROMETER: f64 = MICRO * METER;
pub const MICRON: f64 = MICROMETER;
pub const NANOMETER: f64 = NANO * METER;
pub const ANGSTROM: f64 = 1.0e-10 * METER;

pub const FEMTOMETER: f64 = FEMTO * METER;
pub const FERMI: f64 = FEMTOMETER;

pub const FM: f64 = FEMTOMETER;
pub const FM2: f64 = FEMTOMETER * FEMTOMETER;
pub const FM3: f64 = FEMTOMETER * FEMTOMETER * FEMTOMETER;

// Cross sections and integrated luminosity
pub const BARN: f64 = 1.0e-28 * METER2;

pub const MILLIBARN: f64 = MILLI * BARN;
pub const MICROBARN: f64 = MICRO * BARN;
pub const NANOBARN: f64 = NANO * BARN;
pub const PICOBARN: f64 = PICO * BARN;
pub const FEMTOBARN: f64 = FEMTO * BARN;
pub const ATTOBARN: f64 = ATTO * BARN;

pub const MB: f64 = MILLIBARN;
pub const UB: f64 = MICROBARN;
pub const NB: f64 = NANOBARN;
pub const PB: f64 = PICOBARN;
pub const FB: f64 = FEMTOBARN;
pub const AB: f64 = ATTOBARN;

pub const INVMB: f64 = 1.0 / MILLIBARN;
pub const INVUB: f64 = 1.0 / MICROBARN;
pub const INVNB: f64 = 1.0 / NANOBARN;
pub const INVPB: f64 = 1.0 / PICOBARN;
pub const INVFB: f64 = 1.0 / FEMTOBARN;
pub const INVAB: f64 = 1.0 / ATTOBARN;

// Time
pub const NANOSECOND: f64 = 1.0;

pub const NS: f64 = NANOSECOND;

pub const SECOND: f64 = GIGA * NANOSECOND;
pub const MILLISECOND: f64 = MILLI * SECOND;
pub const MICROSECOND: f64 = MICRO * SECOND;
pub const PICOSECOND: f64 = PICO * SECOND;
pub const FEMTOSECOND: f64 = FEMTO * SECOND;
pub const ATTOSECOND: f64 = ATTO * SECOND;
pub const ZEPTOSECOND: f64 = ZEPTO * SECOND;
pub const YOCTOSECOND: f64 = YOCTO * SECOND;

pub const S: f64 = SECOND;
pub const MS: f64 = MILLISECOND;
pub const US: f64 = MICROSECOND;
pub const PS: f64 = PICOSECOND;
pub const FS: f64 = FEMTOSECOND;
pub const ZS: f64 = ZEPTOSECOND;
pub const YS: f64 = YOCTOSECOND;

pub const MINUTE: f64 = 60.0 * SECOND;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;
pub const YEAR: f64 = 365.25 * DAY;

pub const H: f64 = HOUR;
pub const D: f64 = DAY;
pub const Y: f64 = YEAR;

pub const HERTZ: f64 = 1.0 / SECOND;

pub const KILOHERTZ: f64 = KILO * HERTZ;
pub const MEGAHERTZ: f64 = MEGA * HERTZ;
pub const GIGAHERTZ: f64 = GIGA * HERTZ;
pub const TERAHERTZ: f64 = TERA * HERTZ;

pub const HZ: f64 = HERTZ;

pub const KHZ: f64 = KILOHERTZ;
pub const MHZ: f64 = MEGAHERTZ;
pub const GHZ: f64 = GIGAHERTZ;
pub const THZ: f64 = TERAHERTZ;

// Energy
pub const MEGAELECTRONVOLT: f64 = 1.0;

pub const ELECTRONVOLT: f64 = MICRO * MEGAELECTRONVOLT;

pub const ZETTAELECTRONVOLT: f64 = ZETTA * ELECTRONVOLT;
pub const EXAELECTRONVOLT: f64 = EXA * ELECTRONVOLT;
pub const PETAELECTRONVOLT: f64 = PETA * ELECTRONVOLT;
pub const TERAELECTRONVOLT: f64 = TERA * ELECTRONVOLT;
pub const GIGAELECTRONVOLT: f64 = GIGA * ELECTRONVOLT;
pub const KILOELECTRONVOLT: f64 = KILO * ELECTRONVOLT;

pub const ZEV: f64 = ZETTAELECTRONVOLT;
pub const EEV: f64 = EXAELECTRONVOLT;
pub const PEV: f64 = PETAELECTRONVOLT;
pub const TEV: f64 = TERAELECTRONVOLT;
pub const GEV: f64 = GIGAELECTRONVOLT;
pub const MEV: f64 = MEGAELECTRONVOLT;
pub const KEV: f64 = KILOELECTRONVOLT;
pub const EV: f64 = ELECTRONVOLT;

// Electric charge
/// Positron charge.
pub const EPLUS: f64 = 1.0;

// Temperature
pub const KELVIN: f64 = 1.0;

// Amount of substance
pub const MOLE: f64 = 1.0;

pub const MOL: f64 = MOLE;

// Luminous intensity
pub const CANDELA: f64 = 1.0;

pub const CD: f64 = CANDELA;

// Angles
/// Plane angle.
pub const RADIAN: f64 = 1.0;
/// Solid angle.
pub const STERADIAN: f64 = 1.0;

pub const RAD: f64 = RADIAN;
pub const SR: f64 = STERADIAN;

pub const MILLIRADIAN: f64 = MILLI * RADIAN;
pub const MRAD: f64 = MILLIRADIAN;

pub const DEGREE: f64 = (PI / 180.0) * RADIAN;

pub const DEG: f64 = DEGREE;

// Derived units

/// Positron charge in coulomb (exact, PDG 2020).
pub const E_SI: f64 = 1.602176634e-19;

// Electric charge [Q]
pub const COULOMB: f64 = EPLUS / E_SI;

// Electric current [Q][T^-1]
pub const AMPERE: f64 = COULOMB / SECOND;

pub const MILLIAMPERE: f64 = MILLI * AMPERE;
pub const MICROAMPERE: f64 = MICRO * AMPERE;
pub const NANOAMPERE: f64 = NANO * AMPERE;

pub const A: f64 = AMPERE;

// Energy [E]
pub const JOULE: f64 = ELECTRONVOLT / E_SI;

pub const J: f64 = JOULE;

pub const ERG: f64 = 1.0e-7 * JOULE;

// Power [M][L^2][T^-3]
pub const WATT: f64 = JOULE / SECOND;

pub const W: f64 = WATT;

pub const KW: f64 = KILO * WATT;
pub const MW: f64 = MEGA * WATT;
pub const GW: f64 = GIGA * WATT;

// Force [E][L^-1]
pub const NEWTON: f64 = JOULE / METER;

pub const N: f64 = NEWTON;

pub const DYNE: f64 = 1.0e-5 * NEWTON;

// Pressure
pub const PASCAL: f64 = NEWTON / METER2;

pub const PA: f64 = PASCAL;

pub const BAR: f64 = 1.0e5 * PASCAL;

pub const ATMOSPHERE: f64 = 101325.0 * PASCAL;

// Mass [E][T^2][L^-2]
pub const KILOGRAM: f64 = JOULE * SECOND * SECOND / (METER * METER);
pub const GRAM: f64 = MILLI * KILOGRAM;
pub const MILLIGRAM: f64 = MILLI * GRAM;

pub const KG: f64 = KILOGRAM;
pub const G: f64 = GRAM;
pub const MG: f64 = MILLIGRAM;

// Electric potential
pub const MEGAVOLT: f64 = MEGAELECTRONVOLT / EPLUS;
pub const VOLT: f64 = MICRO * MEGAVOLT;
pub const KILOVOLT: f64 = KILO * VOLT;

// Electric capacitance
pub const FARAD: f64 = COULOMB / VOLT;

pub const MILLIFARAD: f64 = MILLI * FARAD;
pub const MICROFARAD: f64 = MICRO * FARAD;
pub const NANOFARAD: f64 = NANO * FARAD;
pub const PICOFARAD: f64 = PICO * FARAD;

// Electric resistance
pub const OHM: f64 = VOLT / AMPERE;

// Magnetic field
pub const TESLA: f64 = VOLT * SECOND / METER2;

pub const GAUSS: f64 = 1.0e-4 * TESLA;

pub const KILOGAUSS: f64 = KILO * GAUSS;

// Magnetic flux
pub const WEBER: f64 = VOLT * SECOND;

// Inductance
pub const HENRY: f64 = WEBER / AMPERE;

// Luminous flux [I]
pub const LUMEN: f64 = CANDELA * STERADIAN;

/// Illuminance, luminous flux per unit area [I][L^-2].
pub const LUX: f64 = LUMEN / METER2;

// Activity [T^-1]
pub const BECQUEREL: f64 = 1.0 / SECOND;

pub const KILOBECQUEREL: f64 = KILO * BECQUEREL;
pub const MEGABECQUEREL: f64 = MEGA * BECQUEREL;
pub const GIGABECQUEREL: f64 = GIGA * BECQUEREL;

pub const BQ: f64 = BECQUEREL;

pub const KBQ: f64 = KILOBECQUEREL;
pub const MBQ: f64 = MEGABECQUEREL;
pub const GBQ: f64 = GIGABECQUEREL;

pub const CURIE: f64 = 3.7e10 * BECQUEREL;

pub const MILLICURIE: f64 = MILLI * CURIE;
pub const MICROCURIE: f64 = MICRO * CURIE;
pub const NANOCURIE: f64 = NANO * CURIE;

pub const CI: f64 = CURIE;

pub const MCI: f64 = MILLICURIE;
pub const UCI: f64 = MICROCURIE;
pub const NCI: f64 = NANOCURIE;

// Absorbed dose [L^2][T^-2]
pub const GRAY: f64 = JOULE / KILOGRAM;

pub const MEGAGRAY: f64 = MEGA * GRAY;
pub const KILOGRAY: f64 = KILO * GRAY;
pub const MILLIGRAY: f64 = MILLI * GRAY;
pub const MICROGRAY: f64 = MICRO * GRAY;

pub const GY: f64 = GRAY;

// `MGy` (megagray) has no short name: upper-casing collides with `mGy`.
pub const KGY: f64 = KILOGRAY;
pub const MGY: f64 = MILLIGRAY;
pub const UGY: f64 = MICROGRAY;

// Dose equivalent
pub const SIEVERT: f64 = JOULE / KILOGRAM;

pub const SV: f64 = SIEVERT;

/// Registry entries, keyed by the conventional (case-sensitive) symbol.
pub(crate) const UNIT_ENTRIES: &[(&str, f64)] = &[
    ("millimeter", MILLIMETER),
    ("millimeter2", MILLIMETER2),
    ("millimeter3", MILLIMETER3),
    ("mm", MM),
    ("mm2", MM2),
    ("mm3", MM3),
    ("meter", METER),
    ("meter2", METER2),
    ("meter3", METER3),
    ("m", M),
    ("m2", M2),
    ("m3", M3),
    ("centimeter", CENTIMETER),
    ("centimeter2", CENTIMETER2),
    ("centimeter3", CENTIMETER3),
    ("cm", CM),
    ("cm2", CM2),
    ("cm3", CM3),
    ("kilometer", KILOMETER),
    ("kilometer2", KILOMETER2),
    ("kilometer3", KILOMETER3),
    ("km", KM),
    ("km2", KM2),
    ("km3", KM3),
    ("micrometer", MICROMETER),
    ("micron", MICRON),
    ("nanometer", NANOMETER),
    ("angstrom", ANGSTROM),
    ("femtometer", FEMTOMETER),
    ("fermi", FERMI),
    ("fm", FM),
    ("fm2", FM2),
    ("fm3", FM3),
    ("barn", BARN),
    ("millibarn", MILLIBARN),
    ("microbarn", MICROBARN),
    ("nanobarn", NANOBARN),
    ("picobarn", PICOBARN),
    ("femtobarn", FEMTOBARN),
    ("attobarn", ATTOBARN),
    ("mb", MB),
    ("ub", UB),
    ("nb", NB),
    ("pb", PB),
    ("fb", FB),
    ("ab", AB),
    ("invmb", INVMB),
    ("invub", INVUB),
    ("invnb", INVNB),
    ("invpb", INVPB),
    ("invfb", INVFB),
    ("invab", INVAB),
    ("nanosecond", NANOSECOND),
    ("ns", NS),
    ("second", SECOND),
    ("millisecond", MILLISECOND),
    ("microsecond", MICROSECOND),
    ("picosecond", PICOSECOND),
    ("femtosecond", FEMTOSECOND),
    ("attosecond", ATTOSECOND),
    ("zeptosecond", ZEPTOSECOND),
    ("yoctosecond", YOCTOSECOND),
    ("s", S),
    ("ms", MS),
    ("us", US),
    ("ps", PS),
    ("fs", FS),
    ("zs", ZS),
    ("ys", YS),
    ("minute", MINUTE),
    ("hour", HOUR),
    ("day", DAY),
    ("year", YEAR),
    ("h", H),
    ("d", D),
    ("y", Y),
    ("hertz", HERTZ),
    ("kilohertz", KILOHERTZ),
    ("megahertz", MEGAHERTZ),
    ("gigahertz", GIGAHERTZ),
    ("terahertz", TERAHERTZ),
    ("Hz", HZ),
    ("kHz", KHZ),
    ("MHz", MHZ),
    ("GHz", GHZ),
    ("THz", THZ),
    ("megaelectronvolt", MEGAELECTRONVOLT),
    ("electronvolt", ELECTRONVOLT),
    ("zettaelectronvolt", ZETTAELECTRONVOLT),
    ("exaelectronvolt", EXAELECTRONVOLT),
    ("petaelectronvolt", PETAELECTRONVOLT),
    ("teraelectronvolt", TERAELECTRONVOLT),
    ("gigaelectronvolt", GIGAELECTRONVOLT),
    ("kiloelectronvolt", KILOELECTRONVOLT),
    ("ZeV", ZEV),
    ("EeV", EEV),
    ("PeV", PEV),
    ("TeV", TEV),
    ("GeV", GEV),
    ("MeV", MEV),
    ("keV", KEV),
    ("eV", EV),
    ("eplus", EPLUS),
    ("kelvin", KELVIN),
    ("mole", MOLE),
    ("mol", MOL),
    ("candela", CANDELA),
    ("cd", CD),
    ("radian", RADIAN),
    ("steradian", STERADIAN),
    ("rad", RAD),
    ("sr", SR),
    ("milliradian", MILLIRADIAN),
    ("mrad", MRAD),
    ("degree", DEGREE),
    ("deg", DEG),
    ("e_SI", E_SI),
    ("coulomb", COULOMB),
    ("ampere", AMPERE),
    ("milliampere", MILLIAMPERE),
    ("microampere", MICROAMPERE),
    ("nanoampere", NANOAMPERE),
    ("A", A),
    ("joule", JOULE),
    ("J", J),
    ("erg", ERG),
    ("watt", WATT),
    ("W", W),
    ("kW", KW),
    ("MW", MW),
    ("GW", GW),
    ("newton", NEWTON),
    ("N", N),
    ("dyne", DYNE),
    ("pascal", PASCAL),
    ("Pa", PA),
    ("bar", BAR),
    ("atmosphere", ATMOSPHERE),
    ("kilogram", KILOGRAM),
    ("gram", GRAM),
    ("milligram", MILLIGRAM),
    ("kg", KG),
    ("g", G),
    ("mg", MG),
    ("megavolt", MEGAVOLT),
    ("volt", VOLT),
    ("kilovolt", KILOVOLT),
    ("farad", FARAD),
    ("millifarad", MILLIFARAD),
    ("microfarad", MICROFARAD),
    ("nanofarad", NANOFARAD),
    ("picofarad", PICOFARAD),
    ("ohm", OHM),
    ("tesla", TESLA),
    ("gauss", GAUSS),
    ("kilogauss", KILOGAUSS),
    ("weber", WEBER),
    ("henry", HENRY),
    ("lumen", LUMEN),
    ("lux", LUX),
    ("becquerel", BECQUEREL),
    ("kilobecquerel", KILOBECQUEREL),
    ("megabecquerel", MEGABECQUEREL),
    ("gigabecquerel", GIGABECQUEREL),
    ("Bq", BQ),
    ("kBq", KBQ),
    ("MBq", MBQ),
    ("GBq", GBQ),
    ("curie", CURIE),
    ("millicurie", MILLICURIE),
    ("microcurie", MICROCURIE),
    ("nanocurie", NANOCURIE),
    ("Ci", CI),
    ("mCi", MCI),
    ("uCi", UCI),
    ("nCi", NCI),
    ("gray", GRAY),
    ("megagray", MEGAGRAY),
    ("kilogray", KILOGRAY),
    ("milligray", MILLIGRAY),
    ("microgray", MICROGRAY),
    ("Gy", GY),
    ("MGy", MEGAGRAY),
    ("kGy", KGY),
    ("mGy", MGY),
    ("uGy", UGY),
    ("sievert", SIEVERT),
    ("Sv", SV),
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length() {
        assert_eq!(METER, 1000.0 * MILLIMETER);
        assert_relative_eq!(3.0 * MM, M * 0.003, max_relative = 1e-12);
        assert_relative_eq!(3.0 * MM, CM * 0.3, max_relative = 1e-12);
        assert_relative_eq!(3.0 * MM, KM * 0.000003, max_relative = 1e-12);
        assert_relative_eq!(3.0 * MM, MICROMETER * 3000.0, max_relative = 1e-12);
        assert_relative_eq!(3.0 * MM, NANOMETER * 3_000_000.0, max_relative = 1e-12);
        assert_relative_eq!(3.0 * MM, ANGSTROM * 30_000_000.0, max_relative = 1e-12);
        assert_relative_eq!(3.0 * MM, FERMI * 3e12, max_relative = 1e-12);
    }

    #[test]
    fn test_area_and_volume() {
        assert_relative_eq!((3.0 * MM).powi(2), 9.0 * MM2, max_relative = 1e-12);
        assert_relative_eq!((3.0 * CM).powi(2), 9.0 * CM2, max_relative = 1e-12);
        assert_relative_eq!((3.0 * KM).powi(2), 9.0 * KM2, max_relative = 1e-12);
        assert_relative_eq!(2e-28 * METER2, 2.0 * BARN, max_relative = 1e-12);
        assert_relative_eq!((3.0 * CM).powi(3), 27.0 * CM3, max_relative = 1e-12);
        assert_relative_eq!((3.0 * M).powi(3), 27.0 * M3, max_relative = 1e-12);
    }

    #[test]
    fn test_cross_section_and_luminosity() {
        assert_relative_eq!(3e-3 * BARN, 3.0 * MILLIBARN, max_relative = 1e-12);
        assert_relative_eq!(3e-12 * BARN, 3.0 * PICOBARN, max_relative = 1e-12);
        assert_relative_eq!(1.0 * BARN, 100.0 * FM2, max_relative = 1e-12);
        assert_relative_eq!(INVPB / INVFB, 1.0e-3, max_relative = 1e-12);
        assert_relative_eq!(1000.0 * PB, 1.0 * NB, max_relative = 1e-12);
    }

    #[test]
    fn test_time_and_frequency() {
        assert_relative_eq!(3.0 * NS, 3e-9 * S, max_relative = 1e-12);
        assert_relative_eq!(3.0 * NS, 3e-6 * MS, max_relative = 1e-12);
        assert_relative_eq!(3.0 * NS, 3e-3 * MICROSECOND, max_relative = 1e-12);
        assert_relative_eq!(3.0 * NS, 3000.0 * PICOSECOND, max_relative = 1e-12);
        assert_relative_eq!(3.0 * NS, 3_000_000.0 * FEMTOSECOND, max_relative = 1e-12);
        assert_eq!(DAY, 24.0 * 60.0 * MINUTE);
        assert_relative_eq!(1.0 / SECOND, HZ, max_relative = 1e-12);
        assert_relative_eq!(1000.0 * HERTZ, KHZ, max_relative = 1e-12);
        assert_relative_eq!(1.0e9 * HERTZ, GHZ, max_relative = 1e-12);
    }

    #[test]
    fn test_energy() {
        assert_relative_eq!(1e3 * EV, KEV, max_relative = 1e-12);
        assert_relative_eq!(1e6 * EV, MEV, max_relative = 1e-12);
        assert_relative_eq!(1e9 * EV, GEV, max_relative = 1e-12);
        assert_relative_eq!(1e12 * EV, TEV, max_relative = 1e-12);
        assert_relative_eq!(1e15 * EV, PEV, max_relative = 1e-12);
        assert_relative_eq!(1e18 * EV, EEV, max_relative = 1e-12);
    }

    #[test]
    fn test_angle() {
        assert_relative_eq!(360.0 * DEGREE, 2.0 * PI * RADIAN, max_relative = 1e-12);
        assert_relative_eq!(1000.0 * MRAD, RAD, max_relative = 1e-12);
    }

    #[test]
    fn test_electromagnetism() {
        assert_relative_eq!(10.0 * GAUSS, 1.0 * MILLI * TESLA, max_relative = 1e-12);
        assert_relative_eq!(1.0 * MEGA * JOULE / SECOND, 1.0 * MW, max_relative = 1e-12);
        assert_relative_eq!(OHM * AMPERE, VOLT, max_relative = 1e-12);
        assert_relative_eq!(FARAD * VOLT, COULOMB, max_relative = 1e-12);
        assert_relative_eq!(COULOMB * E_SI, EPLUS, max_relative = 1e-12);
    }

    #[test]
    fn test_radiation_units() {
        assert_eq!(GRAY, SIEVERT);
        assert_relative_eq!(1.0 * CURIE, 37.0 * GIGA * BECQUEREL, max_relative = 1e-12);
        assert_relative_eq!(MEGAGRAY / MGY, 1.0e9, max_relative = 1e-12);
    }

    #[test]
    fn test_units_are_positive() {
        for (name, value) in UNIT_ENTRIES {
            assert!(*value > 0.0, "{name} is not positive");
        }
    }
}
