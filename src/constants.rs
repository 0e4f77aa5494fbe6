//! Physical and other handy constants.
//!
//! All constants are computed in the HEP system of units defined in
//! [`crate::units`]:
//!
//! ```
//! use hepunits::constants::C_LIGHT;
//! use hepunits::units::{MICROMETER, PICOSECOND};
//!
//! let tau_bs = 1.5 * PICOSECOND;
//! let ctau_bs = C_LIGHT * tau_bs;
//! assert!((ctau_bs / MICROMETER - 449.688687).abs() < 1e-6);
//! ```

use crate::units::{EPLUS, JOULE, KELVIN, M, MOLE, S};

// Mathematical constants
pub use std::f64::consts::PI;

pub const TWO_PI: f64 = 2.0 * PI;
pub const HALF_PI: f64 = PI / 2.0;
pub const PI_SQ: f64 = PI * PI;

// Physical constants

/// Speed of light in vacuum (exact, PDG 2020).
pub const C_LIGHT: f64 = 299792458.0 * M / S;
pub const C_LIGHT_SQ: f64 = C_LIGHT * C_LIGHT;

/// Electron charge.
pub const EMINUS: f64 = -EPLUS;
pub const E_SQ: f64 = EPLUS * EPLUS;

/// Avogadro constant (exact, PDG 2020).
pub const AVOGADRO: f64 = 6.02214076e23 / MOLE;

/// Planck constant (exact, PDG 2020).
pub const H_PLANCK: f64 = 6.62607015e-34 * JOULE * S;

pub const HBAR_PLANCK: f64 = H_PLANCK / TWO_PI;
pub const HBAR: f64 = HBAR_PLANCK;

pub const HBARC: f64 = HBAR_PLANCK * C_LIGHT;

pub const HBARC_SQ: f64 = HBARC * HBARC;

/// Boltzmann constant (exact, PDG 2020).
pub const K_BOLTZMANN: f64 = 1.380649e-23 * JOULE / KELVIN;

pub(crate) const CONSTANT_ENTRIES: &[(&str, f64)] = &[
    ("pi", PI),
    ("two_pi", TWO_PI),
    ("half_pi", HALF_PI),
    ("pi_sq", PI_SQ),
    ("c_light", C_LIGHT),
    ("c_light_sq", C_LIGHT_SQ),
    ("eminus", EMINUS),
    ("e_sq", E_SQ),
    ("Avogadro", AVOGADRO),
    ("h_Planck", H_PLANCK),
    ("hbar_Planck", HBAR_PLANCK),
    ("hbar", HBAR),
    ("hbarc", HBARC),
    ("hbarc_sq", HBARC_SQ),
    ("k_Boltzmann", K_BOLTZMANN),
];
