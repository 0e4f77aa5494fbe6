//! Units and constants in the HEP system of units.
//!
//! All values are plain `f64` numbers expressed in the HEP base units
//! (millimeter, nanosecond, MeV, positron charge, kelvin, mole, candela,
//! radian). Multiply by a unit to enter the system, divide to leave it:
//!
//! ```
//! use hepunits::{GEV, MEV};
//!
//! let mass_window = 100.0 * MEV;
//! assert_eq!(mass_window / GEV, 0.1);
//! ```
//!
//! The [`bridge`] module converts to and from `uom` quantities.

pub mod bridge;
pub mod config;
pub mod constants;
pub mod error;
pub mod table;
pub mod units;

pub use uom;

pub use bridge::{from_base_system, to_base_system};
pub use config::BridgeConfig;
pub use constants::*;
pub use error::{BridgeError, BridgeResult, ConfigError, UnitError};
pub use table::{Category, Entry, UnitTable};
pub use units::*;
