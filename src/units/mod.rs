//! Units in the HEP system of units.
//!
//! The HEP system of units is the set of basic units originally defined by
//! the CLHEP project. It is largely based on SI but changes the basic length
//! and time units and uses energy and the positron charge as base units.
//!
//! - [`values`]: basic physical units and derived units.
//! - [`prefixes`]: commonly-used unit prefixes.

pub mod prefixes;
pub mod values;
mod with_unit;

pub use prefixes::*;
pub use values::*;
pub use with_unit::WithUnit;
