//! Bridge settings, usually read from a TOML file:
//!
//! ```toml
//! extra_dimensions = ["temperature", "amount_of_substance"]
//! ```

use serde::{Deserialize, Serialize};

use crate::bridge::{BaseDimension, DimensionTable};
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Dimensions converted on top of length, time, mass and current, each
    /// to its HEP base unit (`K`, `mol`, `cd`).
    pub extra_dimensions: Vec<BaseDimension>,
}

impl BridgeConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn dimension_table(&self) -> DimensionTable {
        DimensionTable::from_config(self)
    }
}
