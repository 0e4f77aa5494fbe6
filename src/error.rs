use thiserror::Error;

use crate::bridge::BaseDimension;

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Failure of a conversion between `uom` quantities and the HEP base system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    #[error("Unsupported dimension {dimension} in {input}")]
    UnsupportedDimension {
        dimension: BaseDimension,
        input: String,
    },
}

/// Failure of a name-based unit lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
