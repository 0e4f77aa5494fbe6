use serde::{Deserialize, Serialize};

use crate::error::UnitError;
use crate::table::{Category, UnitTable};

/// A number tagged with the symbol of the unit it is expressed in, e.g. a
/// value read from a configuration file as `{ value = 3.0, unit = "cm" }`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WithUnit {
    pub value: f64,
    pub unit: String,
}

impl WithUnit {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Value in HEP base units.
    pub fn to_base(&self) -> Result<f64, UnitError> {
        Ok(self.value * unit_value(&self.unit)?)
    }

    /// Express a base-unit value in the named unit.
    pub fn from_base(base: f64, unit: &str) -> Result<Self, UnitError> {
        Ok(Self::new(base / unit_value(unit)?, unit))
    }

    pub fn convert(&self, unit: &str) -> Result<Self, UnitError> {
        Self::from_base(self.to_base()?, unit)
    }
}

fn unit_value(symbol: &str) -> Result<f64, UnitError> {
    match UnitTable::global().entry(symbol) {
        Some(entry) if entry.category == Category::Unit => Ok(entry.value),
        _ => Err(UnitError::UnknownUnit(symbol.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_base() {
        assert_relative_eq!(WithUnit::new(3.0, "cm").to_base().unwrap(), 30.0);
        assert_relative_eq!(WithUnit::new(2.0, "GeV").to_base().unwrap(), 2000.0);
    }

    #[test]
    fn test_from_base() {
        let ns = WithUnit::from_base(1.5e9, "s").unwrap();
        assert_relative_eq!(ns.value, 1.5);
        assert_eq!(ns.unit, "s");
    }

    #[test]
    fn test_convert() {
        let length = WithUnit::new(1.05, "m").convert("cm").unwrap();
        assert_relative_eq!(length.value, 105.0, max_relative = 1e-12);
        assert_eq!(length.unit, "cm");
    }

    #[test]
    fn test_unknown_unit() {
        let err = WithUnit::new(1.0, "furlong").to_base().unwrap_err();
        assert_eq!(err, UnitError::UnknownUnit("furlong".into()));
        assert_eq!(err.to_string(), "Unknown unit: furlong");
    }

    #[test]
    fn test_prefixes_and_constants_are_not_units() {
        assert!(WithUnit::new(1.0, "kilo").to_base().is_err());
        assert!(WithUnit::new(1.0, "c_light").to_base().is_err());
    }

    #[test]
    fn test_serde() {
        let value: WithUnit = serde_json::from_str(r#"{"value": 3.0, "unit": "mm"}"#).unwrap();
        assert_eq!(value, WithUnit::new(3.0, "mm"));
    }
}
