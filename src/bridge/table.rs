use std::collections::BTreeMap;
use std::marker::PhantomData;

use once_cell::sync::Lazy;
use serde::Serialize;
use uom::si::amount_of_substance::mole;
use uom::si::electric_charge::coulomb;
use uom::si::energy::joule;
use uom::si::f64 as si;
use uom::si::length::millimeter;
use uom::si::luminous_intensity::candela;
use uom::si::thermodynamic_temperature::kelvin;
use uom::si::time::nanosecond;
use uom::si::{Quantity, SI};

use super::dimension::{BaseDimension, Dimensionality};
use super::{Converted, Measurable, UnitRef};
use crate::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::units::{CANDELA, COULOMB, EPLUS, JOULE, KELVIN, MEV, MILLIMETER, MOLE, NANOSECOND};

static STANDARD: Lazy<DimensionTable> = Lazy::new(DimensionTable::hep);

/// A HEP base-system unit standing in for one SI base dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaseUnit {
    /// Composite expression in HEP units, e.g. `MeV·mm⁻²·ns²`.
    pub expression: &'static str,
    /// Magnitude of one such unit in `uom`'s SI storage units.
    pub si_value: f64,
}

impl BaseUnit {
    pub const fn new(expression: &'static str, si_value: f64) -> Self {
        Self { expression, si_value }
    }
}

impl BaseDimension {
    /// The HEP base unit of this dimension, built through `uom` so that its
    /// magnitude is whatever `uom` stores for it.
    pub fn hep_base_unit(&self) -> BaseUnit {
        let mm = si::Length::new::<millimeter>(MILLIMETER);
        let ns = si::Time::new::<nanosecond>(NANOSECOND);
        match self {
            Self::Length => BaseUnit::new("mm", mm.value),
            Self::Time => BaseUnit::new("ns", ns.value),
            Self::Mass => {
                let mev = si::Energy::new::<joule>(MEV / JOULE);
                BaseUnit::new("MeV\u{b7}mm\u{207b}\u{b2}\u{b7}ns\u{b2}", (mev * ns * ns / (mm * mm)).value)
            }
            Self::Current => {
                let eplus = si::ElectricCharge::new::<coulomb>(EPLUS / COULOMB);
                BaseUnit::new("eplus/ns", (eplus / ns).value)
            }
            Self::Temperature => {
                BaseUnit::new("K", si::ThermodynamicTemperature::new::<kelvin>(KELVIN).value)
            }
            Self::AmountOfSubstance => {
                BaseUnit::new("mol", si::AmountOfSubstance::new::<mole>(MOLE).value)
            }
            Self::LuminousIntensity => {
                BaseUnit::new("cd", si::LuminousIntensity::new::<candela>(CANDELA).value)
            }
        }
    }
}

/// Mapping from fundamental dimension to the HEP unit it converts to.
///
/// A dimension missing from the table cannot be converted; extending the
/// bridge to a new dimension is one [`DimensionTable::with`] call.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DimensionTable {
    units: BTreeMap<BaseDimension, BaseUnit>,
}

impl DimensionTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Length, time, mass and current: the dimensions the HEP base system
    /// folds into numbers.
    pub fn hep() -> Self {
        [
            BaseDimension::Length,
            BaseDimension::Time,
            BaseDimension::Mass,
            BaseDimension::Current,
        ]
        .into_iter()
        .fold(Self::empty(), Self::with_hep_dimension)
    }

    /// The process-wide table used by [`super::to_base_system`] and
    /// [`super::from_base_system`].
    pub fn standard() -> &'static DimensionTable {
        &STANDARD
    }

    pub fn from_config(config: &BridgeConfig) -> Self {
        let table = config
            .extra_dimensions
            .iter()
            .copied()
            .fold(Self::hep(), Self::with_hep_dimension);
        tracing::debug!(
            dimensions = ?table.dimensions().collect::<Vec<_>>(),
            "dimension table configured"
        );
        table
    }

    pub fn with(mut self, dimension: BaseDimension, unit: BaseUnit) -> Self {
        self.units.insert(dimension, unit);
        self
    }

    pub fn with_hep_dimension(self, dimension: BaseDimension) -> Self {
        let unit = dimension.hep_base_unit();
        self.with(dimension, unit)
    }

    pub fn get(&self, dimension: BaseDimension) -> Option<&BaseUnit> {
        self.units.get(&dimension)
    }

    pub fn supports(&self, dimension: BaseDimension) -> bool {
        self.units.contains_key(&dimension)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = BaseDimension> + '_ {
        self.units.keys().copied()
    }

    /// SI magnitude of the HEP composite unit with the given dimensionality.
    fn composite(
        &self,
        dimensionality: &Dimensionality,
        input: impl Fn() -> String,
    ) -> BridgeResult<f64> {
        dimensionality
            .iter()
            .try_fold(1.0, |acc, (dimension, exponent)| match self.get(dimension) {
                Some(unit) => Ok(acc * unit.si_value.powi(exponent)),
                None => {
                    let input = input();
                    tracing::warn!(%dimension, %input, "unsupported dimension");
                    Err(BridgeError::UnsupportedDimension { dimension, input })
                }
            })
    }

    /// Convert a `uom` quantity or bare unit into a plain HEP base-system
    /// number.
    pub fn to_base_system<M: Measurable>(&self, measure: M) -> BridgeResult<f64> {
        let measure = measure.into_measure();
        let dimensionality = Dimensionality::of::<M::Dimension>();
        let composite = self.composite(&dimensionality, || measure.to_string())?;
        let value = measure.quantity().value / composite;
        tracing::debug!(%dimensionality, value, "converted to base system");
        Ok(value)
    }

    /// Interpret `value` as a HEP base-system number of the target unit's
    /// dimensionality and express it in that unit.
    pub fn from_base_system<D>(&self, value: f64, target: UnitRef<D>) -> BridgeResult<Converted<D>>
    where
        D: uom::si::Dimension + ?Sized,
    {
        let dimensionality = Dimensionality::of::<D>();
        let composite = self.composite(&dimensionality, || target.abbreviation().to_string())?;
        let quantity = Quantity::<D, SI<f64>, f64> {
            dimension: PhantomData,
            units: PhantomData,
            value: value * composite,
        };
        tracing::debug!(%dimensionality, value, unit = target.abbreviation(), "converted from base system");
        Ok(Converted::new(quantity, target))
    }
}
