//! Conversion between `uom` quantities and the HEP base system.
//!
//! The HEP system stores every quantity as a plain number in its base units,
//! while `uom` keeps the magnitude (in SI storage units) and the
//! dimensionality apart. The bridge maps each SI base dimension to a HEP
//! composite unit through a [`DimensionTable`]:
//!
//! | Dimension | HEP unit       |
//! |-----------|----------------|
//! | length    | `mm`           |
//! | time      | `ns`           |
//! | mass      | `MeV·mm⁻²·ns²` |
//! | current   | `eplus/ns`     |
//!
//! ```
//! use hepunits::bridge::{from_base_system, to_base_system};
//! use hepunits::uom::si::f64::{Length, Velocity};
//! use hepunits::uom::si::length::centimeter;
//! use hepunits::uom::si::velocity::meter_per_second;
//! use hepunits::{unit_ref, C_LIGHT};
//!
//! assert!((to_base_system(Length::new::<centimeter>(3.0)).unwrap() - 30.0).abs() < 1e-12);
//!
//! let c = from_base_system(C_LIGHT, unit_ref!(Velocity, meter_per_second)).unwrap();
//! assert!((c.magnitude() / 299_792_458.0 - 1.0).abs() < 1e-14);
//! ```

mod dimension;
mod table;

use std::fmt::{self, Debug, Display, Formatter};

use uom::si::{Dimension, Quantity, SI};

use crate::error::BridgeResult;

pub use dimension::{BaseDimension, Dimensionality};
pub use table::{BaseUnit, DimensionTable};

/// Build a [`UnitRef`] from a `uom` quantity type and one of its units:
/// `unit_ref!(Velocity, meter_per_second)`.
#[macro_export]
macro_rules! unit_ref {
    ($quantity:ty, $unit:ty) => {
        $crate::bridge::UnitRef::new(
            <$quantity>::new::<$unit>(0.0),
            <$quantity>::new::<$unit>(1.0),
            <$unit as $crate::uom::si::Unit>::abbreviation(),
        )
    };
}

/// A bare `uom` unit of dimension `D`, described by where its zero and its
/// unit magnitude fall in SI storage units.
pub struct UnitRef<D: Dimension + ?Sized> {
    zero: Quantity<D, SI<f64>, f64>,
    one: Quantity<D, SI<f64>, f64>,
    abbreviation: &'static str,
}

impl<D: Dimension + ?Sized> UnitRef<D> {
    pub fn new(
        zero: Quantity<D, SI<f64>, f64>,
        one: Quantity<D, SI<f64>, f64>,
        abbreviation: &'static str,
    ) -> Self {
        Self {
            zero,
            one,
            abbreviation,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        self.abbreviation
    }

    /// One of this unit as a quantity.
    pub fn quantity(&self) -> Quantity<D, SI<f64>, f64> {
        self.one
    }

    /// Magnitude of `quantity` expressed in this unit.
    pub fn magnitude_of(&self, quantity: &Quantity<D, SI<f64>, f64>) -> f64 {
        (quantity.value - self.zero.value) / (self.one.value - self.zero.value)
    }
}

impl<D: Dimension + ?Sized> Clone for UnitRef<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension + ?Sized> Copy for UnitRef<D> {}

impl<D: Dimension + ?Sized> Debug for UnitRef<D> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("UnitRef")
            .field("abbreviation", &self.abbreviation)
            .field("si_value", &self.one.value)
            .finish()
    }
}

/// Input of a conversion: either a bare unit or a quantity.
pub enum Measure<D: Dimension + ?Sized> {
    Unit(UnitRef<D>),
    Quantity(Quantity<D, SI<f64>, f64>),
}

impl<D: Dimension + ?Sized> Measure<D> {
    /// The measure as a quantity; a bare unit counts as one of itself.
    pub fn quantity(&self) -> Quantity<D, SI<f64>, f64> {
        match self {
            Measure::Unit(unit) => unit.quantity(),
            Measure::Quantity(quantity) => *quantity,
        }
    }
}

impl<D: Dimension + ?Sized> Display for Measure<D> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Measure::Unit(unit) => write!(f, "{}", unit.abbreviation()),
            Measure::Quantity(quantity) => {
                write!(f, "{} {}", quantity.value, Dimensionality::of::<D>())
            }
        }
    }
}

/// Anything the bridge accepts as input.
pub trait Measurable {
    type Dimension: Dimension + ?Sized;

    fn into_measure(self) -> Measure<Self::Dimension>;
}

impl<D: Dimension + ?Sized> Measurable for Measure<D> {
    type Dimension = D;

    fn into_measure(self) -> Measure<D> {
        self
    }
}

impl<D: Dimension + ?Sized> Measurable for UnitRef<D> {
    type Dimension = D;

    fn into_measure(self) -> Measure<D> {
        Measure::Unit(self)
    }
}

impl<D: Dimension + ?Sized> Measurable for Quantity<D, SI<f64>, f64> {
    type Dimension = D;

    fn into_measure(self) -> Measure<D> {
        Measure::Quantity(self)
    }
}

/// Result of [`from_base_system`]: a quantity together with the unit it was
/// requested in.
pub struct Converted<D: Dimension + ?Sized> {
    quantity: Quantity<D, SI<f64>, f64>,
    unit: UnitRef<D>,
}

impl<D: Dimension + ?Sized> Converted<D> {
    pub(crate) fn new(quantity: Quantity<D, SI<f64>, f64>, unit: UnitRef<D>) -> Self {
        Self { quantity, unit }
    }

    /// Magnitude in the requested unit.
    pub fn magnitude(&self) -> f64 {
        self.unit.magnitude_of(&self.quantity)
    }

    pub fn quantity(&self) -> Quantity<D, SI<f64>, f64> {
        self.quantity
    }

    pub fn unit(&self) -> UnitRef<D> {
        self.unit
    }
}

impl<D: Dimension + ?Sized> Display for Converted<D> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.magnitude(), self.unit.abbreviation())
    }
}

impl<D: Dimension + ?Sized> Debug for Converted<D> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Converted")
            .field("magnitude", &self.magnitude())
            .field("unit", &self.unit)
            .finish()
    }
}

/// Convert a `uom` quantity or bare unit to a HEP base-system number using
/// the standard dimension table.
pub fn to_base_system<M: Measurable>(measure: M) -> BridgeResult<f64> {
    DimensionTable::standard().to_base_system(measure)
}

/// Express a HEP base-system number in a `uom` unit using the standard
/// dimension table.
pub fn from_base_system<D: Dimension + ?Sized>(
    value: f64,
    target: UnitRef<D>,
) -> BridgeResult<Converted<D>> {
    DimensionTable::standard().from_base_system(value, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{C_LIGHT, H_PLANCK};
    use crate::error::BridgeError;
    use crate::units::{COULOMB, OHM, TESLA};
    use crate::unit_ref;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::electric_charge::coulomb;
    use uom::si::electrical_resistance::ohm;
    use uom::si::energy::joule;
    use uom::si::f64::*;
    use uom::si::length::{centimeter, meter, millimeter};
    use uom::si::magnetic_flux_density::tesla;
    use uom::si::thermodynamic_temperature::kelvin;
    use uom::si::time::second;
    use uom::si::velocity::meter_per_second;

    #[test]
    fn test_lengths() {
        assert_relative_eq!(
            to_base_system(Length::new::<millimeter>(3.0)).unwrap(),
            3.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            to_base_system(Length::new::<centimeter>(3.0)).unwrap(),
            30.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_bare_unit_counts_as_one() {
        assert_relative_eq!(
            to_base_system(unit_ref!(ElectricCharge, coulomb)).unwrap(),
            COULOMB,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            to_base_system(unit_ref!(Length, meter)).unwrap(),
            1000.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_defining_constants() {
        let c = to_base_system(Velocity::new::<meter_per_second>(299_792_458.0)).unwrap();
        assert_relative_eq!(c, C_LIGHT, max_relative = 1e-14);

        let h = Energy::new::<joule>(6.62607015e-34) * Time::new::<second>(1.0);
        assert_relative_eq!(to_base_system(h).unwrap(), H_PLANCK, max_relative = 1e-14);

        let e = ElectricCharge::new::<coulomb>(crate::units::E_SI);
        assert_relative_eq!(to_base_system(e).unwrap(), 1.0, max_relative = 1e-15);
    }

    #[test]
    fn test_derived_units() {
        assert_relative_eq!(
            to_base_system(ElectricalResistance::new::<ohm>(2.0)).unwrap(),
            2.0 * OHM,
            max_relative = 1e-14
        );
        let field = from_base_system(TESLA, unit_ref!(MagneticFluxDensity, tesla)).unwrap();
        assert_relative_eq!(field.magnitude(), 1.0, max_relative = 1e-14);
    }

    #[test]
    fn test_from_base_system() {
        let c = from_base_system(C_LIGHT, unit_ref!(Velocity, meter_per_second)).unwrap();
        assert_relative_eq!(c.magnitude(), 299_792_458.0, max_relative = 1e-14);
        assert_relative_eq!(
            c.quantity().get::<meter_per_second>(),
            299_792_458.0,
            max_relative = 1e-14
        );
        assert_eq!(c.unit().abbreviation(), "m/s");
    }

    #[test]
    fn test_unsupported_dimension() {
        let err = to_base_system(ThermodynamicTemperature::new::<kelvin>(1.0)).unwrap_err();
        let BridgeError::UnsupportedDimension { dimension, input } = &err;
        assert_eq!(*dimension, BaseDimension::Temperature);
        assert_eq!(input, "1 K");
        assert_eq!(err.to_string(), "Unsupported dimension [temperature] in 1 K");

        let err = from_base_system(1.0, unit_ref!(ThermodynamicTemperature, kelvin)).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::UnsupportedDimension { dimension: BaseDimension::Temperature, .. }
        ));
    }

    #[test]
    fn test_measure_display() {
        let measure = Velocity::new::<meter_per_second>(2.5).into_measure();
        assert_eq!(measure.to_string(), "2.5 m/s");
        assert_eq!(unit_ref!(Length, centimeter).into_measure().to_string(), "cm");
    }

    proptest! {
        #[test]
        fn roundtrip_length(value in -1.0e6f64..1.0e6) {
            let unit = unit_ref!(Length, centimeter);
            let quantity = Length::new::<centimeter>(value);
            let base = to_base_system(quantity).unwrap();
            let back = from_base_system(base, unit).unwrap();
            prop_assert!((back.magnitude() - value).abs() <= 1e-12 * value.abs().max(1.0));
        }

        #[test]
        fn roundtrip_energy(value in 1.0e-30f64..1.0e3) {
            let quantity = Energy::new::<joule>(value);
            let base = to_base_system(quantity).unwrap();
            let back = from_base_system(base, unit_ref!(Energy, joule)).unwrap();
            prop_assert!((back.quantity().value - value).abs() <= 1e-12 * value);
        }
    }
}
