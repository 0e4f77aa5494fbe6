use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use uom::si::Dimension;
use uom::typenum::Integer;

/// Fundamental dimensions of the SI system, in `uom`'s order.
#[derive(Serialize, Deserialize, PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Copy, Debug)]
#[serde(rename_all = "snake_case")]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseDimension {
    pub const LIST: &'static [Self] = &[
        Self::Length,
        Self::Mass,
        Self::Time,
        Self::Current,
        Self::Temperature,
        Self::AmountOfSubstance,
        Self::LuminousIntensity,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Mass => "mass",
            Self::Time => "time",
            Self::Current => "current",
            Self::Temperature => "temperature",
            Self::AmountOfSubstance => "substance",
            Self::LuminousIntensity => "luminosity",
        }
    }

    /// Symbol of the SI base unit `uom` stores this dimension in.
    pub const fn si_symbol(&self) -> &'static str {
        match self {
            Self::Length => "m",
            Self::Mass => "kg",
            Self::Time => "s",
            Self::Current => "A",
            Self::Temperature => "K",
            Self::AmountOfSubstance => "mol",
            Self::LuminousIntensity => "cd",
        }
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[{}]", self.name())
    }
}

/// Exponents of the base dimensions of a quantity.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub struct Dimensionality([i32; 7]);

impl Dimensionality {
    pub const DIMENSIONLESS: Self = Self([0; 7]);

    /// Read the exponents of a `uom` dimension from its type-level integers.
    pub fn of<D: Dimension + ?Sized>() -> Self {
        Self([
            D::L::to_i32(),
            D::M::to_i32(),
            D::T::to_i32(),
            D::I::to_i32(),
            D::Th::to_i32(),
            D::N::to_i32(),
            D::J::to_i32(),
        ])
    }

    pub fn exponent(&self, dimension: BaseDimension) -> i32 {
        self.0[dimension as usize]
    }

    /// Dimensions with a nonzero exponent.
    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, i32)> + '_ {
        BaseDimension::LIST
            .iter()
            .map(|&dimension| (dimension, self.exponent(dimension)))
            .filter(|&(_, exponent)| exponent != 0)
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }
}

impl Display for Dimensionality {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let join = |positive: bool| {
            self.iter()
                .filter(|&(_, p)| (p > 0) == positive)
                .map(|(d, p)| format!("{}{}", d.si_symbol(), superscript(p.abs())))
                .collect::<Vec<String>>()
                .join("\u{22c5}")
        };

        let numerator = join(true);
        let denominator = join(false);
        match (numerator.is_empty(), denominator.is_empty()) {
            (true, true) => write!(f, "1"),
            (false, true) => write!(f, "{numerator}"),
            (true, false) => write!(f, "1/{denominator}"),
            (false, false) => write!(f, "{numerator}/{denominator}"),
        }
    }
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}', '\u{2076}',
    '\u{2077}', '\u{2078}', '\u{2079}',
];

fn superscript(val: i32) -> String {
    if val != 1 {
        val.to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(n) => SS[n as usize],
                None => c,
            })
            .collect()
    } else {
        String::new()
    }
}
