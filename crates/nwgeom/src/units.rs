use std::{fmt::Display, str::FromStr};

use crate::Error;

/// the number of bohr in one angstrom
pub const BOHR_PER_ANGSTROM: f64 = 1.889725989;

/// The unit systems NWChem prints coordinates in. Coordinates are always
/// stored in angstroms after reading, so each variant knows its conversion
/// factor to angstroms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Units {
    AtomicUnits,
    Angstrom,
    Nanometer,
}

impl Units {
    /// the factor to multiply a coordinate in `self` by to get angstroms
    pub const fn factor(&self) -> f64 {
        match self {
            Units::AtomicUnits => 1.0 / BOHR_PER_ANGSTROM,
            Units::Angstrom => 1.0,
            Units::Nanometer => 10.0,
        }
    }

    /// convert `value` in `self` to angstroms
    #[inline]
    pub fn to_angstrom(&self, value: f64) -> f64 {
        value * self.factor()
    }
}

impl Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Units::AtomicUnits => "au",
                Units::Angstrom => "angstrom",
                Units::Nanometer => "nm",
            }
        )
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "au" => Ok(Units::AtomicUnits),
            "angstrom" => Ok(Units::Angstrom),
            "nm" => Ok(Units::Nanometer),
            _ => Err(Error::UnknownUnits(s.to_owned())),
        }
    }
}
