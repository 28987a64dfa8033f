use std::fmt::Display;

use crate::units::Units;

/// A single atom from a coordinate block. The coordinates are always in
/// angstroms.
#[derive(Debug, Clone)]
pub struct Atom {
    pub symbol: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        let eps = 1e-8;
        let close = |a: f64, b: f64| (a - b).abs() < eps;
        self.symbol == other.symbol
            && close(self.x, other.x)
            && close(self.y, other.y)
            && close(self.z, other.z)
    }
}

impl Display for Atom {
    /// the atom line of an XYZ file, like `Li 1.0 2.0 3.0`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.symbol,
            coord_string(self.x),
            coord_string(self.y),
            coord_string(self.z),
        )
    }
}

impl Atom {
    pub fn new(symbol: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            symbol: symbol.into(),
            x,
            y,
            z,
        }
    }

    /// build an Atom from coordinates given in `units`, converting them to
    /// angstroms
    pub fn with_units(
        symbol: impl Into<String>,
        x: f64,
        y: f64,
        z: f64,
        units: Units,
    ) -> Self {
        Self::new(
            symbol,
            units.to_angstrom(x),
            units.to_angstrom(y),
            units.to_angstrom(z),
        )
    }

    pub fn coord(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Format `v` as the shortest string that parses back to the same value. The
/// result always carries a decimal point or an exponent, so 1 is written as
/// `1.0`, and magnitudes below 1e-4 or from 1e16 up use exponent notation with
/// at least two exponent digits, like `1.5e-05`. For magnitudes from about
/// 1e10 up, where more than one shortest string round-trips, the last digit
/// may differ from other shortest-representation formatters.
pub fn coord_string(v: f64) -> String {
    if v.is_nan() {
        return String::from("nan");
    } else if v.is_infinite() {
        return v.to_string();
    }
    let a = v.abs();
    if a != 0.0 && !(1e-4..1e16).contains(&a) {
        let s = format!("{v:e}");
        let Some((mantissa, exp)) = s.split_once('e') else {
            return s;
        };
        let Ok(exp) = exp.parse::<i32>() else {
            return s;
        };
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.abs());
    }
    let s = v.to_string();
    if s.contains('.') { s } else { s + ".0" }
}
