//! Locate the coordinate blocks in NWChem output and read them into
//! [Geometry]s.
//!
//! NWChem prints a geometry like this:
//!
//! ```text
//!          Output coordinates in angstroms (scale by  1.000000000E+00 to convert to angstroms)
//!
//!   No.       Tag          Charge          X              Y              Z
//!  ---- ---------------- ---------- -------------- -------------- --------------
//!     1 O                    8.0000     0.00000000     0.00000000     0.11726921
//!     2 H                    1.0000     0.75698224     0.00000000    -0.46907685
//!
//! ```
//!
//! The marker line determines the units of the block. The three lines after it
//! are always skipped, and the atoms run until the next blank line or the end
//! of the file.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::OnceLock,
};

use log::{debug, info, warn};
use regex::Regex;

use crate::{Error, atom::Atom, geom::Geometry, units::Units};

#[cfg(test)]
mod tests;

/// the number of header lines between a marker and the first atom
const HEADER_LINES: usize = 3;

static MARKERS: OnceLock<[(Regex, Units); 2]> = OnceLock::new();

/// Return the units of the coordinate block started by `line`, or None if
/// `line` does not start a block.
pub fn marker(line: &str) -> Option<Units> {
    let markers = MARKERS.get_or_init(|| {
        [
            (
                Regex::new(r"^\s*Output coordinates in angstroms").unwrap(),
                Units::Angstrom,
            ),
            (
                Regex::new(r"^\s*Output coordinates in a\.u\.").unwrap(),
                Units::AtomicUnits,
            ),
        ]
    });
    markers
        .iter()
        .find(|(re, _)| re.is_match(line))
        .map(|(_, units)| *units)
}

/// Extract all of the geometries from `files`, in order. The first error in
/// any file aborts the whole extraction.
pub fn extract_files<P: AsRef<Path>>(
    files: &[P],
) -> Result<Vec<Geometry>, Error> {
    let mut geoms = Vec::new();
    for file in files {
        let path = file.as_ref();
        let source = path.to_string_lossy().to_string();
        let f = File::open(path)
            .map_err(|e| Error::Io(source.clone(), e.kind()))?;
        let n = extract_from(&source, BufReader::new(f), &mut geoms)?;
        if n == 0 {
            warn!("no geometries found in {source}");
        } else {
            info!("extracted {n} geometries from {source}");
        }
    }
    Ok(geoms)
}

/// Scan `reader` for coordinate blocks, appending a [Geometry] to `geoms` for
/// each of them. `source` is recorded on every geometry and used in error
/// messages. Returns the number of geometries found.
pub fn extract_from(
    source: &str,
    reader: impl BufRead,
    geoms: &mut Vec<Geometry>,
) -> Result<usize, Error> {
    let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));
    let mut count = 0;
    while let Some((_, line)) = lines.next() {
        let line = line.map_err(|e| Error::Io(source.to_owned(), e.kind()))?;
        let Some(units) = marker(&line) else {
            continue;
        };
        count += 1;
        debug!("found geometry {count} in {units} in {source}");
        for (_, line) in lines.by_ref().take(HEADER_LINES) {
            line.map_err(|e| Error::Io(source.to_owned(), e.kind()))?;
        }
        let atoms = read_block(source, units, &mut lines)?;
        geoms.push(Geometry::new(source, count, atoms));
    }
    Ok(count)
}

/// Read atoms from `lines` until a blank line, which is consumed, or the end
/// of the input. Every other line must have exactly six fields: the index, the
/// symbol, the charge, and the three coordinates.
fn read_block<I>(
    source: &str,
    units: Units,
    lines: &mut I,
) -> Result<Vec<Atom>, Error>
where
    I: Iterator<Item = (usize, std::io::Result<String>)>,
{
    let mut atoms = Vec::new();
    for (n, line) in lines {
        let line = line.map_err(|e| Error::Io(source.to_owned(), e.kind()))?;
        let fields: Vec<_> = line.split_whitespace().collect();
        match fields.len() {
            0 => break,
            6 => {
                let coord = |i: usize| {
                    fields[i].parse::<f64>().map_err(|_| {
                        Error::BadCoordinate {
                            source: source.to_owned(),
                            line: n,
                            token: fields[i].to_owned(),
                        }
                    })
                };
                atoms.push(Atom::with_units(
                    fields[1],
                    coord(3)?,
                    coord(4)?,
                    coord(5)?,
                    units,
                ));
            }
            _ => {
                return Err(Error::TokenCount {
                    source: source.to_owned(),
                    line: n,
                    text: line.clone(),
                });
            }
        }
    }
    Ok(atoms)
}
