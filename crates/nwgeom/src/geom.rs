use std::{fmt::Display, io::Write};

use crate::atom::Atom;

/// A single geometry extracted from an output file. Beyond the atoms
/// themselves, a geometry remembers the file it was read from and its
/// position among the geometries in that file. `section` and `lattice` are
/// optional metadata, and setting `lattice` switches [Geometry::write] to the
/// extended XYZ format.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    source: String,
    count: usize,
    atoms: Vec<Atom>,
    section: Option<String>,
    lattice: Option<String>,
}

impl Geometry {
    pub fn new(
        source: impl Into<String>,
        count: usize,
        atoms: Vec<Atom>,
    ) -> Self {
        Self {
            source: source.into(),
            count,
            atoms,
            section: None,
            lattice: None,
        }
    }

    /// the name of the file this geometry was extracted from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// the 1-based instance number of this geometry within its source file
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// the atom lines of the XYZ representation, like `Li 1.0 2.0 3.0`
    pub fn atom_lines(&self) -> Vec<String> {
        self.atoms.iter().map(Atom::to_string).collect()
    }

    /// the part of the output file the geometry came from
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn set_section(&mut self, section: impl Into<String>) {
        self.section = Some(section.into());
    }

    /// the lattice specification for a geometry from a periodic calculation
    pub fn lattice(&self) -> Option<&str> {
        self.lattice.as_deref()
    }

    pub fn set_lattice(&mut self, lattice: impl Into<String>) {
        self.lattice = Some(lattice.into());
    }

    /// The XYZ comment line. This is empty for plain XYZ, or the extended XYZ
    /// header when a lattice has been set.
    pub fn comment(&self) -> String {
        match self.lattice() {
            Some(lattice) if !lattice.is_empty() => {
                format!("Lattice={lattice} Properties=species:S:1:pos:R:3")
            }
            _ => String::new(),
        }
    }

    /// Write `self` to `w` in XYZ format, or extended XYZ if a lattice is set.
    /// Plain XYZ is described at
    /// <https://en.wikipedia.org/wiki/XYZ_file_format> and extended XYZ at
    /// <https://www.ovito.org/docs/current/reference/file_formats/input/xyz.html#extended-xyz-format>.
    pub fn write(&self, w: &mut impl Write) -> std::io::Result<()> {
        write!(w, "{self}")
    }
}

impl Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.atoms.len())?;
        writeln!(f, "{}", self.comment())?;
        for atom in &self.atoms {
            writeln!(f, "{atom}")?;
        }
        Ok(())
    }
}
