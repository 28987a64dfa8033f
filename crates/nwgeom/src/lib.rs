//! Extract the geometries printed in NWChem output files and convert them to
//! the XYZ format

use std::{error, fmt::Display, io::ErrorKind, path::Path};

use anyhow::Context;
use log::debug;

pub mod atom;
pub mod config;
pub mod extract;
pub mod geom;
pub mod output;
pub mod units;

pub use atom::Atom;
pub use config::Config;
pub use extract::{extract_files, extract_from};
pub use geom::Geometry;
pub use units::Units;

/// print the formatted message to stderr and exit with status 1
#[macro_export]
macro_rules! die {
    ($($t:tt)*) => {{
        eprintln!($($t)*);
        std::process::exit(1)
    }};
}

/// Everything that can go wrong while reading geometries. All of these are
/// fatal to a run
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// a unit system other than `au`, `angstrom`, or `nm`
    UnknownUnits(String),

    /// a line inside a coordinate block without exactly six fields
    TokenCount {
        source: String,
        line: usize,
        text: String,
    },

    /// a coordinate field that is not a float
    BadCoordinate {
        source: String,
        line: usize,
        token: String,
    },

    /// failed to open or read the named file
    Io(String, ErrorKind),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownUnits(units) => write!(f, "Unknown units: {units}"),
            Error::TokenCount { source, line, text } => write!(
                f,
                "Invalid number of tokens for coordinates at {source}:{line}\n\
                 Line is: {text}"
            ),
            Error::BadCoordinate {
                source,
                line,
                token,
            } => write!(
                f,
                "failed to parse coordinate `{token}` as f64 at {source}:{line}"
            ),
            Error::Io(path, kind) => {
                write!(f, "failed to read {path}: {kind}")
            }
        }
    }
}

impl error::Error for Error {}

/// Extract the geometries from every file in `config` and write them into
/// `dir` with each of the requested output strategies. Nothing is written
/// unless every input file is read successfully.
pub fn run(config: &Config, dir: impl AsRef<Path>) -> anyhow::Result<()> {
    let dir = dir.as_ref();
    debug!("{config:?}");
    let geoms = extract_files(config.files.as_slice())?;
    if config.separate {
        output::write_separate(dir, &config.prefix, &geoms)
            .context("failed to write separate geometries")?;
    }
    if config.together {
        output::write_together(dir, &config.prefix, &geoms)
            .context("failed to write geometries by file")?;
    }
    if config.alltogether {
        output::write_all_together(dir, &config.prefix, &geoms)
            .context("failed to write all geometries")?;
    }
    Ok(())
}
