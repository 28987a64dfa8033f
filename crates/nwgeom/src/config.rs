//! Configuration settings for an extraction run. Settings come from the
//! command line and, optionally, a TOML file given with `--config`. Anything
//! set on the command line takes precedence over the file.

use std::{fs::read_to_string, path::Path};

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};


/// Extract geometries from NWChem output files and write them in the XYZ
/// format. By default one XYZ file is written per output file.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// NWChem output file(s)
    #[arg(value_parser, required = true)]
    pub files: Vec<String>,

    /// Prefix for output filenames
    #[arg(long)]
    pub prefix: Option<String>,

    /// Write a separate XYZ file for each geometry
    #[arg(long, default_value_t = false)]
    pub separate: bool,

    /// Write one XYZ file per NWChem output file. This is the default
    #[arg(long, default_value_t = false)]
    pub together: bool,

    /// Don't write one XYZ file per NWChem output file
    #[arg(long, default_value_t = false, conflicts_with = "together")]
    pub no_together: bool,

    /// Write one XYZ file for all NWChem output files
    #[arg(long, default_value_t = false)]
    pub alltogether: bool,

    /// Load default settings from a TOML file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the resolved configuration as JSON and exit
    #[arg(short, long, default_value_t = false, hide = true)]
    pub json: bool,
}

/// The settings that can be given in a TOML file. Every field is optional,
/// and missing fields fall back to the command-line defaults.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Prefix for output filenames
    prefix: Option<String>,

    /// Write a separate XYZ file for each geometry
    separate: Option<bool>,

    /// Write one XYZ file per NWChem output file
    together: Option<bool>,

    /// Write one XYZ file for all NWChem output files
    alltogether: Option<bool>,
}

impl RawConfig {
    pub fn load(filename: impl AsRef<Path>) -> anyhow::Result<Self> {
        let filename = filename.as_ref();
        let contents = read_to_string(filename).with_context(|| {
            format!("failed to read config file {}", filename.display())
        })?;
        toml::from_str(&contents).with_context(|| {
            format!("failed to parse config file {}", filename.display())
        })
    }
}

/// The fully-resolved settings for a run
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct Config {
    /// the output files to extract geometries from, in order
    pub files: Vec<String>,

    /// prepended to the name of every output file
    pub prefix: String,

    /// write `{prefix}{basename}_{count:04}.xyz` for every geometry
    pub separate: bool,

    /// write `{prefix}{basename}.xyz` for every input file
    pub together: bool,

    /// write `{prefix}.xyz` containing every geometry
    pub alltogether: bool,
}

impl Config {
    /// Combine `args` with the config file it names, if any
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let raw = match &args.config {
            Some(f) => RawConfig::load(f)?,
            None => RawConfig::default(),
        };
        Ok(Self::merge(args, raw))
    }

    /// Combine `args` with the values from a config file. String values from
    /// the command line replace the file's, a strategy flag set on the
    /// command line turns that strategy on, and `--no-together` turns
    /// `together` off.
    pub fn merge(args: &Args, raw: RawConfig) -> Self {
        let together = if args.no_together {
            false
        } else {
            args.together || raw.together.unwrap_or(true)
        };
        Self {
            files: args.files.clone(),
            prefix: args.prefix.clone().or(raw.prefix).unwrap_or_default(),
            separate: args.separate || raw.separate.unwrap_or(false),
            together,
            alltogether: args.alltogether || raw.alltogether.unwrap_or(false),
        }
    }
}
