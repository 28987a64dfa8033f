//! Write extracted geometries to XYZ files. There are three ways to do this,
//! any combination of which may be used in a single run:
//!
//! - [write_separate]: one file per geometry
//! - [write_together]: one file per source file
//! - [write_all_together]: one file for everything

use std::{
    collections::HashSet,
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{info, warn};

use crate::geom::Geometry;


/// The base name of `filename`: the last path component with everything from
/// the first `.` on removed. For example, the base name of
/// `/share/structure.txt` is `structure`, and the base name of
/// `name.part.xyz` is `name`.
pub fn basename(filename: &str) -> &str {
    let last = filename.rsplit('/').next().unwrap_or(filename);
    last.split('.').next().unwrap_or(last)
}

fn create(path: &Path, append: bool) -> std::io::Result<BufWriter<File>> {
    let f = if append {
        OpenOptions::new().append(true).create(true).open(path)?
    } else {
        File::create(path)?
    };
    Ok(BufWriter::new(f))
}

fn write_one(
    path: &Path,
    append: bool,
    geom: &Geometry,
) -> std::io::Result<()> {
    let mut w = create(path, append)?;
    geom.write(&mut w)?;
    w.flush()
}

/// Write each geometry in `geoms` to its own file in `dir`, named
/// `{prefix}{basename}_{count:04}.xyz`. Existing files are overwritten.
/// Returns the paths written.
pub fn write_separate(
    dir: impl AsRef<Path>,
    prefix: &str,
    geoms: &[Geometry],
) -> std::io::Result<Vec<PathBuf>> {
    let mut ret = Vec::with_capacity(geoms.len());
    for geom in geoms {
        let filename = format!(
            "{prefix}{}_{:04}.xyz",
            basename(geom.source()),
            geom.count()
        );
        let path = dir.as_ref().join(filename);
        write_one(&path, false, geom)?;
        info!("wrote {}", path.display());
        ret.push(path);
    }
    Ok(ret)
}

/// Write the geometries from each source file to a single file in `dir`, named
/// `{prefix}{basename}.xyz`. A geometry whose file name differs from the
/// previous geometry's truncates the file; one with the same name appends to
/// it. This assumes the geometries from one source are contiguous in `geoms`,
/// which is true of anything returned by [crate::extract_files]. If a base
/// name does come back after a different one, its earlier contents are
/// overwritten, and a warning is logged. Returns the distinct paths written,
/// in order of first appearance.
pub fn write_together(
    dir: impl AsRef<Path>,
    prefix: &str,
    geoms: &[Geometry],
) -> std::io::Result<Vec<PathBuf>> {
    let mut ret = Vec::new();
    let mut seen = HashSet::new();
    let mut old: Option<PathBuf> = None;
    for geom in geoms {
        let filename = format!("{prefix}{}.xyz", basename(geom.source()));
        let path = dir.as_ref().join(filename);
        let append = old.as_ref() == Some(&path);
        if !append {
            if seen.insert(path.clone()) {
                ret.push(path.clone());
            } else {
                warn!(
                    "geometries for {} are not contiguous, overwriting \
                     earlier geometries",
                    path.display()
                );
            }
        }
        write_one(&path, append, geom)?;
        if !append {
            info!("wrote {}", path.display());
        }
        old = Some(path);
    }
    Ok(ret)
}

/// Write every geometry in `geoms` to the single file `{prefix}.xyz` in `dir`,
/// overwriting it if it exists. Returns the path written.
pub fn write_all_together(
    dir: impl AsRef<Path>,
    prefix: &str,
    geoms: &[Geometry],
) -> std::io::Result<PathBuf> {
    let path = dir.as_ref().join(format!("{prefix}.xyz"));
    let mut w = create(&path, false)?;
    for geom in geoms {
        geom.write(&mut w)?;
    }
    w.flush()?;
    info!("wrote {}", path.display());
    Ok(path)
}
