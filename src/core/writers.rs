//! Output serializers for converted point sets.
//!
//! Four independent, order-preserving writers over the same point slice:
//! - XYZ (count, comment, one `C x y z r` line per point)
//! - CSV with the full record (X, Y, Z, Radius, Phi, Theta)
//! - VTK legacy ASCII PolyData with Radius/Phi/Theta scalar arrays
//! - plain whitespace-separated text
//!
//! Each writer opens and closes its file exactly once. Coordinates are
//! written with 6 decimal places except in the plain text format, which
//! keeps default float formatting.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use super::transforms::Point;

/// Fixed comment line in the XYZ output.
pub const XYZ_COMMENT: &str = "Converted from polar coordinates";

/// Title line in the VTK output header.
pub const VTK_TITLE: &str = "Polar to Cartesian Conversion";

/// Errors that can occur during write operations.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Failed to create parent directories.
    #[error("failed to create parent directories for '{path}': {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Failed to create or open file for writing.
    #[error("failed to create file '{path}': {source}")]
    CreateFile {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Failed to write data to file.
    #[error("failed to write to file '{path}': {source}")]
    WriteFile {
        path: String,
        #[source]
        source: io::Error,
    },

    /// CSV writing error.
    #[error("CSV write error for '{path}': {source}")]
    CsvError {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Result type for write operations.
pub type Result<T> = std::result::Result<T, WriteError>;

/// Creates parent directories for a file path if they don't exist.
fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| WriteError::CreateDirectory {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }
    Ok(())
}

/// Creates a buffered writer for the given path.
fn create_buffered_writer(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| WriteError::CreateFile {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(BufWriter::new(file))
}

/// Write points in XYZ format.
///
/// Line 1 holds the point count, line 2 a fixed comment, followed by one
/// `C <x> <y> <z> <r>` line per point with 6 decimal places.
///
/// # Arguments
///
/// * `path` - Output file path (parent directories will be created if needed)
/// * `points` - Converted points in output order
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_xyz(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent_dirs(path)?;
    let mut writer = create_buffered_writer(path)?;

    xyz_body(&mut writer, points).map_err(|e| WriteError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })
}

fn xyz_body<W: Write>(writer: &mut W, points: &[Point]) -> io::Result<()> {
    writeln!(writer, "{}", points.len())?;
    writeln!(writer, "{}", XYZ_COMMENT)?;

    for p in points {
        writeln!(writer, "C {:.6} {:.6} {:.6} {:.6}", p.x, p.y, p.z, p.r)?;
    }

    writer.flush()
}

/// Write points as CSV with the full record.
///
/// Header `X,Y,Z,Radius,Phi,Theta`, then one row per point with all six
/// values at 6 decimal places.
///
/// # Arguments
///
/// * `path` - Output file path (parent directories will be created if needed)
/// * `points` - Converted points in output order
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_csv(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent_dirs(path)?;

    let file = File::create(path).map_err(|e| WriteError::CreateFile {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut csv_writer = csv::Writer::from_writer(BufWriter::new(file));

    let csv_error = |e: csv::Error| WriteError::CsvError {
        path: path.display().to_string(),
        source: e,
    };

    csv_writer
        .write_record(["X", "Y", "Z", "Radius", "Phi", "Theta"])
        .map_err(csv_error)?;

    for p in points {
        csv_writer
            .write_record(&[
                format!("{:.6}", p.x),
                format!("{:.6}", p.y),
                format!("{:.6}", p.z),
                format!("{:.6}", p.r),
                format!("{:.6}", p.phi),
                format!("{:.6}", p.theta),
            ])
            .map_err(|e| WriteError::CsvError {
                path: path.display().to_string(),
                source: e,
            })?;
    }

    csv_writer.flush().map_err(|e| WriteError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Write points as a VTK legacy ASCII PolyData file.
///
/// The file holds the standard header block, the point coordinates, one
/// vertex cell per point, and three scalar arrays (Radius, Phi, Theta)
/// so ParaView can color the cloud by any of them.
///
/// # Arguments
///
/// * `path` - Output file path (parent directories will be created if needed)
/// * `points` - Converted points in output order
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_vtk(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent_dirs(path)?;
    let mut writer = create_buffered_writer(path)?;

    vtk_body(&mut writer, points).map_err(|e| WriteError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })
}

fn vtk_body<W: Write>(writer: &mut W, points: &[Point]) -> io::Result<()> {
    let n = points.len();

    writeln!(writer, "# vtk DataFile Version 3.0")?;
    writeln!(writer, "{}", VTK_TITLE)?;
    writeln!(writer, "ASCII")?;
    writeln!(writer, "DATASET POLYDATA")?;

    writeln!(writer, "POINTS {} float", n)?;
    for p in points {
        writeln!(writer, "{:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }

    // One single-point vertex cell per point: n cells, 2n list entries
    writeln!(writer, "VERTICES {} {}", n, n * 2)?;
    for i in 0..n {
        writeln!(writer, "1 {}", i)?;
    }

    writeln!(writer, "POINT_DATA {}", n)?;
    vtk_scalars(writer, "Radius", points, |p| p.r)?;
    vtk_scalars(writer, "Phi", points, |p| p.phi)?;
    vtk_scalars(writer, "Theta", points, |p| p.theta)?;

    writer.flush()
}

fn vtk_scalars<W: Write, F: Fn(&Point) -> f64>(
    writer: &mut W,
    name: &str,
    points: &[Point],
    component: F,
) -> io::Result<()> {
    writeln!(writer, "SCALARS {} float 1", name)?;
    writeln!(writer, "LOOKUP_TABLE default")?;
    for p in points {
        writeln!(writer, "{:.6}", component(p))?;
    }
    Ok(())
}

/// Write points as plain text, one `<x> <y> <z> <r>` line per point.
///
/// Unlike the other writers this keeps default float formatting rather
/// than a fixed precision.
///
/// # Arguments
///
/// * `path` - Output file path (parent directories will be created if needed)
/// * `points` - Converted points in output order
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_txt(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent_dirs(path)?;
    let mut writer = create_buffered_writer(path)?;

    txt_body(&mut writer, points).map_err(|e| WriteError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })
}

fn txt_body<W: Write>(writer: &mut W, points: &[Point]) -> io::Result<()> {
    for p in points {
        writeln!(writer, "{} {} {} {}", p.x, p.y, p.z, p.r)?;
    }

    writer.flush()
}
