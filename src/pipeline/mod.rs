//! End-to-end conversion pipeline.
//!
//! One strictly sequential pass: parse the input file, convert the
//! surviving triples, halt if nothing survived, then write the four output
//! formats in a fixed order. Per-line problems never abort the run; a
//! missing input file, an empty result or a write failure does.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};
use thiserror::Error;

use crate::config::ConverterConfig;
use crate::core::parser;
use crate::core::stats::{bounds_of, CloudStats};
use crate::core::transforms::convert_all;
use crate::core::writers;

/// Fatal pipeline conditions.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("No valid points in input, nothing to save")]
    NoValidPoints,
}

/// Summary of a completed conversion run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Total input lines read.
    pub lines_read: usize,
    /// Lines dropped with a logged reason.
    pub skipped: usize,
    /// Lines that failed the float parse.
    pub errors: usize,
    /// Points converted and written.
    pub points: usize,
    /// Component-wise min/max over the converted points.
    pub stats: CloudStats,
    /// The four output files, in the order they were written.
    pub outputs: Vec<PathBuf>,
}

/// Run the full conversion described by the configuration.
///
/// # Arguments
///
/// * `config` - Input path and the four output paths
///
/// # Returns
///
/// A `ConversionReport` with line counters, point count and bounds.
///
/// # Errors
///
/// Fails when the input file is missing, when no line yields a valid
/// point, or when one of the output files cannot be written. In the first
/// two cases no output file has been created.
pub fn run_conversion(config: &ConverterConfig) -> Result<ConversionReport> {
    let parsed = parser::parse_file(&config.input)
        .with_context(|| format!("Failed to read input file: {}", config.input.display()))?;

    info!(
        "Parsed {} lines: {} triples, {} skipped, {} errors",
        parsed.lines_read,
        parsed.triples.len(),
        parsed.skipped,
        parsed.errors
    );

    let points = convert_all(&parsed.triples);

    let stats = bounds_of(&points).ok_or(ConvertError::NoValidPoints)?;

    let outputs = [
        &config.outputs.xyz,
        &config.outputs.csv,
        &config.outputs.vtk,
        &config.outputs.txt,
    ];

    writers::write_xyz(&config.outputs.xyz, &points)?;
    debug!("Wrote {}", config.outputs.xyz.display());

    writers::write_csv(&config.outputs.csv, &points)?;
    debug!("Wrote {}", config.outputs.csv.display());

    writers::write_vtk(&config.outputs.vtk, &points)?;
    debug!("Wrote {}", config.outputs.vtk.display());

    writers::write_txt(&config.outputs.txt, &points)?;
    debug!("Wrote {}", config.outputs.txt.display());

    Ok(ConversionReport {
        lines_read: parsed.lines_read,
        skipped: parsed.skipped,
        errors: parsed.errors,
        points: points.len(),
        stats,
        outputs: outputs.iter().map(|p| p.to_path_buf()).collect(),
    })
}
