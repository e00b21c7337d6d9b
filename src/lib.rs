//! Spherical to Cartesian point converter.
//!
//! This crate provides tools for:
//! - Parsing line-oriented text files of spherical coordinate triples
//!   (phi, theta, r) with lenient per-line validation
//! - Converting spherical coordinates (degrees) to Cartesian points
//! - Writing the converted points as XYZ, CSV, VTK legacy PolyData and
//!   plain text files for visualization in ParaView
//!
//! # Example
//!
//! ```no_run
//! use polarconv::config::ConverterConfig;
//! use polarconv::pipeline::run_conversion;
//!
//! let config = ConverterConfig::default();
//! let report = run_conversion(&config).unwrap();
//! println!("{} points converted", report.points);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod pipeline;

pub use crate::config::{ConverterConfig, OutputConfig};
pub use crate::core::parser::{LineOutcome, ParseReport, SkipReason};
pub use crate::core::transforms::{spherical_to_cartesian, Point, Spherical};
pub use crate::core::writers::{write_csv, write_txt, write_vtk, write_xyz, WriteError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
