//! Command-line interface for the converter.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::PathBuf;
use std::time::Instant;

use crate::config::ConverterConfig;
use crate::pipeline::{run_conversion, ConversionReport};

#[derive(Parser)]
#[command(name = "polarconv")]
#[command(about = "Convert spherical coordinate files to Cartesian point clouds", version)]
pub struct Cli {
    /// Path to YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Create a spinner for indeterminate operations
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print a summary box
fn print_summary(title: &str, items: &[(&str, String)]) {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ {:<62} ║", title);
    println!("╠══════════════════════════════════════════════════════════════╣");
    for (key, value) in items {
        let display_value = if value.len() > 39 {
            format!("{}...", &value[..36])
        } else {
            value.clone()
        };
        println!("║ {:<20}: {:<39} ║", key, display_value);
    }
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
}

/// Print the fixed ParaView usage instructions for the written files.
fn print_usage_hints(report: &ConversionReport) {
    let vtk = report.outputs[2].display();
    let csv = report.outputs[1].display();
    let xyz = report.outputs[0].display();

    println!("How to use in ParaView:");
    println!();
    println!("Method 1 (recommended):");
    println!("  1. Open ParaView");
    println!("  2. File -> Open -> select {}", vtk);
    println!("  3. Click Apply");
    println!("  4. Done! Points are colored by radius");
    println!();
    println!("Method 2:");
    println!("  1. Open ParaView");
    println!("  2. File -> Open -> select {}", csv);
    println!("  3. In 'Open Data With...' choose CSV Reader");
    println!("  4. Click Apply");
    println!("  5. Filters -> Alphabetical -> Table To Points");
    println!("  6. Set: X Column = X, Y Column = Y, Z Column = Z");
    println!("  7. Click Apply");
    println!();
    println!("Method 3:");
    println!("  1. Open ParaView");
    println!("  2. File -> Open -> select {}", xyz);
    println!("  3. In 'Open Data With...' choose XYZ Reader");
    println!("  4. Click Apply");
    println!();
}

pub fn run() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity (must come first)
    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .format_timestamp_secs()
        .init();

    // Load config
    let config = match &cli.config {
        Some(path) => match ConverterConfig::from_yaml(path) {
            Ok(cfg) => {
                info!("Loaded config from: {}", path.display());
                cfg
            }
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}, using defaults",
                    path.display(),
                    e
                );
                ConverterConfig::default()
            }
        },
        None => ConverterConfig::default(),
    };

    let start = Instant::now();

    println!("Converting spherical coordinates to Cartesian...");
    println!("Input: {}", config.input.display());

    let spinner = create_spinner("Converting coordinates...");

    match run_conversion(&config) {
        Ok(report) => {
            spinner.finish_and_clear();

            let output_files: Vec<String> = report
                .outputs
                .iter()
                .map(|p| p.display().to_string())
                .collect();

            print_summary(
                "Conversion Complete",
                &[
                    ("Input file", config.input.display().to_string()),
                    ("Lines processed", report.lines_read.to_string()),
                    ("Points converted", report.points.to_string()),
                    ("Lines skipped", report.skipped.to_string()),
                    ("Errors", report.errors.to_string()),
                    ("Output files", output_files.join(", ")),
                    ("Duration", format!("{:.2?}", start.elapsed())),
                ],
            );

            let range = |b: crate::core::stats::Bounds| format!("{:.2} ... {:.2}", b.min, b.max);
            print_summary(
                "Coordinate Statistics",
                &[
                    ("X", range(report.stats.x)),
                    ("Y", range(report.stats.y)),
                    ("Z", range(report.stats.z)),
                    ("Radius", range(report.stats.r)),
                ],
            );

            print_usage_hints(&report);
        }
        Err(e) => {
            spinner.finish_and_clear();
            error!("Conversion failed: {}", e);
            std::process::exit(1);
        }
    }
}
