//! Configuration types for the converter.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output file locations for the four serializers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// XYZ output path
    #[serde(default = "default_xyz_output")]
    pub xyz: PathBuf,

    /// CSV output path
    #[serde(default = "default_csv_output")]
    pub csv: PathBuf,

    /// VTK legacy PolyData output path
    #[serde(default = "default_vtk_output")]
    pub vtk: PathBuf,

    /// Plain text output path
    #[serde(default = "default_txt_output")]
    pub txt: PathBuf,
}

fn default_xyz_output() -> PathBuf {
    PathBuf::from("output.xyz")
}

fn default_csv_output() -> PathBuf {
    PathBuf::from("output.csv")
}

fn default_vtk_output() -> PathBuf {
    PathBuf::from("output.vtk")
}

fn default_txt_output() -> PathBuf {
    PathBuf::from("output.txt")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            xyz: default_xyz_output(),
            csv: default_csv_output(),
            vtk: default_vtk_output(),
            txt: default_txt_output(),
        }
    }
}

/// Main converter configuration.
///
/// The defaults reproduce the zero-configuration behavior: read `data.csv`
/// from the working directory and write the four `output.*` files next
/// to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Input file with one phi/theta/r triple per line
    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default)]
    pub outputs: OutputConfig,
}

fn default_input() -> PathBuf {
    PathBuf::from("data.csv")
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            outputs: OutputConfig::default(),
        }
    }
}

impl ConverterConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ConverterConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
