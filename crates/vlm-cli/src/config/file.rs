use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileWingConfig {
    pub aspect_ratio: Option<f64>,
    pub span: Option<f64>,
    pub root_chord: Option<f64>,
    pub tip_chord: Option<f64>,
    pub root_y: Option<f64>,
    pub kink_span_ratio: Option<f64>,
    pub flap_span_ratio: Option<f64>,
    pub fuselage_max_width: Option<f64>,
    pub mac_length: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileTailConfig {
    pub span: Option<f64>,
    pub root_chord: Option<f64>,
    pub tip_chord: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileFlightConfig {
    pub velocity: Option<f64>,
    pub mach: Option<f64>,
    pub speed_of_sound: Option<f64>,
    pub angles_of_attack: Option<Vec<f64>>,
    pub flap_deflection: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileAirfoilConfig {
    pub camber: Option<bool>,
    pub thickness_ratio: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileMeshConfig {
    pub chordwise_panels: Option<usize>,
    pub root_panels: Option<usize>,
    pub outer_panels: Option<usize>,
    pub break_extra_root_panels: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSolverConfig {
    pub singularity_tolerance: Option<f64>,
    pub oswald_correction: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub wing: Option<FileWingConfig>,
    pub horizontal_tail: Option<FileTailConfig>,
    pub flight: Option<FileFlightConfig>,
    pub airfoil: Option<FileAirfoilConfig>,
    pub mesh: Option<FileMeshConfig>,
    pub solver: Option<FileSolverConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
