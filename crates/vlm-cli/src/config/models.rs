use std::path::PathBuf;
use vortex_lattice::engine::config::AnalysisConfig;

/// Sweep overrides only the `analyze` command offers.
#[derive(Debug, Default, Clone)]
pub struct SweepOverrides {
    pub alphas: Vec<f64>,
    pub flap: Option<f64>,
}

pub struct AppConfig {
    pub source: PathBuf,
    pub core_config: AnalysisConfig,
}
