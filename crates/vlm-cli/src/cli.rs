use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Vortex Lattice Contributors",
    version,
    about = "VLM CLI - Estimate wing and horizontal tail aerodynamic coefficients with a vortex lattice method.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to assemble influence matrices.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the wing (and horizontal tail) over an angle-of-attack sweep.
    Analyze(AnalyzeArgs),
    /// Estimate the clean-wing lift curve and span efficiency.
    Characteristics(CharacteristicsArgs),
}

/// Configuration source and overrides shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the aircraft configuration file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Override the free-stream velocity in m/s.
    #[arg(long, value_name = "FLOAT")]
    pub velocity: Option<f64>,

    /// Treat the wing as a flat plate, ignoring the airfoil camber line.
    #[arg(long)]
    pub no_camber: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S mesh.chordwise-panels=12
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Angle of attack in degrees. Repeat to sweep several angles; replaces the file's list.
    #[arg(short, long = "alpha", value_name = "DEG", allow_negative_numbers = true)]
    pub alphas: Vec<f64>,

    /// Override the flap deflection in degrees.
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub flap: Option<f64>,

    /// Write the operating points to a CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `characteristics` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CharacteristicsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}
