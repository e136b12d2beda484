use crate::cli::CharacteristicsArgs;
use crate::config::{SweepOverrides, build_config};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use tracing::info;
use vortex_lattice::engine::progress::ProgressReporter;
use vortex_lattice::workflows::characteristics;

pub fn run(args: CharacteristicsArgs, quiet: bool) -> Result<()> {
    let app = build_config(&args.config, &SweepOverrides::default())?;
    info!(config = %app.source.display(), "Configuration loaded.");

    let progress_handler = CliProgressHandler::for_terminal(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Estimating clean-wing characteristics...");
    let curve = characteristics::lift_curve(&app.core_config, &reporter)?;
    let efficiency = characteristics::span_efficiency(&app.core_config, &reporter)?;

    println!("CL0       = {:.5}", curve.cl0);
    println!("CL_alpha  = {:.5} /rad", curve.cl_alpha);
    println!("Oswald e  = {:.5}", efficiency);
    Ok(())
}
