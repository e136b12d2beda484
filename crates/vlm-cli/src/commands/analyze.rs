use crate::cli::AnalyzeArgs;
use crate::config::{SweepOverrides, build_config};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use vortex_lattice::engine::progress::ProgressReporter;
use vortex_lattice::workflows::evaluate::{self, AnalysisResult};

/// One CSV line per operating point.
#[derive(Serialize)]
struct CsvRecord {
    alpha_deg: f64,
    cl: f64,
    cdi: f64,
    cm: f64,
    oswald: f64,
    tail_cl: Option<f64>,
}

pub fn run(args: AnalyzeArgs, quiet: bool) -> Result<()> {
    let sweep = SweepOverrides {
        alphas: args.alphas.clone(),
        flap: args.flap,
    };
    let app = build_config(&args.config, &sweep)?;
    info!(
        config = %app.source.display(),
        angles = app.core_config.angles_of_attack_deg.len(),
        "Configuration loaded."
    );

    let progress_handler = CliProgressHandler::for_terminal(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting vortex lattice analysis...");
    let result = evaluate::run(&app.core_config, &reporter)?;

    println!("{}", format_table(&result));

    if let Some(output) = &args.output {
        write_csv(output, &result)?;
        info!(path = %output.display(), "Operating points written.");
        println!("✓ Operating points written to: {}", output.display());
    }
    Ok(())
}

fn format_table(result: &AnalysisResult) -> String {
    let header = format!(
        "{:>8} {:>10} {:>10} {:>10} {:>8} {:>10}",
        "alpha", "CL", "CDi", "Cm", "e", "CL_tail"
    );
    let rows = result.points.iter().map(|point| {
        let tail = point
            .tail_cl
            .map_or_else(|| "-".to_string(), |cl| format!("{cl:.5}"));
        format!(
            "{:>8.2} {:>10.5} {:>10.6} {:>10.5} {:>8.4} {:>10}",
            point.alpha_deg, point.wing.cl, point.wing.cdi, point.wing.cm, point.wing.oswald, tail
        )
    });
    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}

fn write_records<W: std::io::Write>(writer: W, result: &AnalysisResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in &result.points {
        csv_writer.serialize(CsvRecord {
            alpha_deg: point.alpha_deg,
            cl: point.wing.cl,
            cdi: point.wing.cdi,
            cm: point.wing.cm,
            oswald: point.wing.oswald,
            tail_cl: point.tail_cl,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_csv(path: &Path, result: &AnalysisResult) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_records(file, result)
}
