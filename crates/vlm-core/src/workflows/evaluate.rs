use crate::core::airfoil::camber::FlapDeflection;
use crate::core::geometry::mesh::{MeshResolution, Surface, SurfaceMeshBuilder};
use crate::core::vortex::influence;
use crate::core::wake::WakeField;
use crate::engine::config::{AnalysisConfig, ConfigError};
use crate::engine::error::EngineError;
use crate::engine::postprocess::{
    AerodynamicPostProcessor, WingCoefficients, lift_coefficient, pressure_coefficients,
};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::solver::{CirculationSolver, flow_angles};
use serde::Serialize;
use tracing::{debug, info, instrument, trace};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatingPoint {
    pub alpha_deg: f64,
    pub wing: WingCoefficients,
    /// Lift coefficient of the horizontal tail in the wing's wake, when a tail is configured.
    pub tail_cl: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub points: Vec<OperatingPoint>,
}

/// A meshed surface together with its factorized influence matrix.
struct SolvedSurface {
    surface: Surface,
    solver: CirculationSolver,
}

impl SolvedSurface {
    fn prepare(surface: Surface, config: &AnalysisConfig) -> Result<Self, EngineError> {
        let matrices = influence::assemble(&surface, config.solver.singularity_tolerance);
        let solver = CirculationSolver::factorize(
            surface.kind(),
            matrices,
            config.free_stream_velocity,
        )?;
        Ok(Self { surface, solver })
    }
}

/// Evaluates the wing, and the horizontal tail when present, at every configured angle of attack.
///
/// Both influence matrices are factorized once up front; each angle then costs two
/// matrix-vector products per surface.
#[instrument(skip_all, name = "evaluation_workflow")]
pub fn run(
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisResult, EngineError> {
    if config.angles_of_attack_deg.is_empty() {
        return Err(ConfigError::EmptyAngleSweep.into());
    }
    config.mesh.validate(config.wing.has_break())?;

    // === Phase 1: Meshing and factorization ===
    let resolution = config.mesh.resolution(config.wing.has_break());
    let (wing, tail) = reporter.in_phase("Influence Matrices", || {
        info!(
            chordwise = resolution.chordwise,
            spanwise = resolution.spanwise(),
            unknowns = resolution.half_span_panels(),
            "Building surfaces."
        );
        let wing = SolvedSurface::prepare(build_wing_surface(config, resolution), config)?;
        let tail = config
            .horizontal_tail
            .as_ref()
            .map(|tail| {
                let surface = SurfaceMeshBuilder::new(resolution).build_tail(tail);
                SolvedSurface::prepare(surface, config)
            })
            .transpose()?;
        reporter.report(Progress::Message(format!(
            "{} unknowns per surface",
            resolution.half_span_panels()
        )));
        Ok::<_, EngineError>((wing, tail))
    })?;

    // === Phase 2: Angle-of-attack sweep ===
    let post = AerodynamicPostProcessor::new(&config.wing, &config.solver);
    let points = reporter.in_phase("Angle-of-Attack Sweep", || {
        reporter.report(Progress::TaskStart {
            total_steps: config.angles_of_attack_deg.len() as u64,
        });
        let mut points = Vec::with_capacity(config.angles_of_attack_deg.len());
        for &alpha_deg in &config.angles_of_attack_deg {
            let point = evaluate_point(alpha_deg, &wing, tail.as_ref(), &post)?;
            debug!(
                alpha_deg,
                cl = point.wing.cl,
                cdi = point.wing.cdi,
                cm = point.wing.cm,
                tail_cl = point.tail_cl,
                "Operating point evaluated."
            );
            points.push(point);
            reporter.report(Progress::TaskIncrement);
        }
        reporter.report(Progress::TaskFinish);
        Ok::<_, EngineError>(points)
    })?;

    info!(points = points.len(), "Evaluation complete.");
    Ok(AnalysisResult { points })
}

/// Wing mesh with camber and flap angles applied to its panels.
fn build_wing_surface(config: &AnalysisConfig, resolution: MeshResolution) -> Surface {
    let mut surface = SurfaceMeshBuilder::new(resolution).build_wing(&config.wing);

    let flap = (config.flap_deflection_deg != 0.0)
        .then(|| FlapDeflection::for_wing(&config.wing, config.flap_deflection_deg));

    let angles = match config.airfoil.camber_model() {
        Some(model) => {
            debug!(airfoil = %model.designation(), "Applying camber line.");
            Some(model.local_angles(&surface, flap.as_ref()))
        }
        None => flap.map(|flap| flap.angle_increments(&surface)),
    };
    if let Some(angles) = angles {
        surface.apply_local_angles(&angles);
    }
    surface
}

#[instrument(level = "debug", skip_all, name = "operating_point", fields(alpha_deg = alpha_deg))]
fn evaluate_point(
    alpha_deg: f64,
    wing: &SolvedSurface,
    tail: Option<&SolvedSurface>,
    post: &AerodynamicPostProcessor,
) -> Result<OperatingPoint, EngineError> {
    let alpha = alpha_deg.to_radians();

    let angles = flow_angles(alpha, &wing.surface.local_angles());
    let circulation = wing.solver.solve(&angles)?;
    let coefficients = post.wing_coefficients(&wing.surface, &wing.solver, &circulation);

    let tail_cl = match tail {
        Some(tail) => {
            let wake = WakeField::from_circulation(&wing.surface, circulation.as_slice());
            Some(tail_lift(alpha, &wake, tail)?)
        }
        None => None,
    };
    trace!(cl = coefficients.cl, cdi = coefficients.cdi, ?tail_cl, "Operating point solved.");

    Ok(OperatingPoint {
        alpha_deg,
        wing: coefficients,
        tail_cl,
    })
}

/// Tail lift with the wing's downwash added to the geometric angle of attack.
fn tail_lift(alpha: f64, wake: &WakeField, tail: &SolvedSurface) -> Result<f64, EngineError> {
    let velocity = tail.solver.free_stream_velocity();
    let induced: Vec<f64> = wake
        .project_onto(&tail.surface)
        .into_iter()
        .map(|w| w / velocity)
        .collect();
    let angles: Vec<f64> = flow_angles(alpha, &tail.surface.local_angles())
        .into_iter()
        .zip(induced)
        .map(|(angle, induced)| angle + induced)
        .collect();

    let circulation = tail.solver.solve(&angles)?;
    let cp = pressure_coefficients(&tail.surface, &circulation, velocity);
    Ok(lift_coefficient(&tail.surface, &cp))
}
