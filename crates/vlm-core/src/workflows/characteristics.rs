use super::evaluate;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use serde::Serialize;
use tracing::{info, instrument};

const LIFT_CURVE_ANGLES_DEG: [f64; 2] = [0.0, 5.0];
const SPAN_EFFICIENCY_ANGLE_DEG: f64 = 7.0;
/// Empirical correction applied to the span efficiency after the fuselage factor.
const SPAN_EFFICIENCY_DIVISOR: f64 = 1.05 * 1.05;

/// Linear lift curve of the clean wing, `CL = cl0 + cl_alpha * alpha` with `alpha` in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiftCurve {
    pub cl0: f64,
    pub cl_alpha: f64,
}

/// Lift-curve estimate of the clean wing, corrected for fuselage carry-over lift.
#[instrument(skip_all, name = "lift_curve_workflow")]
pub fn lift_curve(
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<LiftCurve, EngineError> {
    let clean = clean_wing(config, LIFT_CURVE_ANGLES_DEG.to_vec());
    let result = evaluate::run(&clean, reporter)?;

    let ratio = config.wing.fuselage_span_ratio();
    let k_fus = 1.0 + 0.025 * ratio - 0.025 * ratio * ratio;
    let cl: Vec<f64> = result.points.iter().map(|p| p.wing.cl * k_fus).collect();

    let delta_alpha = (LIFT_CURVE_ANGLES_DEG[1] - LIFT_CURVE_ANGLES_DEG[0]).to_radians();
    let curve = LiftCurve {
        cl0: cl[0],
        cl_alpha: (cl[1] - cl[0]) / delta_alpha,
    };
    info!(cl0 = curve.cl0, cl_alpha = curve.cl_alpha, k_fus, "Lift curve estimated.");
    Ok(curve)
}

/// Span efficiency of the clean wing, corrected for the fuselage.
#[instrument(skip_all, name = "span_efficiency_workflow")]
pub fn span_efficiency(
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<f64, EngineError> {
    let clean = clean_wing(config, vec![SPAN_EFFICIENCY_ANGLE_DEG]);
    let result = evaluate::run(&clean, reporter)?;

    let ratio = config.wing.fuselage_span_ratio();
    let k_fus = 1.0 - 2.0 * ratio * ratio;
    let vlm_efficiency = result.points[0].wing.oswald;
    let efficiency = vlm_efficiency * k_fus / SPAN_EFFICIENCY_DIVISOR;

    info!(vlm_efficiency, k_fus, efficiency, "Span efficiency estimated.");
    Ok(efficiency)
}

/// The configured wing alone, flap retracted, at the given angles.
fn clean_wing(config: &AnalysisConfig, angles_of_attack_deg: Vec<f64>) -> AnalysisConfig {
    AnalysisConfig {
        horizontal_tail: None,
        angles_of_attack_deg,
        flap_deflection_deg: 0.0,
        ..config.clone()
    }
}
