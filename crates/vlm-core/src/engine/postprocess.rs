use super::config::SolverConfig;
use super::solver::{Circulation, CirculationSolver};
use crate::core::geometry::mesh::Surface;
use crate::core::geometry::planform::WingGeometry;
use serde::Serialize;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WingCoefficients {
    pub cl: f64,
    pub cdi: f64,
    pub cm: f64,
    pub oswald: f64,
}

/// Pressure coefficient of every right-side panel, `cp = -2 gamma / (V * chord)`.
pub fn pressure_coefficients(
    surface: &Surface,
    circulation: &Circulation,
    free_stream_velocity: f64,
) -> Vec<f64> {
    surface
        .right_panels()
        .iter()
        .zip(circulation.as_slice())
        .map(|(panel, gamma)| -2.0 / free_stream_velocity * gamma / panel.chord)
        .collect()
}

/// Area-weighted average of `values` over the right half-span.
pub fn area_average(surface: &Surface, values: impl IntoIterator<Item = f64>) -> f64 {
    let panels = surface.right_panels();
    let weighted: f64 = panels
        .iter()
        .zip(values)
        .map(|(panel, value)| value * panel.area)
        .sum();
    weighted / surface.half_span_area()
}

pub fn lift_coefficient(surface: &Surface, cp: &[f64]) -> f64 {
    area_average(surface, cp.iter().map(|c| -c))
}

/// Integrates panel loads of the main wing into its coefficients.
#[derive(Debug, Clone, Copy)]
pub struct AerodynamicPostProcessor {
    aspect_ratio: f64,
    moment_reference_x: f64,
    oswald_correction: f64,
}

impl AerodynamicPostProcessor {
    /// Pitching moment is taken about the quarter of the mean aerodynamic chord.
    pub fn new(wing: &WingGeometry, solver: &SolverConfig) -> Self {
        Self {
            aspect_ratio: wing.aspect_ratio,
            moment_reference_x: wing.mac_length / 4.0,
            oswald_correction: solver.oswald_correction,
        }
    }

    pub fn wing_coefficients(
        &self,
        surface: &Surface,
        solver: &CirculationSolver,
        circulation: &Circulation,
    ) -> WingCoefficients {
        let cp = pressure_coefficients(surface, circulation, solver.free_stream_velocity());
        let cl = lift_coefficient(surface, &cp);

        let induced = solver.induced_angles(circulation);
        let cdi = area_average(surface, cp.iter().zip(&induced).map(|(c, a)| c * a));

        let cm = area_average(
            surface,
            cp.iter()
                .zip(surface.right_panels())
                .map(|(c, panel)| c * (panel.control_point.x - self.moment_reference_x)),
        );

        let oswald = self.oswald_efficiency(cl, cdi);

        WingCoefficients {
            cl,
            cdi,
            cm,
            oswald,
        }
    }

    /// `e = CL^2 / (pi * AR * CDi)` scaled by the empirical correction.
    pub fn oswald_efficiency(&self, cl: f64, cdi: f64) -> f64 {
        cl * cl / (PI * self.aspect_ratio * cdi) * self.oswald_correction
    }
}
