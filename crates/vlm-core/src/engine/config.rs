use crate::core::airfoil::camber::CamberModel;
use crate::core::geometry::mesh::MeshResolution;
use crate::core::geometry::planform::{TailGeometry, WingGeometry};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("At least one angle of attack is required")]
    EmptyAngleSweep,

    #[error("Invalid mesh resolution: {0}")]
    InvalidMesh(&'static str),
}

/// Panel count policy of a half-span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshConfig {
    pub chordwise_panels: usize,
    pub root_panels: usize,
    /// Panels shared by the two tapered segments.
    pub outer_panels: usize,
    /// Panels moved from the tapered segments to the root section when the wing has a break.
    pub break_extra_root_panels: usize,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            chordwise_panels: 19,
            root_panels: 3,
            outer_panels: 14,
            break_extra_root_panels: 5,
        }
    }
}

impl MeshConfig {
    pub fn resolution(&self, has_break: bool) -> MeshResolution {
        let (root, tapered) = if has_break {
            (
                self.root_panels + self.break_extra_root_panels,
                self.outer_panels.saturating_sub(self.break_extra_root_panels) / 2,
            )
        } else {
            (self.root_panels, self.outer_panels / 2)
        };
        MeshResolution::new(self.chordwise_panels, root, tapered, tapered)
    }

    /// Checks that every segment of the half-span receives at least one panel.
    pub fn validate(&self, has_break: bool) -> Result<(), ConfigError> {
        if self.chordwise_panels == 0 {
            return Err(ConfigError::InvalidMesh("chordwise panel count must be positive"));
        }
        if self.root_panels == 0 {
            return Err(ConfigError::InvalidMesh("root panel count must be positive"));
        }
        if self.outer_panels < 2 {
            return Err(ConfigError::InvalidMesh(
                "outer panel count must cover both tapered segments",
            ));
        }
        if has_break && self.break_extra_root_panels + 2 > self.outer_panels {
            return Err(ConfigError::InvalidMesh(
                "break panels leave no panels for the tapered segments",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Relative collinearity threshold below which a bound segment's influence is skipped.
    pub singularity_tolerance: f64,
    /// Empirical factor applied to the span efficiency.
    pub oswald_correction: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            singularity_tolerance: 1e-12,
            oswald_correction: 0.955,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirfoilConfig {
    /// Apply the NACA 230xx camber line to the wing; a flat plate otherwise.
    pub camber: bool,
    pub thickness_ratio: f64,
}

impl Default for AirfoilConfig {
    fn default() -> Self {
        Self {
            camber: true,
            thickness_ratio: 0.12,
        }
    }
}

impl AirfoilConfig {
    pub fn camber_model(&self) -> Option<CamberModel> {
        self.camber
            .then(|| CamberModel::naca230(self.thickness_ratio))
    }
}

pub struct FreeStream;

impl FreeStream {
    const MIN_VELOCITY: f64 = 0.01;

    /// Free-stream velocity for a Mach number, floored so that it never reaches zero.
    pub fn from_mach(mach: f64, speed_of_sound: f64) -> f64 {
        let velocity = speed_of_sound * mach;
        if velocity < Self::MIN_VELOCITY {
            warn!(mach, speed_of_sound, "Free-stream speed clamped to {} m/s.", Self::MIN_VELOCITY);
            return Self::MIN_VELOCITY;
        }
        velocity
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub wing: WingGeometry,
    pub horizontal_tail: Option<TailGeometry>,
    pub free_stream_velocity: f64,
    pub angles_of_attack_deg: Vec<f64>,
    pub flap_deflection_deg: f64,
    pub airfoil: AirfoilConfig,
    pub mesh: MeshConfig,
    pub solver: SolverConfig,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    wing: Option<WingGeometry>,
    horizontal_tail: Option<TailGeometry>,
    free_stream_velocity: Option<f64>,
    angles_of_attack_deg: Option<Vec<f64>>,
    flap_deflection_deg: Option<f64>,
    airfoil: Option<AirfoilConfig>,
    mesh: Option<MeshConfig>,
    solver: Option<SolverConfig>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wing(mut self, wing: WingGeometry) -> Self {
        self.wing = Some(wing);
        self
    }
    pub fn horizontal_tail(mut self, tail: Option<TailGeometry>) -> Self {
        self.horizontal_tail = tail;
        self
    }
    pub fn free_stream_velocity(mut self, velocity: f64) -> Self {
        self.free_stream_velocity = Some(velocity);
        self
    }
    pub fn angles_of_attack_deg(mut self, angles: Vec<f64>) -> Self {
        self.angles_of_attack_deg = Some(angles);
        self
    }
    pub fn flap_deflection_deg(mut self, deflection: f64) -> Self {
        self.flap_deflection_deg = Some(deflection);
        self
    }
    pub fn airfoil(mut self, airfoil: AirfoilConfig) -> Self {
        self.airfoil = Some(airfoil);
        self
    }
    pub fn mesh(mut self, mesh: MeshConfig) -> Self {
        self.mesh = Some(mesh);
        self
    }
    pub fn solver(mut self, solver: SolverConfig) -> Self {
        self.solver = Some(solver);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let angles_of_attack_deg = self
            .angles_of_attack_deg
            .ok_or(ConfigError::MissingParameter("angles_of_attack_deg"))?;
        if angles_of_attack_deg.is_empty() {
            return Err(ConfigError::EmptyAngleSweep);
        }
        let wing = self.wing.ok_or(ConfigError::MissingParameter("wing"))?;
        let mesh = self.mesh.unwrap_or_default();
        mesh.validate(wing.has_break())?;
        Ok(AnalysisConfig {
            wing,
            horizontal_tail: self.horizontal_tail,
            free_stream_velocity: self
                .free_stream_velocity
                .ok_or(ConfigError::MissingParameter("free_stream_velocity"))?,
            angles_of_attack_deg,
            flap_deflection_deg: self.flap_deflection_deg.unwrap_or(0.0),
            airfoil: self.airfoil.unwrap_or_default(),
            mesh,
            solver: self.solver.unwrap_or_default(),
        })
    }
}
