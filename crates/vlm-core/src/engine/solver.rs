use super::error::EngineError;
use crate::core::geometry::mesh::SurfaceKind;
use crate::core::vortex::influence::InfluenceMatrices;
use nalgebra::{DMatrix, DVector};
use tracing::{debug, instrument};

/// Circulation strength of every right-side panel for one angle of attack.
#[derive(Debug, Clone, PartialEq)]
pub struct Circulation {
    values: Vec<f64>,
}

impl Circulation {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Circulation of all panels in surface order: the right half followed by its mirror image.
    pub fn full_span(&self) -> Vec<f64> {
        let mut full = Vec::with_capacity(2 * self.values.len());
        full.extend_from_slice(&self.values);
        full.extend_from_slice(&self.values);
        full
    }
}

/// A surface whose influence matrix has been inverted.
///
/// Built from [`InfluenceMatrices`] by [`CirculationSolver::factorize`]; after that the inverse is
/// read-only and shared by every angle of attack.
#[derive(Debug, Clone)]
pub struct CirculationSolver {
    surface: SurfaceKind,
    inverse: DMatrix<f64>,
    wake: DMatrix<f64>,
    free_stream_velocity: f64,
}

impl CirculationSolver {
    /// Inverts the influence matrix.
    ///
    /// Fails with [`EngineError::SingularSystem`] when the LU pivots show the matrix is singular to
    /// working precision. Non-finite matrices (degenerate geometry) are not rejected here; their
    /// NaNs flow through to the coefficients.
    #[instrument(skip_all, name = "aic_factorization", fields(surface = surface.name()))]
    pub fn factorize(
        surface: SurfaceKind,
        matrices: InfluenceMatrices,
        free_stream_velocity: f64,
    ) -> Result<Self, EngineError> {
        let size = matrices.size();
        let (aic, wake) = matrices.into_parts();

        let lu = aic.lu();
        let pivots = lu.u().diagonal();
        let finite = pivots.iter().all(|p| p.is_finite());
        let (smallest, largest) = (pivots.amin(), pivots.amax());
        if finite && (largest == 0.0 || smallest <= largest * f64::EPSILON) {
            return Err(EngineError::SingularSystem { surface, size });
        }

        let inverse = lu
            .try_inverse()
            .ok_or(EngineError::SingularSystem { surface, size })?;
        debug!(size, smallest_pivot = smallest, "Influence matrix inverted.");

        Ok(Self {
            surface,
            inverse,
            wake,
            free_stream_velocity,
        })
    }

    pub fn surface(&self) -> SurfaceKind {
        self.surface
    }

    pub fn size(&self) -> usize {
        self.inverse.nrows()
    }

    pub fn free_stream_velocity(&self) -> f64 {
        self.free_stream_velocity
    }

    pub fn wake_matrix(&self) -> &DMatrix<f64> {
        &self.wake
    }

    /// Solves `gamma = -AIC^-1 * angles * V` for local flow angles in radians.
    pub fn solve(&self, angles: &[f64]) -> Result<Circulation, EngineError> {
        if angles.len() != self.size() {
            return Err(EngineError::DimensionMismatch {
                expected: self.size(),
                found: angles.len(),
            });
        }
        let rhs = DVector::from_column_slice(angles);
        let gamma = -(&self.inverse * rhs) * self.free_stream_velocity;
        Ok(Circulation {
            values: gamma.as_slice().to_vec(),
        })
    }

    /// Induced angle at every control point from the trailing legs alone.
    pub fn induced_angles(&self, circulation: &Circulation) -> Vec<f64> {
        let gamma = DVector::from_column_slice(circulation.as_slice());
        let induced = (&self.wake * gamma) / self.free_stream_velocity;
        induced.as_slice().to_vec()
    }
}

/// Local flow angle of every panel: geometric incidence plus per-panel local angles.
pub fn flow_angles(alpha_rad: f64, local_angles: &[f64]) -> Vec<f64> {
    local_angles.iter().map(|angle| angle + alpha_rad).collect()
}
