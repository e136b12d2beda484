use super::horseshoe::{HorseshoeInfluence, horseshoe_influence};
use crate::core::geometry::mesh::Surface;
use nalgebra::DMatrix;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Aerodynamic influence coefficients of a symmetric surface.
///
/// Row `i` is the control point of right-side panel `i`; column `j` holds the combined effect of
/// right-side panel `j` and its mirror image, so the system is solved for the right half only.
#[derive(Debug, Clone, PartialEq)]
pub struct InfluenceMatrices {
    aic: DMatrix<f64>,
    wake: DMatrix<f64>,
}

impl InfluenceMatrices {
    /// Wraps precomputed matrices.
    ///
    /// # Panics
    ///
    /// Panics if the matrices are not square or differ in size.
    pub fn from_parts(aic: DMatrix<f64>, wake: DMatrix<f64>) -> Self {
        assert!(aic.is_square(), "AIC matrix must be square");
        assert_eq!(aic.shape(), wake.shape(), "AIC and wake matrices must match");
        Self { aic, wake }
    }

    /// Full influence matrix (bound segments and trailing legs).
    pub fn aic(&self) -> &DMatrix<f64> {
        &self.aic
    }

    /// Trailing-leg contribution alone, used for induced angles.
    pub fn wake(&self) -> &DMatrix<f64> {
        &self.wake
    }

    pub fn size(&self) -> usize {
        self.aic.nrows()
    }

    pub fn into_parts(self) -> (DMatrix<f64>, DMatrix<f64>) {
        (self.aic, self.wake)
    }
}

/// Builds the influence matrices of `surface`.
///
/// Every entry is an independent pairwise evaluation, so rows are computed in parallel when the
/// `parallel` feature is enabled.
#[instrument(skip_all, name = "influence_assembly", fields(surface = surface.kind().name()))]
pub fn assemble(surface: &Surface, singularity_tolerance: f64) -> InfluenceMatrices {
    let right = surface.right_panels();
    let left = surface.left_panels();
    let n = right.len();
    debug!(size = n, "Assembling influence matrices.");

    let row_for = |i: usize| -> Vec<HorseshoeInfluence> {
        let point = &right[i].control_point;
        right
            .iter()
            .zip(left)
            .map(|(r, l)| {
                horseshoe_influence(point, &r.bound_start, &r.bound_end, singularity_tolerance)
                    + horseshoe_influence(
                        point,
                        &l.bound_start,
                        &l.bound_end,
                        singularity_tolerance,
                    )
            })
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<HorseshoeInfluence>> = (0..n).map(row_for).collect();

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<HorseshoeInfluence>> = (0..n).into_par_iter().map(row_for).collect();

    let aic = DMatrix::from_fn(n, n, |i, j| rows[i][j].total);
    let wake = DMatrix::from_fn(n, n, |i, j| rows[i][j].wake);
    InfluenceMatrices { aic, wake }
}
