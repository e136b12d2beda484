use crate::core::geometry::mesh::Surface;
use std::f64::consts::PI;

/// Far-field downwash of a surface, sampled at the control point of each right-side strip.
#[derive(Debug, Clone, PartialEq)]
pub struct WakeField {
    stations: Vec<f64>,
    downwash: Vec<f64>,
}

impl WakeField {
    /// # Panics
    ///
    /// Panics if `stations` and `downwash` differ in length or are empty.
    pub fn new(stations: Vec<f64>, downwash: Vec<f64>) -> Self {
        assert_eq!(
            stations.len(),
            downwash.len(),
            "every wake station needs one downwash value"
        );
        assert!(!stations.is_empty(), "a wake field needs at least one station");
        Self { stations, downwash }
    }

    /// Trefftz-plane downwash of the surface for the right-side circulation `circulation`.
    ///
    /// Each strip sheds its chordwise-summed circulation as two trailing lines at its spanwise
    /// edges; the mirrored strip sheds the opposite pair on the left. Every line acts as a 2D
    /// point vortex in the far-field plane.
    pub fn from_circulation(surface: &Surface, circulation: &[f64]) -> Self {
        let ny = surface.resolution().spanwise();
        let edges: Vec<f64> = surface.stations().iter().map(|s| s.y).collect();

        let mut strip_circulation = vec![0.0; ny];
        for row in circulation.chunks(ny) {
            for (total, gamma) in strip_circulation.iter_mut().zip(row) {
                *total += gamma;
            }
        }

        let stations = surface.strip_control_y();
        let downwash = stations
            .iter()
            .map(|&y| {
                strip_circulation
                    .iter()
                    .enumerate()
                    .map(|(k, &gamma)| {
                        let (inner, outer) = (edges[k], edges[k + 1]);
                        let factor = gamma / (2.0 * PI);
                        -factor / (y - inner) + factor / (y - outer) + factor / (y + inner)
                            - factor / (y + outer)
                    })
                    .sum()
            })
            .collect();

        Self { stations, downwash }
    }

    pub fn stations(&self) -> &[f64] {
        &self.stations
    }

    pub fn downwash(&self) -> &[f64] {
        &self.downwash
    }

    /// Downwash at spanwise position `y`.
    ///
    /// Interpolates linearly between the bracketing stations, found as the first station strictly
    /// outboard of `y` and its predecessor. Positions inboard of the first station or outboard of
    /// the last take the value of that end station.
    pub fn interpolate(&self, y: f64) -> f64 {
        match self.stations.iter().position(|&station| station > y) {
            Some(0) => self.downwash[0],
            Some(k) => {
                let (y0, y1) = (self.stations[k - 1], self.stations[k]);
                let (w0, w1) = (self.downwash[k - 1], self.downwash[k]);
                w0 + (w1 - w0) / (y1 - y0) * (y - y0)
            }
            None => self.downwash[self.downwash.len() - 1],
        }
    }

    /// Downwash at every right-side panel of `target`, one value per strip repeated on each
    /// chordwise row.
    pub fn project_onto(&self, target: &Surface) -> Vec<f64> {
        let strip_values: Vec<f64> = target
            .strip_control_y()
            .into_iter()
            .map(|y| self.interpolate(y))
            .collect();
        let rows = target.resolution().chordwise;
        let mut projected = Vec::with_capacity(rows * strip_values.len());
        for _ in 0..rows {
            projected.extend_from_slice(&strip_values);
        }
        projected
    }
}
