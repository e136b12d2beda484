use crate::core::geometry::mesh::Surface;
use crate::core::geometry::planform::WingGeometry;

/// NACA 230xx mean camber line.
///
/// The camber line of the five-digit family is fully determined by its first three digits;
/// `thickness_ratio` only completes the designation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamberModel {
    /// Leading-edge constant of the forward cubic segment.
    pub k1: f64,
    /// Chord fraction where the cubic segment joins the straight aft segment.
    pub p: f64,
    pub m: f64,
    pub thickness_ratio: f64,
}

impl CamberModel {
    pub fn naca230(thickness_ratio: f64) -> Self {
        Self {
            k1: 15.957,
            p: 0.15,
            m: 0.2025,
            thickness_ratio,
        }
    }

    pub fn designation(&self) -> String {
        format!("NACA 230{:02}", (self.thickness_ratio * 100.0).round() as i64)
    }

    /// Camber height at each chordwise station, scaled by `chord`.
    pub fn camber_heights(&self, chord: f64, stations: &[f64]) -> Vec<f64> {
        let (k1, p, m) = (self.k1, self.p, self.m);
        stations
            .iter()
            .map(|&x| {
                let xr = x / chord;
                let z = if xr < p {
                    k1 / 6.0 * (xr.powi(3) - 3.0 * m * xr.powi(2) + m.powi(2) * (3.0 - m) * xr)
                } else {
                    k1 * m.powi(3) / 6.0 * (1.0 - xr)
                };
                z * chord
            })
            .collect()
    }

    /// Local flow angle of each chordwise row of the surface from the root-chord camber line,
    /// broadcast to every strip of that row.
    pub fn clean_angles(&self, surface: &Surface) -> Vec<f64> {
        let stations = surface.root_chordwise_stations();
        let root_chord = surface.stations()[0].chord;
        let heights = self.camber_heights(root_chord, &stations);
        broadcast_rows(surface, &row_angles(&stations, &heights))
    }

    /// Clean camber angles plus the increment of an optional flap deflection.
    pub fn local_angles(&self, surface: &Surface, flap: Option<&FlapDeflection>) -> Vec<f64> {
        let mut angles = self.clean_angles(surface);
        if let Some(flap) = flap {
            for (angle, increment) in angles.iter_mut().zip(flap.angle_increments(surface)) {
                *angle += increment;
            }
        }
        angles
    }
}

impl Default for CamberModel {
    fn default() -> Self {
        Self::naca230(0.12)
    }
}

/// A plain flap rotating the camber line aft of `hinge_x` by `angle` radians.
///
/// Spanwise it covers the tapered flapped section of the wing and any root strip whose inboard
/// edge lies outboard of the fuselage side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlapDeflection {
    pub angle: f64,
    pub hinge_x: f64,
    pub inboard_y: f64,
}

impl FlapDeflection {
    pub fn for_wing(wing: &WingGeometry, deflection_deg: f64) -> Self {
        Self {
            angle: deflection_deg.to_radians(),
            hinge_x: (1.0 - wing.flap_span_ratio) * wing.root_chord,
            inboard_y: wing.fuselage_half_width(),
        }
    }

    /// Angle increment per right-side panel; zero outside the flap.
    pub fn angle_increments(&self, surface: &Surface) -> Vec<f64> {
        let stations = surface.root_chordwise_stations();
        let sin_delta = self.angle.sin();
        let offsets: Vec<f64> = stations
            .iter()
            .map(|&x| {
                if x > self.hinge_x {
                    -sin_delta * (x - self.hinge_x)
                } else {
                    0.0
                }
            })
            .collect();
        let rows = row_angles(&stations, &offsets);

        let resolution = surface.resolution();
        let flapped: Vec<bool> = (0..resolution.spanwise())
            .map(|strip| {
                if strip < resolution.root {
                    surface.stations()[strip].y > self.inboard_y
                } else {
                    strip < resolution.root + resolution.inner
                }
            })
            .collect();

        let mut increments = vec![0.0; resolution.half_span_panels()];
        for (row, &row_increment) in rows.iter().enumerate() {
            for (strip, _) in flapped.iter().enumerate().filter(|(_, on)| **on) {
                increments[surface.panel_index(row, strip)] = row_increment;
            }
        }
        increments
    }
}

fn row_angles(stations: &[f64], heights: &[f64]) -> Vec<f64> {
    stations
        .windows(2)
        .zip(heights.windows(2))
        .map(|(x, z)| (z[0] - z[1]) / (x[1] - x[0]))
        .collect()
}

fn broadcast_rows(surface: &Surface, rows: &[f64]) -> Vec<f64> {
    let ny = surface.resolution().spanwise();
    rows.iter()
        .flat_map(|&angle| std::iter::repeat_n(angle, ny))
        .collect()
}
