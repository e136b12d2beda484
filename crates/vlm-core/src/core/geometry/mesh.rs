use super::planform::{TailGeometry, WingGeometry};
use nalgebra::Point2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Wing,
    HorizontalTail,
}

impl SurfaceKind {
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceKind::Wing => "wing",
            SurfaceKind::HorizontalTail => "horizontal tail",
        }
    }
}

/// Panel counts of one half-span.
///
/// The spanwise count is split into three segments. On the wing these are the untapered
/// root section, the flapped tapered section and the outer tapered section. The tail is
/// spaced uniformly and only uses the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshResolution {
    pub chordwise: usize,
    pub root: usize,
    pub inner: usize,
    pub outer: usize,
}

impl MeshResolution {
    pub fn new(chordwise: usize, root: usize, inner: usize, outer: usize) -> Self {
        Self {
            chordwise,
            root,
            inner,
            outer,
        }
    }

    #[inline]
    pub fn spanwise(&self) -> usize {
        self.root + self.inner + self.outer
    }

    /// Number of panels on one half-span, which is also the size of the symmetric system.
    #[inline]
    pub fn half_span_panels(&self) -> usize {
        self.chordwise * self.spanwise()
    }

    #[inline]
    pub fn total_panels(&self) -> usize {
        2 * self.half_span_panels()
    }
}

/// Spanwise station bounding a strip of panels on the right half-span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanStation {
    pub y: f64,
    pub leading_edge_x: f64,
    pub chord: f64,
}

/// One quadrilateral panel carrying a horseshoe vortex.
///
/// The bound vortex lies on the quarter-chord line of the panel and always runs in the
/// direction of increasing `y`; the control point sits at three-quarter chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub leading_edge_x: f64,
    /// Mean chord of the strip the panel belongs to.
    pub local_chord: f64,
    /// Spanwise width.
    pub span: f64,
    /// Chordwise length.
    pub chord: f64,
    pub area: f64,
    pub bound_start: Point2<f64>,
    pub bound_end: Point2<f64>,
    pub control_point: Point2<f64>,
    /// Local geometric flow angle in radians (camber plus flap), zero for a flat panel.
    pub local_angle: f64,
}

impl Panel {
    /// Reflection of the panel through the symmetry plane.
    ///
    /// The bound vortex endpoints are swapped so that the mirrored segment keeps running
    /// towards increasing `y`.
    pub fn mirrored(&self) -> Self {
        Self {
            bound_start: Point2::new(self.bound_end.x, -self.bound_end.y),
            bound_end: Point2::new(self.bound_start.x, -self.bound_start.y),
            control_point: Point2::new(self.control_point.x, -self.control_point.y),
            ..*self
        }
    }
}

/// A meshed lifting surface.
///
/// Panels are stored right half first, row-major (`chordwise_row * spanwise + strip`), followed
/// by their mirror images in the same order.
#[derive(Debug, Clone)]
pub struct Surface {
    kind: SurfaceKind,
    resolution: MeshResolution,
    stations: Vec<SpanStation>,
    panels: Vec<Panel>,
}

impl Surface {
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn resolution(&self) -> MeshResolution {
        self.resolution
    }

    /// The `spanwise + 1` stations of the right half-span, root first.
    pub fn stations(&self) -> &[SpanStation] {
        &self.stations
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn right_panels(&self) -> &[Panel] {
        &self.panels[..self.resolution.half_span_panels()]
    }

    pub fn left_panels(&self) -> &[Panel] {
        &self.panels[self.resolution.half_span_panels()..]
    }

    #[inline]
    pub fn panel_index(&self, row: usize, strip: usize) -> usize {
        row * self.resolution.spanwise() + strip
    }

    /// Spanwise control point coordinate of every right-side strip.
    pub fn strip_control_y(&self) -> Vec<f64> {
        self.right_panels()[..self.resolution.spanwise()]
            .iter()
            .map(|panel| panel.control_point.y)
            .collect()
    }

    /// Chordwise grid at the root station, measured from the root leading edge.
    pub fn root_chordwise_stations(&self) -> Vec<f64> {
        let root = &self.stations[0];
        let nx = self.resolution.chordwise as f64;
        (0..=self.resolution.chordwise)
            .map(|i| root.chord * i as f64 / nx)
            .collect()
    }

    pub fn half_span_area(&self) -> f64 {
        self.right_panels().iter().map(|panel| panel.area).sum()
    }

    pub fn local_angles(&self) -> Vec<f64> {
        self.right_panels()
            .iter()
            .map(|panel| panel.local_angle)
            .collect()
    }

    /// Overwrites the local flow angle of every right-side panel and of its mirror image.
    ///
    /// # Panics
    ///
    /// Panics if `angles` does not hold exactly one value per right-side panel.
    pub fn apply_local_angles(&mut self, angles: &[f64]) {
        let half = self.resolution.half_span_panels();
        assert_eq!(
            angles.len(),
            half,
            "apply_local_angles expects one angle per right-side panel"
        );
        for (idx, &angle) in angles.iter().enumerate() {
            self.panels[idx].local_angle = angle;
            self.panels[half + idx].local_angle = angle;
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SurfaceMeshBuilder {
    resolution: MeshResolution,
}

impl SurfaceMeshBuilder {
    pub fn new(resolution: MeshResolution) -> Self {
        Self { resolution }
    }

    pub fn resolution(&self) -> MeshResolution {
        self.resolution
    }

    pub fn build_wing(&self, wing: &WingGeometry) -> Surface {
        let stations = self.wing_stations(wing);
        self.assemble(SurfaceKind::Wing, stations)
    }

    pub fn build_tail(&self, tail: &TailGeometry) -> Surface {
        let stations = self.tail_stations(tail);
        self.assemble(SurfaceKind::HorizontalTail, stations)
    }

    fn wing_stations(&self, wing: &WingGeometry) -> Vec<SpanStation> {
        let MeshResolution {
            root, inner, outer, ..
        } = self.resolution;
        let semi_span = wing.semi_span();
        let root_y = wing.root_y;
        let flap_end_y = wing.flap_end_y();
        let tapered_span = semi_span - root_y;

        let tapered = |y: f64| {
            let t = y - root_y;
            SpanStation {
                y,
                leading_edge_x: t * (wing.root_chord - wing.tip_chord) / (4.0 * tapered_span),
                chord: wing.root_chord + (wing.tip_chord - wing.root_chord) * t / tapered_span,
            }
        };

        (0..=self.resolution.spanwise())
            .map(|j| {
                if j < root {
                    SpanStation {
                        y: root_y * j as f64 / root as f64,
                        leading_edge_x: 0.0,
                        chord: wing.root_chord,
                    }
                } else if j < root + inner {
                    let k = (j - root) as f64 / inner as f64;
                    tapered(root_y + (flap_end_y - root_y) * k)
                } else {
                    let k = (j - root - inner) as f64 / outer as f64;
                    tapered(flap_end_y + (semi_span - flap_end_y) * k)
                }
            })
            .collect()
    }

    fn tail_stations(&self, tail: &TailGeometry) -> Vec<SpanStation> {
        let ny = self.resolution.spanwise();
        let semi_span = tail.semi_span();
        (0..=ny)
            .map(|j| {
                let y = semi_span * j as f64 / ny as f64;
                SpanStation {
                    y,
                    leading_edge_x: y * (tail.root_chord - tail.tip_chord) / (4.0 * semi_span),
                    chord: tail.root_chord + (tail.tip_chord - tail.root_chord) * y / semi_span,
                }
            })
            .collect()
    }

    fn assemble(&self, kind: SurfaceKind, stations: Vec<SpanStation>) -> Surface {
        let nx = self.resolution.chordwise;
        let ny = self.resolution.spanwise();
        let grid_x = |row: usize, station: &SpanStation| {
            station.leading_edge_x + station.chord * row as f64 / nx as f64
        };

        let mut panels = Vec::with_capacity(self.resolution.total_panels());
        for row in 0..nx {
            for strip in 0..ny {
                let (inboard, outboard) = (&stations[strip], &stations[strip + 1]);
                let x_in = grid_x(row, inboard);
                let x_in_aft = grid_x(row + 1, inboard);
                let x_out = grid_x(row, outboard);
                let x_out_aft = grid_x(row + 1, outboard);

                let span = outboard.y - inboard.y;
                let chord = 0.5 * ((x_in_aft - x_in) + (x_out_aft - x_out));
                let leading_edge_x = 0.5 * (x_in + x_out);

                panels.push(Panel {
                    leading_edge_x,
                    local_chord: 0.5 * (inboard.chord + outboard.chord),
                    span,
                    chord,
                    area: span * chord,
                    bound_start: Point2::new(x_in + 0.25 * (x_in_aft - x_in), inboard.y),
                    bound_end: Point2::new(x_out + 0.25 * (x_out_aft - x_out), outboard.y),
                    control_point: Point2::new(
                        leading_edge_x + 0.75 * chord,
                        0.5 * (inboard.y + outboard.y),
                    ),
                    local_angle: 0.0,
                });
            }
        }

        let mirrored: Vec<Panel> = panels.iter().map(Panel::mirrored).collect();
        panels.extend(mirrored);

        Surface {
            kind,
            resolution: self.resolution,
            stations,
            panels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn tapered_wing() -> WingGeometry {
        WingGeometry {
            aspect_ratio: 7.98,
            span: 12.0,
            root_chord: 1.8,
            tip_chord: 1.2,
            root_y: 0.7,
            kink_span_ratio: 0.0,
            flap_span_ratio: 0.6,
            fuselage_max_width: 1.3,
            mac_length: 1.52,
        }
    }

    fn tail() -> TailGeometry {
        TailGeometry {
            span: 4.0,
            root_chord: 0.9,
            tip_chord: 0.6,
        }
    }

    fn builder() -> SurfaceMeshBuilder {
        SurfaceMeshBuilder::new(MeshResolution::new(19, 3, 7, 7))
    }

    #[test]
    fn panel_count_covers_both_half_spans() {
        let surface = builder().build_wing(&tapered_wing());
        assert_eq!(surface.panels().len(), 19 * 17 * 2);
        assert_eq!(surface.right_panels().len(), surface.left_panels().len());
        assert_eq!(surface.stations().len(), 18);
    }

    #[test]
    fn strip_widths_sum_to_the_full_span() {
        let wing = tapered_wing();
        let surface = builder().build_wing(&wing);
        let ny = surface.resolution().spanwise();
        let width: f64 = surface.panels()[..ny].iter().map(|p| p.span).sum::<f64>()
            + surface.left_panels()[..ny].iter().map(|p| p.span).sum::<f64>();
        assert!(f64_approx_equal(width, wing.span));
    }

    #[test]
    fn kinked_wing_uses_the_break_resolution() {
        let wing = WingGeometry {
            kink_span_ratio: 0.35,
            ..tapered_wing()
        };
        let surface = SurfaceMeshBuilder::new(MeshResolution::new(19, 8, 4, 4)).build_wing(&wing);
        assert_eq!(surface.panels().len(), 19 * 16 * 2);
        assert_eq!(surface.stations().len(), 17);

        let ny = surface.resolution().spanwise();
        let width: f64 = surface.right_panels()[..ny].iter().map(|p| p.span).sum::<f64>()
            + surface.left_panels()[..ny].iter().map(|p| p.span).sum::<f64>();
        assert!(f64_approx_equal(width, wing.span));

        let stations = surface.stations();
        assert!(f64_approx_equal(stations[8].y, wing.root_y));
        assert!(f64_approx_equal(stations[12].y, wing.flap_end_y()));
        for pair in stations.windows(2) {
            assert!(pair[1].y > pair[0].y);
        }
        for (right, left) in surface.right_panels().iter().zip(surface.left_panels()) {
            assert_eq!(left.control_point.y, -right.control_point.y);
            assert_eq!(left.control_point.x, right.control_point.x);
            assert_eq!(left.area, right.area);
        }
    }

    #[test]
    fn left_half_is_the_mirror_image_of_the_right_half() {
        let surface = builder().build_wing(&tapered_wing());
        for (right, left) in surface.right_panels().iter().zip(surface.left_panels()) {
            assert_eq!(left.control_point.x, right.control_point.x);
            assert_eq!(left.control_point.y, -right.control_point.y);
            assert_eq!(left.bound_start.x, right.bound_end.x);
            assert_eq!(left.bound_start.y, -right.bound_end.y);
            assert_eq!(left.bound_end.x, right.bound_start.x);
            assert_eq!(left.bound_end.y, -right.bound_start.y);
            assert_eq!(left.area, right.area);
            assert_eq!(left.chord, right.chord);
            assert_eq!(left.span, right.span);
            assert_eq!(left.leading_edge_x, right.leading_edge_x);
        }
    }

    #[test]
    fn root_section_is_untapered_and_tip_reaches_tip_chord() {
        let wing = tapered_wing();
        let surface = builder().build_wing(&wing);
        let stations = surface.stations();
        for station in &stations[..3] {
            assert!(f64_approx_equal(station.chord, wing.root_chord));
            assert!(f64_approx_equal(station.leading_edge_x, 0.0));
            assert!(station.y < wing.root_y);
        }
        assert!(f64_approx_equal(stations[3].y, wing.root_y));
        assert!(f64_approx_equal(stations[10].y, wing.flap_end_y()));
        let tip = stations.last().unwrap();
        assert!(f64_approx_equal(tip.y, wing.semi_span()));
        assert!(f64_approx_equal(tip.chord, wing.tip_chord));
        assert!(f64_approx_equal(tip.leading_edge_x, 0.25 * (1.8 - 1.2)));
    }

    #[test]
    fn stations_increase_monotonically() {
        let surface = builder().build_wing(&tapered_wing());
        for pair in surface.stations().windows(2) {
            assert!(pair[1].y > pair[0].y);
        }
    }

    #[test]
    fn control_points_sit_at_three_quarter_panel_chord() {
        let surface = builder().build_tail(&tail());
        for panel in surface.right_panels() {
            let expected = panel.leading_edge_x + 0.75 * panel.chord;
            assert!(f64_approx_equal(panel.control_point.x, expected));
            assert!(panel.bound_start.x < panel.control_point.x);
            assert!(panel.bound_end.y > panel.bound_start.y);
        }
    }

    #[test]
    fn half_span_area_matches_trapezoid_area() {
        let tail = tail();
        let surface = builder().build_tail(&tail);
        let expected = 0.5 * (tail.root_chord + tail.tip_chord) * tail.semi_span();
        assert!(f64_approx_equal(surface.half_span_area(), expected));
    }

    #[test]
    fn tail_stations_are_uniformly_spaced() {
        let surface = builder().build_tail(&tail());
        let dy = 2.0 / 17.0;
        for (j, station) in surface.stations().iter().enumerate() {
            assert!(f64_approx_equal(station.y, dy * j as f64));
        }
    }

    #[test]
    fn applied_local_angles_reach_both_halves() {
        let mut surface = builder().build_tail(&tail());
        let n = surface.resolution().half_span_panels();
        let angles: Vec<f64> = (0..n).map(|i| i as f64 * 1e-3).collect();
        surface.apply_local_angles(&angles);
        assert_eq!(surface.local_angles(), angles);
        for (right, left) in surface.right_panels().iter().zip(surface.left_panels()) {
            assert_eq!(right.local_angle, left.local_angle);
        }
    }

    #[test]
    #[should_panic(expected = "one angle per right-side panel")]
    fn applying_wrong_number_of_angles_panics() {
        let mut surface = builder().build_tail(&tail());
        surface.apply_local_angles(&[0.0; 3]);
    }

    #[test]
    fn root_chordwise_stations_span_the_root_chord() {
        let surface = builder().build_wing(&tapered_wing());
        let stations = surface.root_chordwise_stations();
        assert_eq!(stations.len(), 20);
        assert!(f64_approx_equal(stations[0], 0.0));
        assert!(f64_approx_equal(*stations.last().unwrap(), 1.8));
    }

    #[test]
    fn strip_control_y_lists_right_side_strip_midpoints() {
        let surface = builder().build_tail(&tail());
        let ys = surface.strip_control_y();
        assert_eq!(ys.len(), 17);
        assert!(f64_approx_equal(ys[0], 1.0 / 17.0));
    }
}
