use nalgebra::Point2;
use std::f64::consts::PI;

/// Normal velocity induced at a point by a unit-strength planar horseshoe vortex.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HorseshoeInfluence {
    /// Bound segment plus both trailing legs.
    pub total: f64,
    /// Trailing legs only.
    pub wake: f64,
}

impl std::ops::Add for HorseshoeInfluence {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            total: self.total + rhs.total,
            wake: self.wake + rhs.wake,
        }
    }
}

/// Evaluates the horseshoe vortex whose bound segment runs from `start` to `end` and whose legs
/// trail to `+x` infinity, at `point`, all in the plane of the surface.
///
/// The bound segment is skipped when `point` is collinear with it, detected as
/// `|ad - bc| <= singularity_tolerance * e * f` (the cross product relative to both distances).
#[inline]
pub fn horseshoe_influence(
    point: &Point2<f64>,
    start: &Point2<f64>,
    end: &Point2<f64>,
    singularity_tolerance: f64,
) -> HorseshoeInfluence {
    let a = point.x - start.x;
    let b = point.y - start.y;
    let c = point.x - end.x;
    let d = point.y - end.y;
    let e = (a * a + b * b).sqrt();
    let f = (c * c + d * d).sqrt();
    let g = end.x - start.x;
    let h = end.y - start.y;

    let cross = a * d - b * c;
    let bound = if cross.abs() > singularity_tolerance * e * f {
        ((g * a + h * b) / e - (g * c + h * d) / f) / cross / (4.0 * PI)
    } else {
        0.0
    };
    let wake = ((1.0 + c / f) / d - (1.0 + a / e) / b) / (4.0 * PI);

    HorseshoeInfluence {
        total: bound + wake,
        wake,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;
    const GUARD: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn point_behind_bound_segment_sees_downwash() {
        let influence = horseshoe_influence(
            &Point2::new(0.5, 0.0),
            &Point2::new(0.0, -0.5),
            &Point2::new(0.0, 0.5),
            GUARD,
        );
        assert!(influence.total < 0.0);
        assert!(influence.wake < 0.0);
        assert!(influence.total < influence.wake);
    }

    #[test]
    fn wake_term_matches_closed_form_on_the_centreline() {
        // Two semi-infinite legs at y = +-s, starting at x = 0, seen from (x, 0).
        let (x, s) = (0.5f64, 0.5f64);
        let influence = horseshoe_influence(
            &Point2::new(x, 0.0),
            &Point2::new(0.0, -s),
            &Point2::new(0.0, s),
            GUARD,
        );
        let r = (x * x + s * s).sqrt();
        let expected = -2.0 * (1.0 + x / r) / (4.0 * PI * s);
        assert!(f64_approx_equal(influence.wake, expected));
    }

    #[test]
    fn bound_term_is_skipped_for_collinear_points() {
        let start = Point2::new(0.0, 0.0);
        let end = Point2::new(0.0, 1.0);
        let point = Point2::new(0.0, 2.0);
        let influence = horseshoe_influence(&point, &start, &end, GUARD);
        assert_eq!(influence.total, influence.wake);
        assert!(influence.total.is_finite());
    }

    #[test]
    fn bound_term_is_skipped_for_nearly_collinear_points() {
        let start = Point2::new(0.0, 0.0);
        let end = Point2::new(0.0, 1.0);
        let point = Point2::new(1e-15, 2.0);
        let influence = horseshoe_influence(&point, &start, &end, GUARD);
        assert_eq!(influence.total, influence.wake);
    }

    #[test]
    fn mirrored_point_and_segment_give_identical_influence() {
        let point = Point2::new(0.8, 0.3);
        let start = Point2::new(0.1, 0.5);
        let end = Point2::new(0.2, 1.0);
        let direct = horseshoe_influence(&point, &start, &end, GUARD);
        let mirrored = horseshoe_influence(
            &Point2::new(point.x, -point.y),
            &Point2::new(end.x, -end.y),
            &Point2::new(start.x, -start.y),
            GUARD,
        );
        assert!(f64_approx_equal(direct.total, mirrored.total));
        assert!(f64_approx_equal(direct.wake, mirrored.wake));
    }

    #[test]
    fn influences_add_componentwise() {
        let sum = HorseshoeInfluence {
            total: 1.0,
            wake: 0.5,
        } + HorseshoeInfluence {
            total: 2.0,
            wake: 0.25,
        };
        assert_eq!(sum.total, 3.0);
        assert_eq!(sum.wake, 0.75);
    }
}
