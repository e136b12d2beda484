/// Planform of the main wing.
///
/// Lengths are in metres. The inboard part of each half-wing, from the symmetry plane out to
/// `root_y`, is an untapered section held at the root chord; the rest tapers linearly to the tip
/// with an unswept quarter-chord line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingGeometry {
    pub aspect_ratio: f64,
    pub span: f64,
    pub root_chord: f64,
    pub tip_chord: f64,
    /// Spanwise station where the tapered section starts (typically the fuselage side).
    pub root_y: f64,
    /// Span ratio of a kink. Any value greater than zero selects the break mesh resolution.
    pub kink_span_ratio: f64,
    /// Fraction of the tapered span covered by the flap, measured from `root_y`.
    pub flap_span_ratio: f64,
    pub fuselage_max_width: f64,
    /// Mean aerodynamic chord, used as the pitching moment reference length.
    pub mac_length: f64,
}

impl WingGeometry {
    #[inline]
    pub fn semi_span(&self) -> f64 {
        self.span / 2.0
    }

    #[inline]
    pub fn fuselage_half_width(&self) -> f64 {
        self.fuselage_max_width / 2.0
    }

    /// Spanwise station of the outboard flap edge.
    #[inline]
    pub fn flap_end_y(&self) -> f64 {
        self.root_y + self.flap_span_ratio * (self.semi_span() - self.root_y)
    }

    #[inline]
    pub fn has_break(&self) -> bool {
        self.kink_span_ratio > 0.0
    }

    /// Fuselage-to-span width ratio used by the empirical fuselage corrections.
    #[inline]
    pub fn fuselage_span_ratio(&self) -> f64 {
        self.fuselage_max_width / self.span
    }
}

/// Planform of the horizontal tail: a single linear taper from root to tip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailGeometry {
    pub span: f64,
    pub root_chord: f64,
    pub tip_chord: f64,
}

impl TailGeometry {
    #[inline]
    pub fn semi_span(&self) -> f64 {
        self.span / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn wing() -> WingGeometry {
        WingGeometry {
            aspect_ratio: 8.0,
            span: 10.0,
            root_chord: 1.5,
            tip_chord: 1.0,
            root_y: 0.6,
            kink_span_ratio: 0.0,
            flap_span_ratio: 0.5,
            fuselage_max_width: 1.2,
            mac_length: 1.27,
        }
    }

    #[test]
    fn flap_end_lies_halfway_along_the_tapered_span() {
        let wing = wing();
        assert!((wing.flap_end_y() - (0.6 + 0.5 * 4.4)).abs() < TOLERANCE);
    }

    #[test]
    fn break_is_detected_only_for_positive_kink_ratio() {
        let mut wing = wing();
        assert!(!wing.has_break());
        wing.kink_span_ratio = 0.3;
        assert!(wing.has_break());
    }

    #[test]
    fn half_widths_are_half_of_full_widths() {
        let wing = wing();
        assert!((wing.semi_span() - 5.0).abs() < TOLERANCE);
        assert!((wing.fuselage_half_width() - 0.6).abs() < TOLERANCE);
        assert!((wing.fuselage_span_ratio() - 0.12).abs() < TOLERANCE);
    }
}
