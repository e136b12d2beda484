//! # Core Module
//!
//! Stateless building blocks of the vortex lattice method.
//!
//! - **Geometry** ([`geometry`]) - Planform inputs and the mirrored trapezoidal panel mesh
//! - **Airfoil** ([`airfoil`]) - Mean camber line and flap deflection as local flow angles
//! - **Vortex** ([`vortex`]) - Horseshoe vortex kernel and influence coefficient matrices
//! - **Wake** ([`wake`]) - Far-field downwash of the wing and its projection onto the tail
//!
//! Nothing in this module validates geometry. Zero or negative spans and chords are passed
//! straight through the arithmetic and surface as NaN or infinite results.

pub mod airfoil;
pub mod geometry;
pub mod vortex;
pub mod wake;
