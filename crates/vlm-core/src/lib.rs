//! # Vortex Lattice Core Library
//!
//! A vortex lattice method (VLM) for estimating the lift, induced drag, pitching moment
//! and span efficiency of a main wing, and the lift of a horizontal tail flying in the
//! wing's wake.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless geometry and kernels: planform inputs, the
//!   symmetric panel mesh (`Surface`), the NACA 230xx camber line, the horseshoe vortex
//!   kernel and influence matrix assembly, and the far-field wake.
//!
//! - **[`engine`]: The Solve Core.** Configuration, errors, progress reporting, the
//!   circulation solver built on a factorized influence matrix, and the post-processor
//!   that integrates panel pressures into coefficients.
//!
//! - **[`workflows`]: The Public API.** Complete procedures: a wing + tail evaluation over an
//!   angle-of-attack sweep, and the lift-curve and span-efficiency estimates built on it.

pub mod core;
pub mod engine;
pub mod workflows;
