//! # Engine Module
//!
//! Solve-time machinery of the vortex lattice method.
//!
//! - **Configuration** ([`config`]) - Mesh resolution policy, solver constants, analysis inputs
//! - **Error Handling** ([`error`]) - Engine-level failures such as a singular influence matrix
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for front ends
//! - **Circulation** ([`solver`]) - Factorization of the influence matrix and circulation solves
//! - **Post-processing** ([`postprocess`]) - Pressure integration into aerodynamic coefficients
//!
//! A factorized [`solver::CirculationSolver`] holds no mutable state, so one factorization is
//! reused for every angle of attack of a sweep.

pub mod config;
pub mod error;
pub mod postprocess;
pub mod progress;
pub mod solver;
