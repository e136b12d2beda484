//! # Workflows Module
//!
//! High-level entry points tying the [`core`](crate::core) geometry and the
//! [`engine`](crate::engine) solvers together.
//!
//! - [`evaluate`] - Wing sweep followed by the horizontal tail solve in the wing's wake
//! - [`characteristics`] - Lift-curve and span-efficiency estimates for the clean wing

pub mod characteristics;
pub mod evaluate;
