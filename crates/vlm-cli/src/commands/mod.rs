pub mod analyze;
pub mod characteristics;
