use super::config::ConfigError;
use crate::core::geometry::mesh::SurfaceKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid analysis configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Influence matrix of the {} ({size}x{size}) is singular", .surface.name())]
    SingularSystem { surface: SurfaceKind, size: usize },

    #[error("Expected {expected} values, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
