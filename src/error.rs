//! Error types for plate integrand evaluation

use thiserror::Error;

/// Main error type for integrand operations
#[derive(Error, Debug)]
pub enum PlateError {
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("No material defined - stiffness, mass and gravity loads need a constitutive relation")]
    MissingMaterial,

    #[error("Invalid plate thickness {0} - must be positive")]
    InvalidThickness(f64),

    #[error("Singular constitutive matrix at ({0}, {1}, {2})")]
    SingularMaterial(f64, f64, f64),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Index {index} out of range (size {size})")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for integrand operations
pub type PlateResult<T> = Result<T, PlateError>;
