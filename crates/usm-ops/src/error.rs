//! Error types for filtering operations.

use thiserror::Error;

/// Error type for filtering operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Planes have incompatible shapes.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from the plane layer.
    #[error(transparent)]
    Core(#[from] usm_core::Error),
}

/// Result type for filtering operations.
pub type OpsResult<T> = Result<T, OpsError>;
