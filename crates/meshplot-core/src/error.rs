//! Error types for meshplot.

use thiserror::Error;

/// The main error type for meshplot operations.
///
/// Degenerate geometry (zero-length segments, coincident tube ends) and missing grid
/// neighbours are not errors; builders skip or fall back silently in those cases.
#[derive(Error, Debug)]
pub enum MeshplotError {
    /// Data size does not match the number of cells it describes.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A grid was described with an unusable shape or spacing.
    #[error("invalid grid dimension: {0}")]
    InvalidDimension(String),

    /// A line, border or tube was given a thickness that is not a positive finite number.
    #[error("thickness must be positive and finite, got {0}")]
    InvalidThickness(f32),

    /// Too few radial or cap segments were requested.
    #[error("at least {min} segments are required, got {actual}")]
    InvalidSegments { min: usize, actual: usize },

    /// A manual scale range with its bounds the wrong way round.
    #[error("invalid scale range: low {low} is greater than high {high}")]
    InvalidRange { low: f32, high: f32 },

    /// A data value is NaN or infinite.
    #[error("non-finite datum {value} at cell {cell}")]
    NonFiniteData { cell: usize, value: f32 },

    /// A build was requested before any data was supplied.
    #[error("no data set - call set_data() before finalize()")]
    MissingData,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for meshplot operations.
pub type Result<T> = std::result::Result<T, MeshplotError>;

/// Checks that a thickness or radius is usable for geometry.
pub fn check_thickness(thickness: f32) -> Result<()> {
    if thickness.is_finite() && thickness > 0.0 {
        Ok(())
    } else {
        Err(MeshplotError::InvalidThickness(thickness))
    }
}
