//! Error types for glyphgrid-core
//!
//! Every stage of the pipeline reports failures through this enum (directly
//! or wrapped by the per-crate error types). No stage recovers partially:
//! the first error aborts the whole run.

use thiserror::Error;

/// glyphgrid core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Zero-area image
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A pixel or buffer cannot be read in the expected channel layout
    #[error("unsupported pixel representation: {0}")]
    UnsupportedPixelRepresentation(String),

    /// Two images at a stage boundary disagree in size
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
