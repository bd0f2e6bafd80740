//! Error types for glyphgrid-quant

use thiserror::Error;

/// Errors that can occur during block quantization
#[derive(Debug, Error)]
pub enum QuantError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphgrid_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Grid shape does not match the image it is annotated from
    #[error("grid of {rows}x{cols} cells does not cover a {width}x{height} image")]
    GridMismatch {
        rows: u32,
        cols: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for quantization operations
pub type QuantResult<T> = Result<T, QuantError>;
