//! Error types for the glyph pipeline

use thiserror::Error;

/// Errors that can occur while building a glyph grid
///
/// Any stage failure aborts the whole run; no partial grid is returned.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphgrid_core::Error),

    /// Blur, difference-of-Gaussians or Sobel stage error
    #[error("filter error: {0}")]
    Filter(#[from] glyphgrid_filter::FilterError),

    /// Desaturation error
    #[error("color error: {0}")]
    Color(#[from] glyphgrid_color::ColorError),

    /// Block quantization or color annotation error
    #[error("quantization error: {0}")]
    Quant(#[from] glyphgrid_quant::QuantError),

    /// The worker pool could not be created
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
