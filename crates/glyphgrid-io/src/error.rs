//! I/O error types
//!
//! Decoder and encoder failures from the `image` crate are flattened into
//! `IoError` variants so callers only handle one error type.

use thiserror::Error;

/// Error type for image and document I/O
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format could not be recognized
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The decoder rejected the image data
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The encoder failed
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. zero-sized image)
    #[error("core error: {0}")]
    Core(#[from] glyphgrid_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
