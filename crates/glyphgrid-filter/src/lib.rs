//! glyphgrid-filter - Image filtering stages of the glyph pipeline
//!
//! This crate provides:
//!
//! - Gaussian kernels ([`Kernel`])
//! - Separable and direct 2-D Gaussian blur ([`blur`])
//! - Difference-of-Gaussians edge masks ([`dog`])
//! - Sobel gradient analysis: binary, direction-classified and full-hue
//!   outputs ([`sobel`])
//!
//! Every filter samples outside the image with clamp-to-edge and processes
//! scanlines in parallel on the current rayon pool.

pub mod blur;
pub mod dog;
mod error;
pub mod kernel;
pub mod sobel;

pub use error::{FilterError, FilterResult};
pub use kernel::{Kernel, MAX_GAUSSIAN_SIZE, MAX_KERNEL_AREA};

pub use blur::{convolve_2d, convolve_columns, convolve_rows, gaussian_blur, gaussian_blur_2d};
pub use dog::{DOG_TAU, DogOptions, difference_of_gaussians};
pub use sobel::{
    Gradient, SOBEL_HORIZONTAL, SOBEL_VERTICAL, classify_orientation, gradient_at, sobel_binary,
    sobel_classify, sobel_hue,
};
