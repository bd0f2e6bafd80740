//! glyphgrid - Edge-aware glyph art from raster images
//!
//! An image is reduced to a grid of monospace glyphs in four stages:
//!
//! 1. Difference-of-Gaussians edge mask ([`filter::difference_of_gaussians`])
//! 2. Sobel orientation classification ([`filter::sobel_classify`])
//! 3. Block quantization against the desaturated image
//!    ([`quant::quantize_blocks`])
//! 4. Optional color annotation ([`quant::annotate_colors`])
//!
//! [`Pipeline`] runs them on a bounded worker pool.
//!
//! # Example
//!
//! ```
//! use glyphgrid::{Raster, color, render_glyphs};
//!
//! // black left half, white right half
//! let img = Raster::from_fn(16, 16, |x, _| if x < 8 { color::BLACK } else { color::WHITE })
//!     .unwrap();
//! assert_eq!(render_glyphs(&img).unwrap(), "||\n||\n");
//! ```

mod pipeline_error;
pub mod pipeline;

pub use pipeline_error::{PipelineError, PipelineResult};
pub use pipeline::{Pipeline, PipelineOptions, generate_glyph_grid, render_glyphs};

// Re-export core types (primary data structures used everywhere)
pub use glyphgrid_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphgrid_color as colorspace;
pub use glyphgrid_filter as filter;
pub use glyphgrid_io as io;
pub use glyphgrid_quant as quant;
