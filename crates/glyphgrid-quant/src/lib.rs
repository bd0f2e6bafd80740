//! glyphgrid-quant - Glyph selection for the glyph pipeline
//!
//! Turns a per-pixel [`EdgeMap`](glyphgrid_core::EdgeMap) and a grayscale
//! luminance source into a [`GlyphGrid`]:
//!
//! - **Block quantization** ([`block::quantize_blocks`]): one glyph per
//!   `block_size x block_size` block, directional when one edge direction
//!   dominates, otherwise taken from a luminance ramp
//! - **Color annotation** ([`annotate::annotate_colors`]): wraps each glyph
//!   with the color sampled at its block's top-left pixel
//!
//! # Example
//!
//! ```
//! use glyphgrid_core::{EdgeMap, Raster, color};
//! use glyphgrid_quant::{QuantizeOptions, quantize_blocks};
//!
//! let edges = EdgeMap::new(16, 8).unwrap();
//! let gray = Raster::new_filled(16, 8, color::WHITE).unwrap();
//! let grid = quantize_blocks(&edges, &gray, &QuantizeOptions::default()).unwrap();
//! assert_eq!(grid.to_string(), "@@\n");
//! ```

pub mod annotate;
pub mod block;
mod error;
pub mod grid;
pub mod ramp;

pub use error::{QuantError, QuantResult};

pub use annotate::annotate_colors;
pub use block::{BlockTally, QuantizeOptions, grid_shape, quantize_blocks, select_edge_glyph};
pub use glyphgrid_color::luminance_level;
pub use grid::{GlyphCell, GlyphGrid};
pub use ramp::{DEFAULT_RAMP, EdgeGlyphs, LuminanceRamp};
