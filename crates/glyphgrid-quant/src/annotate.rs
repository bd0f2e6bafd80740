//! Color annotation
//!
//! Wraps every glyph of a finished grid with the color of the source pixel
//! at its block's top-left corner. Row terminators are left untouched.

use crate::block::grid_shape;
use crate::grid::{GlyphCell, GlyphGrid};
use crate::{QuantError, QuantResult};
use glyphgrid_core::{Raster, color};
use rayon::prelude::*;

/// Annotate `grid` in place with colors sampled from `source`.
///
/// `grid` must have the shape [`quantize_blocks`](crate::quantize_blocks)
/// produces for `source` and `block_size`. Annotating an already colored
/// cell replaces its color.
///
/// # Errors
///
/// - [`QuantError::InvalidParameters`] if `block_size == 0`
/// - [`QuantError::GridMismatch`] if the grid does not cover `source`
pub fn annotate_colors(grid: &mut GlyphGrid, source: &Raster, block_size: u32) -> QuantResult<()> {
    if block_size == 0 {
        return Err(QuantError::InvalidParameters(
            "block size must be positive".to_string(),
        ));
    }
    let (w, h) = source.dimensions();
    if grid_shape(w, h, block_size) != (grid.rows(), grid.glyph_cols()) {
        return Err(QuantError::GridMismatch {
            rows: grid.rows(),
            cols: grid.cols(),
            width: w,
            height: h,
        });
    }
    log::debug!("annotate: {}x{} cells from {w}x{h}", grid.rows(), grid.cols());

    let cols = grid.cols() as usize;
    grid.cells_mut()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, cells)| {
            let y = row as u32 * block_size;
            for (col, cell) in cells.iter_mut().enumerate() {
                let Some(glyph) = cell.glyph() else {
                    continue;
                };
                let x = col as u32 * block_size;
                let (r, g, b) = color::extract_rgb(source.get_pixel_unchecked(x, y));
                *cell = GlyphCell::Colored { glyph, r, g, b };
            }
        });

    Ok(())
}
