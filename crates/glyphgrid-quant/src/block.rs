//! Block quantization
//!
//! The edge map is cut into non-overlapping `block_size x block_size`
//! blocks (boundary blocks are clipped to the image). For every block the
//! four edge directions are tallied and the largest count `m` decides:
//!
//! - `m >= dominance_threshold`: the directional glyph of the first
//!   direction whose count equals `m`, in the order
//!   vertical, horizontal, diagonal-forward, diagonal-backward
//! - otherwise: a luminance glyph from the red channel of the luminance
//!   source at the block's top-left pixel
//!
//! Each block row is quantized as an independent task.

use crate::grid::{GlyphCell, GlyphGrid};
use crate::ramp::{EdgeGlyphs, LuminanceRamp};
use crate::{QuantError, QuantResult};
use glyphgrid_color::luminance_level;
use glyphgrid_core::{EdgeDirection, EdgeMap, Raster, color};
use rayon::prelude::*;

/// Options for [`quantize_blocks`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizeOptions {
    /// Side of a block in pixels (must be > 0)
    pub block_size: u32,
    /// Minimum tally for a directional glyph
    pub dominance_threshold: u32,
    /// Glyphs for blocks without a dominant direction
    pub ramp: LuminanceRamp,
    /// Glyphs for the four edge directions
    pub edge_glyphs: EdgeGlyphs,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            block_size: 8,
            dominance_threshold: 4,
            ramp: LuminanceRamp::default(),
            edge_glyphs: EdgeGlyphs::default(),
        }
    }
}

impl QuantizeOptions {
    pub fn validate(&self) -> QuantResult<()> {
        if self.block_size == 0 {
            return Err(QuantError::InvalidParameters(
                "block size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-block count of each edge direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockTally {
    pub vertical: u32,
    pub horizontal: u32,
    pub diagonal_forward: u32,
    pub diagonal_backward: u32,
}

impl BlockTally {
    /// Count one pixel; [`EdgeDirection::None`] is ignored.
    #[inline]
    pub fn add(&mut self, dir: EdgeDirection) {
        match dir {
            EdgeDirection::Vertical => self.vertical += 1,
            EdgeDirection::Horizontal => self.horizontal += 1,
            EdgeDirection::DiagonalForward => self.diagonal_forward += 1,
            EdgeDirection::DiagonalBackward => self.diagonal_backward += 1,
            EdgeDirection::None => {}
        }
    }

    pub fn get(&self, dir: EdgeDirection) -> u32 {
        match dir {
            EdgeDirection::Vertical => self.vertical,
            EdgeDirection::Horizontal => self.horizontal,
            EdgeDirection::DiagonalForward => self.diagonal_forward,
            EdgeDirection::DiagonalBackward => self.diagonal_backward,
            EdgeDirection::None => 0,
        }
    }

    /// Largest of the four counts.
    pub fn max(&self) -> u32 {
        self.vertical
            .max(self.horizontal)
            .max(self.diagonal_forward)
            .max(self.diagonal_backward)
    }

    /// Tally the edge map over the block at pixel origin (x0, y0), clipped
    /// to the map.
    pub fn from_block(edges: &EdgeMap, x0: u32, y0: u32, block_size: u32) -> Self {
        let x1 = x0.saturating_add(block_size).min(edges.width());
        let y1 = y0.saturating_add(block_size).min(edges.height());
        let mut tally = Self::default();
        for y in y0..y1 {
            for &dir in &edges.row(y)[x0 as usize..x1 as usize] {
                tally.add(dir);
            }
        }
        tally
    }
}

/// Pick the dominant direction of a block.
///
/// Returns `None` when the largest count is below `threshold`. Ties go to
/// the first direction in [`EdgeDirection::PRECEDENCE`].
pub fn select_edge_glyph(tally: &BlockTally, threshold: u32) -> Option<EdgeDirection> {
    let m = tally.max();
    if m < threshold {
        return None;
    }
    EdgeDirection::PRECEDENCE
        .into_iter()
        .find(|&dir| tally.get(dir) == m)
}

/// Number of block rows and glyph columns for an image.
pub fn grid_shape(width: u32, height: u32, block_size: u32) -> (u32, u32) {
    (height.div_ceil(block_size), width.div_ceil(block_size))
}

/// Quantize an edge map into a glyph grid.
///
/// `luminance` must be a grayscale image of the same size as `edges`; its
/// red channel drives the ramp for blocks without a dominant direction.
///
/// # Errors
///
/// - [`QuantError::InvalidParameters`] if `block_size == 0`
/// - [`QuantError::Core`] with `DimensionMismatch` if the two inputs differ
///   in size
pub fn quantize_blocks(
    edges: &EdgeMap,
    luminance: &Raster,
    options: &QuantizeOptions,
) -> QuantResult<GlyphGrid> {
    options.validate()?;
    edges.check_same_size(luminance)?;

    let (w, h) = edges.dimensions();
    let bs = options.block_size;
    let (rows, glyph_cols) = grid_shape(w, h, bs);
    log::debug!("quantize: {w}x{h} into {rows}x{glyph_cols} blocks of {bs}");

    let mut grid = GlyphGrid::new(rows, glyph_cols);
    let cols = grid.cols() as usize;
    grid.cells_mut()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(br, row)| {
            let y0 = br as u32 * bs;
            for (bc, cell) in row[..glyph_cols as usize].iter_mut().enumerate() {
                let x0 = bc as u32 * bs;
                let tally = BlockTally::from_block(edges, x0, y0, bs);
                *cell = match select_edge_glyph(&tally, options.dominance_threshold)
                    .and_then(|dir| options.edge_glyphs.glyph(dir))
                {
                    Some(glyph) => GlyphCell::Directional(glyph),
                    None => {
                        let red = color::red(luminance.get_pixel_unchecked(x0, y0));
                        GlyphCell::Luminance(options.ramp.glyph_for_level(luminance_level(red)))
                    }
                };
            }
        });

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(v: u32, h: u32, df: u32, db: u32) -> BlockTally {
        BlockTally {
            vertical: v,
            horizontal: h,
            diagonal_forward: df,
            diagonal_backward: db,
        }
    }

    #[test]
    fn test_select_dominant() {
        assert_eq!(
            select_edge_glyph(&tally(5, 3, 0, 0), 4),
            Some(EdgeDirection::Vertical)
        );
        assert_eq!(
            select_edge_glyph(&tally(0, 1, 0, 6), 4),
            Some(EdgeDirection::DiagonalBackward)
        );
        assert_eq!(select_edge_glyph(&tally(3, 3, 3, 3), 4), None);
    }

    #[test]
    fn test_select_tie_break() {
        assert_eq!(
            select_edge_glyph(&tally(5, 5, 0, 0), 4),
            Some(EdgeDirection::Vertical)
        );
        assert_eq!(
            select_edge_glyph(&tally(0, 4, 4, 4), 4),
            Some(EdgeDirection::Horizontal)
        );
        assert_eq!(
            select_edge_glyph(&tally(0, 0, 7, 7), 4),
            Some(EdgeDirection::DiagonalForward)
        );
    }

    #[test]
    fn test_grid_shape_ceil() {
        assert_eq!(grid_shape(16, 16, 8), (2, 2));
        assert_eq!(grid_shape(17, 9, 8), (2, 3));
        assert_eq!(grid_shape(3, 5, 8), (1, 1));
    }

    #[test]
    fn test_tally_clips_boundary_block() {
        let mut edges = EdgeMap::new(10, 10).unwrap();
        for y in 0..10 {
            edges.set(9, y, EdgeDirection::Horizontal).unwrap();
        }
        let t = BlockTally::from_block(&edges, 8, 8, 8);
        assert_eq!(t.horizontal, 2);
        assert_eq!(t.max(), 2);
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let edges = EdgeMap::new(4, 4).unwrap();
        let lum = Raster::new(4, 4).unwrap();
        let opts = QuantizeOptions {
            block_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            quantize_blocks(&edges, &lum, &opts),
            Err(QuantError::InvalidParameters(_))
        ));
    }
}
