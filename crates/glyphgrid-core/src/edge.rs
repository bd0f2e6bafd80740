//! Edge direction map
//!
//! The gradient analyzer classifies every pixel into an [`EdgeDirection`] and
//! the block quantizer counts them. The two stages exchange an [`EdgeMap`]
//! directly instead of an image of sentinel colors, so nothing between them
//! can corrupt the classification with an off-palette color.
//!
//! The sentinel palette still exists as an interchange encoding:
//! [`EdgeMap::to_raster`] renders a map for inspection and
//! [`EdgeMap::from_raster`] parses one back, rejecting anything outside the
//! palette.

use crate::color::{self, BLACK, WHITE};
use crate::error::{Error, Result};
use crate::raster::{Raster, RasterMut, check_dimensions};

/// Orientation of the edge line passing through a pixel.
///
/// Names describe the line itself (and therefore the glyph drawn for it),
/// not the gradient, which is perpendicular to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeDirection {
    /// Gradient magnitude below threshold
    #[default]
    None,
    /// Edge runs left-right (`_`)
    Horizontal,
    /// Edge runs top-bottom (`|`)
    Vertical,
    /// Edge descends from top-left to bottom-right (`\`)
    DiagonalForward,
    /// Edge rises from bottom-left to top-right (`/`)
    DiagonalBackward,
}

/// Sentinel colors, one per non-`None` direction.
pub mod sentinel {
    use crate::color::compose_rgb;

    pub const VERTICAL: u32 = compose_rgb(0, 0, 255);
    pub const HORIZONTAL: u32 = compose_rgb(255, 0, 0);
    pub const DIAGONAL_FORWARD: u32 = compose_rgb(0, 255, 0);
    pub const DIAGONAL_BACKWARD: u32 = compose_rgb(255, 255, 0);
}

impl EdgeDirection {
    /// The four real directions in tie-break precedence order.
    pub const PRECEDENCE: [EdgeDirection; 4] = [
        EdgeDirection::Vertical,
        EdgeDirection::Horizontal,
        EdgeDirection::DiagonalForward,
        EdgeDirection::DiagonalBackward,
    ];

    /// Sentinel color for this direction. `None` renders as black.
    pub const fn sentinel(self) -> u32 {
        match self {
            EdgeDirection::None => BLACK,
            EdgeDirection::Horizontal => sentinel::HORIZONTAL,
            EdgeDirection::Vertical => sentinel::VERTICAL,
            EdgeDirection::DiagonalForward => sentinel::DIAGONAL_FORWARD,
            EdgeDirection::DiagonalBackward => sentinel::DIAGONAL_BACKWARD,
        }
    }

    /// Decode a pixel of the edge-mask palette.
    ///
    /// Black and white both decode to `None`. Any other value, including a
    /// palette color with non-opaque alpha, returns `None` from this function
    /// (the outer `Option`).
    pub const fn from_sentinel(pixel: u32) -> Option<EdgeDirection> {
        match pixel {
            BLACK | WHITE => Some(EdgeDirection::None),
            sentinel::HORIZONTAL => Some(EdgeDirection::Horizontal),
            sentinel::VERTICAL => Some(EdgeDirection::Vertical),
            sentinel::DIAGONAL_FORWARD => Some(EdgeDirection::DiagonalForward),
            sentinel::DIAGONAL_BACKWARD => Some(EdgeDirection::DiagonalBackward),
            _ => None,
        }
    }

    /// Whether this is a real edge.
    #[inline]
    pub fn is_edge(self) -> bool {
        self != EdgeDirection::None
    }
}

/// Per-pixel edge directions, row-major, same dimensions as the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMap {
    width: u32,
    height: u32,
    data: Vec<EdgeDirection>,
}

impl EdgeMap {
    /// Create a map with every pixel set to [`EdgeDirection::None`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![EdgeDirection::None; width as usize * height as usize],
        })
    }

    /// Wrap an existing row-major direction buffer.
    pub fn from_directions(width: u32, height: u32, data: Vec<EdgeDirection>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize;
        if data.len() != len {
            return Err(Error::IndexOutOfBounds {
                index: data.len(),
                len,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Decode a sentinel-palette image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPixelRepresentation`] at the first pixel
    /// that is not black, white, or one of the four sentinel colors.
    pub fn from_raster(raster: &Raster) -> Result<Self> {
        let (w, h) = raster.dimensions();
        let mut data = Vec::with_capacity(raster.data().len());
        for (i, &pixel) in raster.data().iter().enumerate() {
            let dir = EdgeDirection::from_sentinel(pixel).ok_or_else(|| {
                let (r, g, b, a) = color::extract_rgba(pixel);
                Error::UnsupportedPixelRepresentation(format!(
                    "pixel ({}, {}) = rgba({r}, {g}, {b}, {a}) is not an edge-mask color",
                    i % w as usize,
                    i / w as usize
                ))
            })?;
            data.push(dir);
        }
        Self::from_directions(w, h, data)
    }

    /// Render the map with the sentinel palette (`None` is black).
    pub fn to_raster(&self) -> Result<Raster> {
        let mut out = RasterMut::new(self.width, self.height)?;
        for (dst, dir) in out.data_mut().iter_mut().zip(&self.data) {
            *dst = dir.sentinel();
        }
        Ok(out.into())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Validate that a companion image has this map's dimensions.
    pub fn check_same_size(&self, raster: &Raster) -> Result<()> {
        check_dimensions(self.dimensions(), raster.dimensions())
    }

    /// Get the direction at (x, y), or `None` (the `Option`) when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<EdgeDirection> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// # Panics
    ///
    /// Panics if the computed index is past the end of the data.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> EdgeDirection {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Set the direction at (x, y).
    pub fn set(&mut self, x: u32, y: u32, dir: EdgeDirection) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width as usize + x as usize,
                len: self.data.len(),
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = dir;
        Ok(())
    }

    #[inline]
    pub fn data(&self) -> &[EdgeDirection] {
        &self.data
    }

    /// Rows are contiguous and `width` entries long.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [EdgeDirection] {
        &mut self.data
    }

    /// Directions of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[EdgeDirection] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Number of pixels classified as `dir`.
    pub fn count(&self, dir: EdgeDirection) -> usize {
        self.data.iter().filter(|&&d| d == dir).count()
    }
}
