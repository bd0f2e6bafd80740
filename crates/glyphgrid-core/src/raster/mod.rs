//! Raster - the RGBA image container
//!
//! `Raster` is the image type every pipeline stage reads and produces.
//!
//! # Pixel layout
//!
//! - One packed `u32` per pixel, `0xRRGGBBAA` (see [`crate::color`])
//! - Rows are stored top to bottom with no padding, so row `y` occupies
//!   `data[y * width .. (y + 1) * width]`
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership). A stage that
//! builds an image works on a [`RasterMut`], obtained from
//! [`Raster::try_into_mut`] or [`Raster::to_mut`], and converts it back with
//! `Into<Raster>` once every pixel is written. Later stages never mutate an
//! image they did not create.

mod access;

pub use access::clamp_to_border;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug, PartialEq, Eq)]
struct RasterData {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl RasterData {
    fn alloc(width: u32, height: u32, fill: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![fill; len],
        })
    }
}

/// Immutable, reference-counted RGBA image
///
/// # Examples
///
/// ```
/// use glyphgrid_core::{Raster, color};
///
/// let raster = Raster::new_filled(4, 3, color::WHITE).unwrap();
/// assert_eq!(raster.width(), 4);
/// assert_eq!(raster.get_pixel(3, 2), Some(color::WHITE));
/// assert_eq!(raster.get_pixel(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with every pixel zeroed (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new raster with every pixel set to `pixel`.
    pub fn new_filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        Ok(Raster {
            inner: Arc::new(RasterData::alloc(width, height, pixel)?),
        })
    }

    /// Create a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u32) -> Result<Self> {
        let mut data = RasterData::alloc(width, height, 0)?;
        for y in 0..height {
            for x in 0..width {
                data.data[y as usize * width as usize + x as usize] = f(x, y);
            }
        }
        Ok(Raster {
            inner: Arc::new(data),
        })
    }

    /// Build a raster from interleaved 8-bit RGBA samples (4 bytes per pixel,
    /// row-major, no padding).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPixelRepresentation`] if the buffer length
    /// is not `width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let mut data = RasterData::alloc(width, height, 0)?;
        if bytes.len() != data.data.len() * 4 {
            return Err(Error::UnsupportedPixelRepresentation(format!(
                "expected {} bytes of RGBA8 data for {}x{}, got {}",
                data.data.len() * 4,
                width,
                height,
                bytes.len()
            )));
        }
        for (dst, px) in data.data.iter_mut().zip(bytes.chunks_exact(4)) {
            *dst = color::compose_rgba(px[0], px[1], px[2], px[3]);
        }
        Ok(Raster {
            inner: Arc::new(data),
        })
    }

    /// Export the pixels as interleaved 8-bit RGBA samples.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.inner.data.len() * 4);
        for &pixel in &self.inner.data {
            let (r, g, b, a) = color::extract_rgba(pixel);
            out.extend_from_slice(&[r, g, b, a]);
        }
        out
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Create a zeroed raster with the same dimensions.
    pub fn create_template(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: vec![0; self.inner.data.len()],
            }),
        }
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Validate that `other` has this raster's dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] otherwise.
    pub fn check_same_size(&self, other: &Raster) -> Result<()> {
        check_dimensions(self.dimensions(), other.dimensions())
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Validate that `actual` matches `expected`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] when they differ.
pub fn check_dimensions(expected: (u32, u32), actual: (u32, u32)) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Mutable raster
///
/// Owned exclusively by the stage producing it. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Allocate a zeroed mutable raster.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(RasterMut {
            inner: RasterData::alloc(width, height, 0)?,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    ///
    /// Rows are contiguous and `width` pixels long, so
    /// `data_mut().chunks_mut(width)` yields disjoint rows.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}
