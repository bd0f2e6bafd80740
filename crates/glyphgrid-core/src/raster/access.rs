//! Pixel access functions
//!
//! Bounds-checked and unchecked getters/setters, plus the clamp-to-edge
//! sampler used by every convolution in the pipeline.

use super::{Raster, RasterMut};
use crate::color;
use crate::error::{Error, Result};

/// Clamp a signed coordinate into `[0, len - 1]`.
///
/// Out-of-range samples take the value of the nearest edge pixel; there is no
/// wrapping or mirroring.
#[inline]
pub fn clamp_to_border(coord: i64, len: u32) -> u32 {
    coord.clamp(0, i64::from(len) - 1) as u32
}

impl Raster {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Get the pixel nearest to the possibly out-of-range coordinate
    /// (clamp-to-edge).
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> u32 {
        let cx = clamp_to_border(x, self.width());
        let cy = clamp_to_border(y, self.height());
        self.get_pixel_unchecked(cx, cy)
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get RGBA values at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgba)
    }
}

impl RasterMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.data()[y as usize * self.width() as usize + x as usize])
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = y as usize * self.width() as usize + x as usize;
        self.data_mut()[idx] = val;
    }

    /// Set an opaque RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    /// Set an RGBA pixel at (x, y).
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_border() {
        assert_eq!(clamp_to_border(-3, 5), 0);
        assert_eq!(clamp_to_border(0, 5), 0);
        assert_eq!(clamp_to_border(4, 5), 4);
        assert_eq!(clamp_to_border(9, 5), 4);
        assert_eq!(clamp_to_border(7, 1), 0);
    }

    #[test]
    fn test_get_clamped() {
        let r = Raster::from_fn(3, 3, |x, y| y * 3 + x).unwrap();
        assert_eq!(r.get_clamped(-1, -1), 0);
        assert_eq!(r.get_clamped(5, 1), 5);
        assert_eq!(r.get_clamped(1, 7), 7);
    }

    #[test]
    fn test_set_pixel_bounds() {
        let mut m = RasterMut::new(2, 2).unwrap();
        assert!(m.set_rgb(1, 1, 1, 2, 3).is_ok());
        assert_eq!(m.get_pixel(1, 1), Some(color::compose_rgb(1, 2, 3)));
        assert!(matches!(
            m.set_pixel(2, 0, 0),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        ));
        assert!(m.set_rgba(0, 2, 0, 0, 0, 0).is_err());
        assert_eq!(m.get_pixel(0, 2), None);
    }
}
