//! glyphgrid core - shared data structures for the glyph pipeline
//!
//! This crate provides the types every stage passes around:
//!
//! - [`Raster`] / [`RasterMut`] - RGBA image container (immutable / mutable)
//! - [`EdgeMap`] / [`EdgeDirection`] - per-pixel edge orientation produced by
//!   the gradient analyzer and consumed by the block quantizer
//! - [`color`] - packed-pixel helpers and the sentinel palette
//! - [`Error`] - the core error taxonomy

pub mod edge;
pub mod error;
pub mod raster;

pub use edge::{EdgeDirection, EdgeMap};
pub use error::{Error, Result};
pub use raster::{Raster, RasterMut};

/// Channel helpers for packed 32-bit RGBA pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Opaque black.
    pub const BLACK: u32 = compose_rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: u32 = compose_rgb(255, 255, 255);

    #[inline]
    pub const fn red(pixel: u32) -> u8 {
        (pixel >> RED_SHIFT) as u8
    }

    #[inline]
    pub const fn green(pixel: u32) -> u8 {
        (pixel >> GREEN_SHIFT) as u8
    }

    #[inline]
    pub const fn blue(pixel: u32) -> u8 {
        (pixel >> BLUE_SHIFT) as u8
    }

    #[inline]
    pub const fn alpha(pixel: u32) -> u8 {
        (pixel >> ALPHA_SHIFT) as u8
    }

    /// Compose an opaque pixel (alpha = 255).
    #[inline]
    pub const fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Opaque gray pixel with all three channels set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> u32 {
        compose_rgb(v, v, v)
    }

    #[inline]
    pub const fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    #[inline]
    pub const fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Widen an 8-bit channel to the 16-bit range (`v * 257`), so 255 maps
    /// to 65535 exactly.
    #[inline]
    pub const fn widen(v: u8) -> u32 {
        v as u32 * 257
    }

}
