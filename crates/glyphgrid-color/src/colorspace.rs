//! Color space helpers
//!
//! - RGB -> grayscale by HSL lightness ([`desaturate`])
//! - red channel -> luminance level ([`luminance_level`])
//! - HSV -> RGB in degree/percent units ([`hsv_to_rgb`])

use crate::ColorResult;
use glyphgrid_core::{Raster, RasterMut, color};
use rayon::prelude::*;

/// Number of luminance levels above zero.
pub const LUMINANCE_LEVELS: u8 = 10;

/// HSV color in the units the gradient visualization uses
///
/// - `h`: hue in degrees, wraps every 360
/// - `s`: saturation in percent [0, 100]
/// - `v`: value in percent [0, 100]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// Convert HSV to 8-bit RGB.
///
/// The hue circle is split into six 60-degree sectors; within a sector one
/// channel holds `v`, one holds the minimum chroma `v * (100 - s) / 100`, and
/// the third interpolates linearly between them. Each channel is scaled with
/// `c * 255 / 100` and truncated, so results are reproducible bit for bit.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let Hsv { h, s, v } = hsv;
    let h = h.rem_euclid(360.0);

    let sector = (h / 60.0).floor() as i64 % 6;
    let v_min = (100.0 - s) * v / 100.0;
    let a = (v - v_min) * ((h % 60.0) / 60.0);
    let v_inc = v_min + a;
    let v_dec = v - a;

    let (r, g, b) = match sector {
        0 => (v, v_inc, v_min),
        1 => (v_dec, v, v_min),
        2 => (v_min, v, v_inc),
        3 => (v_min, v_dec, v),
        4 => (v_inc, v_min, v),
        _ => (v, v_min, v_dec),
    };

    (
        (r * 255.0 / 100.0) as u8,
        (g * 255.0 / 100.0) as u8,
        (b * 255.0 / 100.0) as u8,
    )
}

/// HSL lightness `(max + min) / 2` of an RGB triple, in [0, 1].
#[inline]
pub fn lightness(r: u8, g: u8, b: u8) -> f64 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (f64::from(max) / 255.0 + f64::from(min) / 255.0) / 2.0
}

/// Fully desaturate one pixel.
///
/// All three channels become the HSL lightness scaled to [0, 255] and
/// rounded half up; alpha is kept.
#[inline]
pub fn desaturate_pixel(pixel: u32) -> u32 {
    let (r, g, b, a) = color::extract_rgba(pixel);
    let l = (lightness(r, g, b) * 255.0 + 0.5) as u8;
    color::compose_rgba(l, l, l, a)
}

/// Desaturate an image, keeping its RGBA representation.
///
/// Rows are processed in parallel.
pub fn desaturate(raster: &Raster) -> ColorResult<Raster> {
    let (w, h) = raster.dimensions();
    let mut out = RasterMut::new(w, h)?;
    out.data_mut()
        .par_chunks_mut(w as usize)
        .zip(raster.data().par_chunks(w as usize))
        .for_each(|(dst, src)| {
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = desaturate_pixel(s);
            }
        });
    Ok(out.into())
}

/// Luminance level (0 to [`LUMINANCE_LEVELS`]) of a grayscale pixel's red
/// channel.
///
/// The channel is widened to 16 bits and mapped as
/// `floor(red16 / 65535 * 10)`, so only pure white reaches level 10.
#[inline]
pub fn luminance_level(red: u8) -> u8 {
    if red == 0 {
        return 0;
    }
    (f64::from(color::widen(red)) / 65535.0 * f64::from(LUMINANCE_LEVELS)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_sector_boundaries() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 100.0, 100.0)), (255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(60.0, 100.0, 100.0)), (255, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(120.0, 100.0, 100.0)), (0, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(180.0, 100.0, 100.0)), (0, 255, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(240.0, 100.0, 100.0)), (0, 0, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(300.0, 100.0, 100.0)), (255, 0, 255));
    }

    #[test]
    fn test_hsv_truncates() {
        // 50 * 255 / 100 = 127.5
        assert_eq!(hsv_to_rgb(Hsv::new(30.0, 100.0, 100.0)), (255, 127, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(90.0, 100.0, 100.0)), (127, 255, 0));
    }

    #[test]
    fn test_hsv_wraps() {
        assert_eq!(
            hsv_to_rgb(Hsv::new(360.0, 100.0, 100.0)),
            hsv_to_rgb(Hsv::new(0.0, 100.0, 100.0))
        );
        assert_eq!(
            hsv_to_rgb(Hsv::new(-60.0, 100.0, 100.0)),
            hsv_to_rgb(Hsv::new(300.0, 100.0, 100.0))
        );
    }

    #[test]
    fn test_hsv_gray() {
        assert_eq!(hsv_to_rgb(Hsv::new(200.0, 0.0, 100.0)), (255, 255, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(200.0, 0.0, 0.0)), (0, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(200.0, 0.0, 50.0)), (127, 127, 127));
    }

    #[test]
    fn test_desaturate_pixel() {
        assert_eq!(desaturate_pixel(color::compose_rgb(255, 0, 0)), color::gray(128));
        assert_eq!(desaturate_pixel(color::compose_rgb(10, 20, 30)), color::gray(20));
        assert_eq!(desaturate_pixel(color::WHITE), color::WHITE);
        assert_eq!(
            desaturate_pixel(color::compose_rgba(0, 0, 0, 7)),
            color::compose_rgba(0, 0, 0, 7)
        );
    }

    #[test]
    fn test_luminance_level() {
        assert_eq!(luminance_level(0), 0);
        assert_eq!(luminance_level(25), 0);
        assert_eq!(luminance_level(26), 1);
        assert_eq!(luminance_level(128), 5);
        assert_eq!(luminance_level(254), 9);
        assert_eq!(luminance_level(255), 10);
    }
}
