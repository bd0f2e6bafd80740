//! Gaussian blur
//!
//! Two interchangeable algorithms:
//!
//! - [`gaussian_blur`]: separable, a horizontal pass ([`convolve_rows`])
//!   followed by a vertical pass ([`convolve_columns`]), O(W*H*radius) per
//!   pass
//! - [`gaussian_blur_2d`]: one pass with the full 2-D kernel
//!   ([`convolve_2d`]), O(W*H*radius^2)
//!
//! Both clamp samples to the nearest edge pixel, round the weighted sum of
//! each RGB channel, saturate it into [0, 255], and write opaque output.
//! Results are close but not identical because the separable version rounds
//! between passes.

use crate::{FilterError, FilterResult, Kernel};
use glyphgrid_core::{Raster, RasterMut, color};
use rayon::prelude::*;

#[derive(Default)]
struct Accumulator {
    r: f64,
    g: f64,
    b: f64,
}

impl Accumulator {
    #[inline]
    fn add(&mut self, pixel: u32, weight: f64) {
        let (r, g, b) = color::extract_rgb(pixel);
        self.r += weight * f64::from(r);
        self.g += weight * f64::from(g);
        self.b += weight * f64::from(b);
    }

    #[inline]
    fn finish(&self) -> u32 {
        let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        color::compose_rgb(channel(self.r), channel(self.g), channel(self.b))
    }
}

fn check_1d(kernel: &Kernel) -> FilterResult<()> {
    if !kernel.is_1d() {
        return Err(FilterError::InvalidKernel(format!(
            "expected a 1-D kernel, got {}x{}",
            kernel.width(),
            kernel.height()
        )));
    }
    Ok(())
}

/// Horizontal pass: convolve every row with a 1-D kernel.
///
/// Each output row is an independent task.
pub fn convolve_rows(raster: &Raster, kernel: &Kernel) -> FilterResult<Raster> {
    check_1d(kernel)?;

    let (w, h) = raster.dimensions();
    let weights = kernel.data();
    let kcx = i64::from(kernel.center_x());
    let mut out = RasterMut::new(w, h)?;

    out.data_mut()
        .par_chunks_mut(w as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as i64;
            for (x, dst) in row.iter_mut().enumerate() {
                let mut acc = Accumulator::default();
                for (k, &weight) in weights.iter().enumerate() {
                    let sx = x as i64 + k as i64 - kcx;
                    acc.add(raster.get_clamped(sx, y), weight);
                }
                *dst = acc.finish();
            }
        });

    Ok(out.into())
}

/// Vertical pass: convolve every column with a 1-D kernel.
///
/// The kernel is applied top to bottom. Output rows are written as
/// independent tasks; each reads its column neighbourhood from the
/// immutable input.
pub fn convolve_columns(raster: &Raster, kernel: &Kernel) -> FilterResult<Raster> {
    check_1d(kernel)?;

    let (w, h) = raster.dimensions();
    let weights = kernel.data();
    // 1-D kernels are stored along x
    let kc = i64::from(kernel.center_x());
    let mut out = RasterMut::new(w, h)?;

    out.data_mut()
        .par_chunks_mut(w as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, dst) in row.iter_mut().enumerate() {
                let mut acc = Accumulator::default();
                for (k, &weight) in weights.iter().enumerate() {
                    let sy = y as i64 + k as i64 - kc;
                    acc.add(raster.get_clamped(x as i64, sy), weight);
                }
                *dst = acc.finish();
            }
        });

    Ok(out.into())
}

/// Direct 2-D convolution with an arbitrary kernel.
pub fn convolve_2d(raster: &Raster, kernel: &Kernel) -> FilterResult<Raster> {
    let (w, h) = raster.dimensions();
    let kw = kernel.width() as usize;
    let weights = kernel.data();
    let kcx = i64::from(kernel.center_x());
    let kcy = i64::from(kernel.center_y());
    let mut out = RasterMut::new(w, h)?;

    out.data_mut()
        .par_chunks_mut(w as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, dst) in row.iter_mut().enumerate() {
                let mut acc = Accumulator::default();
                for (ky, krow) in weights.chunks_exact(kw).enumerate() {
                    let sy = y as i64 + ky as i64 - kcy;
                    for (kx, &weight) in krow.iter().enumerate() {
                        let sx = x as i64 + kx as i64 - kcx;
                        acc.add(raster.get_clamped(sx, sy), weight);
                    }
                }
                *dst = acc.finish();
            }
        });

    Ok(out.into())
}

/// Separable Gaussian blur.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `sigma <= 0`.
pub fn gaussian_blur(raster: &Raster, sigma: f64) -> FilterResult<Raster> {
    let kernel = Kernel::gaussian_1d(sigma)?;
    let horizontal = convolve_rows(raster, &kernel)?;
    convolve_columns(&horizontal, &kernel)
}

/// Direct 2-D Gaussian blur.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `sigma <= 0`.
pub fn gaussian_blur_2d(raster: &Raster, sigma: f64) -> FilterResult<Raster> {
    let kernel = Kernel::gaussian_2d(sigma)?;
    convolve_2d(raster, &kernel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Raster {
        Raster::from_fn(5, 3, |x, _| color::gray((x * 50) as u8)).unwrap()
    }

    #[test]
    fn test_rows_identity_kernel() {
        let k = Kernel::from_slice(3, 1, &[0.0, 1.0, 0.0]).unwrap();
        let src = ramp();
        let out = convolve_rows(&src, &k).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_rows_clamps_at_edges() {
        let k = Kernel::from_slice(3, 1, &[0.5, 0.0, 0.5]).unwrap();
        let out = convolve_rows(&ramp(), &k).unwrap();
        // x=0: (0 + 50) / 2 with the left sample clamped to x=0
        assert_eq!(out.get_rgb(0, 0), Some((25, 25, 25)));
        assert_eq!(out.get_rgb(2, 1), Some((100, 100, 100)));
        // x=4: (150 + 200) / 2
        assert_eq!(out.get_rgb(4, 2), Some((175, 175, 175)));
    }

    #[test]
    fn test_columns_runs_vertically() {
        let src = Raster::from_fn(2, 3, |_, y| color::gray((y * 90) as u8)).unwrap();
        let k = Kernel::from_slice(3, 1, &[0.0, 0.0, 1.0]).unwrap();
        let out = convolve_columns(&src, &k).unwrap();
        // each pixel takes its lower neighbour, clamped at the bottom
        assert_eq!(out.get_rgb(0, 0), Some((90, 90, 90)));
        assert_eq!(out.get_rgb(1, 1), Some((180, 180, 180)));
        assert_eq!(out.get_rgb(1, 2), Some((180, 180, 180)));
    }

    #[test]
    fn test_1d_pass_rejects_2d_kernel() {
        let k = Kernel::gaussian_2d(1.0).unwrap();
        assert!(matches!(
            convolve_rows(&ramp(), &k),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(convolve_columns(&ramp(), &k).is_err());
    }

    #[test]
    fn test_alpha_forced_opaque() {
        let src = Raster::new_filled(4, 4, color::compose_rgba(10, 20, 30, 0)).unwrap();
        let out = gaussian_blur(&src, 1.0).unwrap();
        assert!(out.data().iter().all(|&p| color::alpha(p) == 255));
        let out = gaussian_blur_2d(&src, 1.0).unwrap();
        assert_eq!(out.get_rgba(2, 2), Some((10, 20, 30, 255)));
    }

    #[test]
    fn test_saturates() {
        let k = Kernel::from_slice(3, 1, &[1.0, 1.0, 1.0]).unwrap();
        let src = Raster::new_filled(3, 1, color::gray(200)).unwrap();
        let out = convolve_rows(&src, &k).unwrap();
        assert_eq!(out.get_rgb(1, 0), Some((255, 255, 255)));
        let k = Kernel::from_slice(3, 1, &[-1.0, 0.0, 0.0]).unwrap();
        let out = convolve_rows(&src, &k).unwrap();
        assert_eq!(out.get_rgb(1, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_blur_invalid_sigma() {
        assert!(gaussian_blur(&ramp(), 0.0).is_err());
        assert!(gaussian_blur_2d(&ramp(), -2.0).is_err());
    }
}
