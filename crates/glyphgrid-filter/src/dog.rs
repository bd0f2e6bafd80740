//! Difference-of-Gaussians edge mask
//!
//! The input is desaturated and blurred twice, at `sigma` and at
//! `k * sigma`. For every pixel and RGB channel
//!
//! ```text
//! diff = floor((1 + tau) * low - tau * high)
//! ```
//!
//! with `tau` = [`DOG_TAU`]. A pixel is white when `diff` exceeds the
//! threshold in any channel, black otherwise.

use crate::kernel::gaussian_size;
use crate::{FilterError, FilterResult, gaussian_blur};
use glyphgrid_color::desaturate;
use glyphgrid_core::{Raster, RasterMut, color};
use rayon::prelude::*;

/// Weight of the wide blur in the difference.
pub const DOG_TAU: f64 = 0.4;

/// Options for [`difference_of_gaussians`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DogOptions {
    /// Spread of the narrow blur (must be > 0)
    pub sigma: f64,
    /// Ratio of the wide blur's spread to `sigma` (must be > 0)
    pub k: f64,
    /// Channel threshold above which a pixel is an edge (must be >= 0)
    pub threshold: i32,
}

impl Default for DogOptions {
    fn default() -> Self {
        Self {
            sigma: 0.5,
            k: 6.0,
            threshold: 120,
        }
    }
}

impl DogOptions {
    /// Check that every field is in range and that both blur kernels stay
    /// within [`MAX_GAUSSIAN_SIZE`](crate::MAX_GAUSSIAN_SIZE).
    pub fn validate(&self) -> FilterResult<()> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "sigma must be positive, got {}",
                self.sigma
            )));
        }
        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "k must be positive, got {}",
                self.k
            )));
        }
        // both blur widths must fit a kernel
        gaussian_size(self.sigma)?;
        gaussian_size(self.sigma * self.k)?;
        if self.threshold < 0 {
            return Err(FilterError::InvalidParameters(format!(
                "threshold must be non-negative, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

#[inline]
fn channel_diff(low: u8, high: u8) -> i32 {
    ((1.0 + DOG_TAU) * f64::from(low) - DOG_TAU * f64::from(high)).floor() as i32
}

#[inline]
fn is_edge(low: u32, high: u32, threshold: i32) -> bool {
    let (lr, lg, lb) = color::extract_rgb(low);
    let (hr, hg, hb) = color::extract_rgb(high);
    channel_diff(lr, hr) > threshold
        || channel_diff(lg, hg) > threshold
        || channel_diff(lb, hb) > threshold
}

/// Build a binary edge mask with the difference of two Gaussian blurs.
///
/// The two blurs run concurrently and are joined before differencing; the
/// first failing blur's error is returned.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if the options are out of
/// range.
pub fn difference_of_gaussians(raster: &Raster, options: &DogOptions) -> FilterResult<Raster> {
    options.validate()?;

    let (w, h) = raster.dimensions();
    log::debug!(
        "dog: {w}x{h}, sigma={} k={} threshold={}",
        options.sigma,
        options.k,
        options.threshold
    );

    let gray = desaturate(raster)?;
    let wide_sigma = options.k * options.sigma;
    let (low, high) = rayon::join(
        || gaussian_blur(&gray, options.sigma),
        || gaussian_blur(&gray, wide_sigma),
    );
    let (low, high) = (low?, high?);

    let threshold = options.threshold;
    let mut out = RasterMut::new(w, h)?;
    out.data_mut()
        .par_chunks_mut(w as usize)
        .zip(low.data().par_chunks(w as usize))
        .zip(high.data().par_chunks(w as usize))
        .for_each(|((dst, lo), hi)| {
            for ((d, &l), &hh) in dst.iter_mut().zip(lo).zip(hi) {
                *d = if is_edge(l, hh, threshold) {
                    color::WHITE
                } else {
                    color::BLACK
                };
            }
        });

    Ok(out.into())
}
