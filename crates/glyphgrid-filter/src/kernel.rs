//! Convolution kernels
//!
//! Defines the weight tables used by the blur engine. Gaussian kernels are
//! generated from the spread `sigma`:
//!
//! - size = `ceil(3 * sigma)`, bumped to the next odd integer
//! - radius = size / 2, center at index `radius`
//! - weights = Gaussian density at integer offsets from the center,
//!   normalized to sum to 1
//!
//! Sizes are capped at [`MAX_GAUSSIAN_SIZE`] per axis and kernels at
//! [`MAX_KERNEL_AREA`] weights in total.

use crate::{FilterError, FilterResult};
use std::f64::consts::PI;

/// Largest odd size a Gaussian kernel may have along one axis.
pub const MAX_GAUSSIAN_SIZE: u32 = u16::MAX as u32;

/// Largest number of weights a kernel may hold.
pub const MAX_KERNEL_AREA: u64 = 1 << 24;

/// A 2D convolution kernel (a 1-D kernel has height 1)
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

/// Odd kernel size for a Gaussian of spread `sigma`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `sigma` is not a positive
/// finite number or if `ceil(3 * sigma)` exceeds [`MAX_GAUSSIAN_SIZE`].
pub fn gaussian_size(sigma: f64) -> FilterResult<u32> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "gaussian sigma must be positive, got {sigma}"
        )));
    }
    let extent = (sigma * 3.0).ceil();
    if extent > f64::from(MAX_GAUSSIAN_SIZE) {
        return Err(FilterError::InvalidParameters(format!(
            "gaussian sigma {sigma} needs a kernel wider than {MAX_GAUSSIAN_SIZE}"
        )));
    }
    let mut size = extent as u32;
    if size % 2 == 0 {
        size += 1;
    }
    Ok(size)
}

fn gaussian_density_1d(x: f64, sigma: f64) -> f64 {
    1.0 / (2.0 * PI * sigma * sigma).sqrt() * (-(x * x) / (2.0 * sigma * sigma)).exp()
}

fn gaussian_density_2d(x: f64, y: f64, sigma: f64) -> f64 {
    1.0 / (2.0 * PI * sigma * sigma) * (-(x * x + y * y) / (2.0 * sigma * sigma)).exp()
}

impl Kernel {
    /// Create a zero kernel with the given dimensions, centered.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if a dimension is zero or the
    /// kernel would hold more than [`MAX_KERNEL_AREA`] weights.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive, got {width}x{height}"
            )));
        }
        if u64::from(width) * u64::from(height) > MAX_KERNEL_AREA {
            return Err(FilterError::InvalidKernel(format!(
                "{width}x{height} kernel exceeds {MAX_KERNEL_AREA} weights"
            )));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![0.0; width as usize * height as usize],
        })
    }

    /// Create a centered kernel from row-major values.
    pub fn from_slice(width: u32, height: u32, data: &[f64]) -> FilterResult<Self> {
        let mut kernel = Self::new(width, height)?;
        if data.len() != kernel.data.len() {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} values for a {width}x{height} kernel, got {}",
                kernel.data.len(),
                data.len()
            )));
        }
        kernel.data.copy_from_slice(data);
        Ok(kernel)
    }

    /// Create a normalized 1-D Gaussian kernel (height 1).
    pub fn gaussian_1d(sigma: f64) -> FilterResult<Self> {
        let size = gaussian_size(sigma)?;
        let radius = (size / 2) as i64;
        let mut kernel = Self::new(size, 1)?;
        for (i, w) in kernel.data.iter_mut().enumerate() {
            *w = gaussian_density_1d((i as i64 - radius) as f64, sigma);
        }
        kernel.normalize();
        Ok(kernel)
    }

    /// Create a normalized square 2-D Gaussian kernel.
    pub fn gaussian_2d(sigma: f64) -> FilterResult<Self> {
        let size = gaussian_size(sigma)?;
        if u64::from(size) * u64::from(size) > MAX_KERNEL_AREA {
            return Err(FilterError::InvalidParameters(format!(
                "gaussian sigma {sigma} is too large for a {size}x{size} kernel"
            )));
        }
        let radius = (size / 2) as i64;
        let mut kernel = Self::new(size, size)?;
        for ky in 0..size {
            for kx in 0..size {
                let dx = (kx as i64 - radius) as f64;
                let dy = (ky as i64 - radius) as f64;
                kernel.set(kx, ky, gaussian_density_2d(dx, dy, sigma));
            }
        }
        kernel.normalize();
        Ok(kernel)
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
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Half-width of a centered 1-D kernel.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.width / 2
    }

    /// Whether this is a single-row (1-D) kernel.
    #[inline]
    pub fn is_1d(&self) -> bool {
        self.height == 1
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Set a value at (x, y). Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.data[idx] = value;
        }
    }

    /// Normalize the kernel so that values sum to 1.
    ///
    /// A kernel summing to zero is left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum != 0.0 {
            for w in &mut self.data {
                *w /= sum;
            }
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}
