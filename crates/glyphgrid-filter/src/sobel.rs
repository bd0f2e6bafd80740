//! Sobel gradient analysis
//!
//! The red channel of every pixel (the input is expected to be gray-valued)
//! is widened to 16 bits and convolved with the two constant 3x3 Sobel
//! kernels over a clamp-to-edge neighbourhood. From the two sums:
//!
//! - magnitude = `sqrt(sum_x^2 + sum_y^2)`
//! - orientation = `atan2(sum_y, sum_x)`, shifted by pi, scaled to degrees
//!   and reduced modulo 180
//!
//! Three outputs are available:
//!
//! | Function           | Output                                        |
//! |--------------------|-----------------------------------------------|
//! | [`sobel_binary`]   | white where magnitude > threshold             |
//! | [`sobel_classify`] | [`EdgeMap`] with one of four edge directions  |
//! | [`sobel_hue`]      | orientation rendered as a fully saturated hue |
//!
//! Thresholds are in the widened 16-bit scale.

use crate::{FilterError, FilterResult};
use glyphgrid_color::{Hsv, hsv_to_rgb};
use glyphgrid_core::{EdgeDirection, EdgeMap, Raster, RasterMut, color};
use rayon::prelude::*;
use std::f64::consts::PI;

/// Horizontal derivative kernel (responds to changes along x).
pub const SOBEL_HORIZONTAL: [[i64; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical derivative kernel (responds to changes along y).
pub const SOBEL_VERTICAL: [[i64; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Gradient sums at one pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gradient {
    pub sum_x: i64,
    pub sum_y: i64,
}

impl Gradient {
    /// Euclidean length of the gradient.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        let (x, y) = (self.sum_x as f64, self.sum_y as f64);
        (x * x + y * y).sqrt()
    }

    /// Angle of the gradient in [0, 1), a full turn starting at -pi.
    #[inline]
    pub fn turn_fraction(&self) -> f64 {
        let theta = (self.sum_y as f64).atan2(self.sum_x as f64);
        (theta + PI) / (2.0 * PI)
    }

    /// Orientation in degrees, folded into [0, 180).
    #[inline]
    pub fn orientation_degrees(&self) -> f64 {
        (self.turn_fraction() * 360.0) % 180.0
    }
}

/// Compute the Sobel gradient at (x, y) from the widened red channel.
///
/// Neighbours outside the image are clamped to the nearest edge pixel.
pub fn gradient_at(raster: &Raster, x: u32, y: u32) -> Gradient {
    let mut grad = Gradient::default();
    for (ky, (hrow, vrow)) in SOBEL_HORIZONTAL.iter().zip(&SOBEL_VERTICAL).enumerate() {
        let sy = i64::from(y) + ky as i64 - 1;
        for kx in 0..3 {
            let sx = i64::from(x) + kx as i64 - 1;
            let v = i64::from(color::widen(color::red(raster.get_clamped(sx, sy))));
            grad.sum_x += hrow[kx] * v;
            grad.sum_y += vrow[kx] * v;
        }
    }
    grad
}

/// Map an orientation in degrees to the direction of the edge line.
///
/// | Degrees                    | Direction          | Glyph |
/// |----------------------------|--------------------|-------|
/// | [0, 22.5) or [157.5, 180)  | `Vertical`         | `\|`  |
/// | [22.5, 67.5)               | `DiagonalBackward` | `/`   |
/// | [67.5, 112.5)              | `Horizontal`       | `_`   |
/// | [112.5, 157.5)             | `DiagonalForward`  | `\`   |
///
/// The gradient is perpendicular to the edge, so a horizontal gradient
/// (0 degrees) marks a vertical edge line.
pub fn classify_orientation(degrees: f64) -> EdgeDirection {
    match degrees {
        d if !(22.5..157.5).contains(&d) => EdgeDirection::Vertical,
        d if d < 67.5 => EdgeDirection::DiagonalBackward,
        d if d < 112.5 => EdgeDirection::Horizontal,
        _ => EdgeDirection::DiagonalForward,
    }
}

fn check_threshold(threshold: f64) -> FilterResult<()> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "sobel threshold must be a non-negative number, got {threshold}"
        )));
    }
    Ok(())
}

/// Run `f` on the gradient of every pixel, one output row per task.
fn map_gradients<T, F>(raster: &Raster, out: &mut [T], f: F)
where
    T: Send,
    F: Fn(Gradient) -> T + Sync,
{
    let w = raster.width() as usize;
    out.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        for (x, dst) in row.iter_mut().enumerate() {
            *dst = f(gradient_at(raster, x as u32, y as u32));
        }
    });
}

/// Binary gradient mask: white where magnitude > threshold, black elsewhere.
pub fn sobel_binary(raster: &Raster, threshold: f64) -> FilterResult<Raster> {
    check_threshold(threshold)?;
    let (w, h) = raster.dimensions();
    log::debug!("sobel_binary: {w}x{h}, threshold={threshold}");

    let mut out = RasterMut::new(w, h)?;
    map_gradients(raster, out.data_mut(), |g| {
        if g.magnitude() > threshold {
            color::WHITE
        } else {
            color::BLACK
        }
    });
    Ok(out.into())
}

/// Classify every pixel into an edge direction.
///
/// Pixels whose magnitude is below `threshold` are
/// [`EdgeDirection::None`]; the rest are bucketed with
/// [`classify_orientation`].
pub fn sobel_classify(raster: &Raster, threshold: f64) -> FilterResult<EdgeMap> {
    check_threshold(threshold)?;
    let (w, h) = raster.dimensions();
    log::debug!("sobel_classify: {w}x{h}, threshold={threshold}");

    let mut edges = EdgeMap::new(w, h)?;
    map_gradients(raster, edges.data_mut(), |g| {
        if g.magnitude() < threshold {
            EdgeDirection::None
        } else {
            classify_orientation(g.orientation_degrees())
        }
    });
    Ok(edges)
}

/// Render gradient orientation as a fully saturated hue.
///
/// Pixels below `threshold` are black. The hue is the full-turn angle
/// (not folded to 180 degrees) in degrees.
pub fn sobel_hue(raster: &Raster, threshold: f64) -> FilterResult<Raster> {
    check_threshold(threshold)?;
    let (w, h) = raster.dimensions();
    log::debug!("sobel_hue: {w}x{h}, threshold={threshold}");

    let mut out = RasterMut::new(w, h)?;
    map_gradients(raster, out.data_mut(), |g| {
        if g.magnitude() < threshold {
            color::BLACK
        } else {
            let (r, gg, b) = hsv_to_rgb(Hsv::new(g.turn_fraction() * 360.0, 100.0, 100.0));
            color::compose_rgb(r, gg, b)
        }
    });
    Ok(out.into())
}
