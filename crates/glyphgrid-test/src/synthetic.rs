//! Synthetic test images
//!
//! All builders panic on zero dimensions; they are for tests only.

use glyphgrid_core::{Raster, color};

/// Uniform opaque gray image.
pub fn uniform(width: u32, height: u32, value: u8) -> Raster {
    uniform_rgb(width, height, value, value, value)
}

/// Uniform opaque color image.
pub fn uniform_rgb(width: u32, height: u32, r: u8, g: u8, b: u8) -> Raster {
    Raster::new_filled(width, height, color::compose_rgb(r, g, b))
        .expect("image dimensions must be positive")
}

/// Black on the left, white from column `split` onwards.
pub fn vertical_split(width: u32, height: u32, split: u32) -> Raster {
    Raster::from_fn(width, height, |x, _| {
        if x < split {
            color::BLACK
        } else {
            color::WHITE
        }
    })
    .expect("image dimensions must be positive")
}

/// Black on top, white from row `split` downwards.
pub fn horizontal_split(width: u32, height: u32, split: u32) -> Raster {
    Raster::from_fn(width, height, |_, y| {
        if y < split {
            color::BLACK
        } else {
            color::WHITE
        }
    })
    .expect("image dimensions must be positive")
}

/// Dark/light gray checkerboard (32 and 220) with square cells of `cell`
/// pixels.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> Raster {
    assert!(cell > 0, "cell size must be positive");
    Raster::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            color::gray(32)
        } else {
            color::gray(220)
        }
    })
    .expect("image dimensions must be positive")
}

/// Horizontal gray ramp from 0 at the left edge to 255 at the right edge.
pub fn horizontal_ramp(width: u32, height: u32) -> Raster {
    let span = (width.max(2) - 1) as f64;
    Raster::from_fn(width, height, |x, _| {
        color::gray((x as f64 * 255.0 / span).round() as u8)
    })
    .expect("image dimensions must be positive")
}

/// Image where each pixel carries a distinct color derived from its position.
pub fn coordinate_colors(width: u32, height: u32) -> Raster {
    Raster::from_fn(width, height, |x, y| {
        color::compose_rgb((x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8)
    })
    .expect("image dimensions must be positive")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_split() {
        let img = vertical_split(4, 2, 2);
        assert_eq!(img.get_pixel(1, 1), Some(color::BLACK));
        assert_eq!(img.get_pixel(2, 0), Some(color::WHITE));
    }

    #[test]
    fn test_horizontal_ramp_ends() {
        let img = horizontal_ramp(5, 1);
        assert_eq!(img.get_pixel(0, 0), Some(color::gray(0)));
        assert_eq!(img.get_pixel(4, 0), Some(color::gray(255)));
    }
}
