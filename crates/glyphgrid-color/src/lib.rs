//! glyphgrid-color - Color processing for the glyph pipeline
//!
//! - **Desaturation** ([`colorspace::desaturate`]): HSL-lightness grayscale
//!   that keeps the RGBA representation
//! - **Luminance levels** ([`colorspace::luminance_level`]): 0-10 level used
//!   to index the glyph ramp
//! - **HSV -> RGB** ([`colorspace::hsv_to_rgb`]): degree/percent HSV used by
//!   the full-hue gradient visualization

pub mod colorspace;
pub mod error;

pub use error::{ColorError, ColorResult};

pub use colorspace::{
    Hsv, LUMINANCE_LEVELS, desaturate, desaturate_pixel, hsv_to_rgb, lightness, luminance_level,
};
