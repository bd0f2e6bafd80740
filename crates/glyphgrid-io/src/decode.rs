//! Image decoding and encoding through the `image` crate

use crate::{IoError, IoResult};
use glyphgrid_core::Raster;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;

fn decode_error(e: ImageError) -> IoError {
    match e {
        ImageError::IoError(e) => IoError::Io(e),
        ImageError::Unsupported(e) => IoError::UnsupportedFormat(e.to_string()),
        e => IoError::DecodeError(e.to_string()),
    }
}

fn to_raster(img: DynamicImage) -> IoResult<Raster> {
    let rgba = img.into_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(Raster::from_rgba_bytes(w, h, rgba.as_raw())?)
}

/// Read an image file, detecting the format from its header.
///
/// Every pixel representation is converted to 8-bit RGBA.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(decode_error)?;
    log::debug!(
        "read {}: {}x{} {:?}",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    to_raster(img)
}

/// Decode an in-memory image, detecting the format from its header.
pub fn read_image_from_bytes(data: &[u8]) -> IoResult<Raster> {
    let img = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .decode()
        .map_err(decode_error)?;
    to_raster(img)
}

/// Write a raster as a PNG file.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let (w, h) = raster.dimensions();
    let img = RgbaImage::from_raw(w, h, raster.to_rgba_bytes())
        .ok_or_else(|| IoError::EncodeError(format!("buffer does not match a {w}x{h} image")))?;
    img.save_with_format(path.as_ref(), ImageFormat::Png)
        .map_err(|e| IoError::EncodeError(e.to_string()))
}
