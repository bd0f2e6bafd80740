//! glyphgrid-io - Image input and document output
//!
//! - **Decoding** ([`read_image`], [`read_image_from_bytes`]): any format
//!   the `image` crate recognizes by its header (PNG, JPEG, GIF, BMP, TIFF,
//!   WebP, PNM), converted to an RGBA [`Raster`](glyphgrid_core::Raster)
//! - **Encoding** ([`write_image`]): PNG output for intermediate rasters
//! - **HTML** ([`html_document`], [`write_html`]): the page that displays a
//!   flattened glyph grid

mod decode;
mod error;
mod html;

pub use decode::{read_image, read_image_from_bytes, write_image};
pub use error::{IoError, IoResult};
pub use html::{DEFAULT_OUTPUT, html_document, write_html};
