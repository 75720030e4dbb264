//! Decoding into 8-bit RGB pixel buffers via the `image` crate.
//!
//! Every decoded image is converted to RGB8, so loaded buffers always have
//! three channels regardless of the source colour type. Alpha is dropped
//! and 16-bit sources are scaled down.

use crate::detect::Format;
use crate::{IoError, IoResult};
use image::{DynamicImage, ImageReader};
use retouch_core::{PixelBuffer, Shape};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Reads and decodes the image file at `path`.
///
/// The container format is guessed from the leading bytes, falling back to
/// the extension.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be opened
/// - [`IoError::Decode`] if the contents are not a decodable image
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    trace!(path = %path.display(), "decode::read");

    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| IoError::Decode(format!("{}: {e}", path.display())))?;

    to_buffer(img)
}

/// Decodes an in-memory encoded image.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] if the magic bytes match no known format
/// - [`IoError::Decode`] if decoding fails
pub fn from_memory(bytes: &[u8]) -> IoResult<PixelBuffer> {
    let format = Format::from_bytes(bytes);
    if !format.is_supported() {
        return Err(IoError::UnsupportedFormat("unrecognised image header".into()));
    }
    trace!(?format, len = bytes.len(), "decode::from_memory");

    let img = image::load_from_memory(bytes).map_err(|e| IoError::Decode(e.to_string()))?;
    to_buffer(img)
}

/// Converts a decoded image to an RGB8 [`PixelBuffer`].
pub fn to_buffer(img: DynamicImage) -> IoResult<PixelBuffer> {
    let rgb = img.into_rgb8();
    let (width, height) = rgb.dimensions();
    let shape = Shape::new(height as usize, width as usize, 3);
    debug!(%shape, "decoded image");
    Ok(PixelBuffer::from_vec(shape, rgb.into_raw())?)
}
