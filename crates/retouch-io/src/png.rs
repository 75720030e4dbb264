//! PNG preview output.
//!
//! Writes 8-bit buffers through the `png` encoder. One to four channels map
//! to grayscale, grayscale+alpha, RGB and RGBA.
//!
//! # Example
//!
//! ```rust,no_run
//! use retouch_core::{PixelBuffer, Shape};
//! use retouch_io::png;
//!
//! let buf = PixelBuffer::filled(Shape::new(16, 16, 3), 128);
//! png::write("preview.png", &buf)?;
//! # Ok::<(), retouch_io::IoError>(())
//! ```

use crate::{IoError, IoResult};
use retouch_core::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::trace;

/// Writes `buf` as a PNG file at `path`.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be created
/// - [`IoError::Encode`] for empty buffers, unsupported channel counts or
///   encoder failures
pub fn write<P: AsRef<Path>>(path: P, buf: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), shape = %buf.shape(), "png::write");
    let file = File::create(path)?;
    write_to(BufWriter::new(file), buf)
}

/// Encodes `buf` into an in-memory PNG.
pub fn encode(buf: &PixelBuffer) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_to(&mut out, buf)?;
    Ok(out)
}

/// Encodes `buf` as PNG into `writer`.
pub fn write_to<W: Write>(writer: W, buf: &PixelBuffer) -> IoResult<()> {
    if buf.is_empty() {
        return Err(IoError::Encode(format!("cannot encode empty buffer {}", buf.shape())));
    }

    let color_type = match buf.channels() {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => return Err(IoError::Encode(format!("unsupported channel count: {n}"))),
    };
    let width = dimension(buf.width())?;
    let height = dimension(buf.height())?;

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::Encode(e.to_string()))?;
    png_writer
        .write_image_data(buf.as_slice())
        .map_err(|e| IoError::Encode(e.to_string()))?;
    png_writer.finish().map_err(|e| IoError::Encode(e.to_string()))
}

fn dimension(n: usize) -> IoResult<u32> {
    u32::try_from(n).map_err(|_| IoError::Encode(format!("dimension {n} exceeds PNG limits")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::Shape;

    #[test]
    fn test_encode_decodes_back() {
        let shape = Shape::new(5, 7, 3);
        let data = (0..shape.len()).map(|i| (i * 11 % 256) as u8).collect();
        let buf = PixelBuffer::from_vec(shape, data).unwrap();

        let bytes = encode(&buf).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        let back = crate::decode::from_memory(&bytes).unwrap();
        assert_eq!(back, buf);
    }

    #[test]
    fn test_rejects_unencodable() {
        assert!(matches!(
            encode(&PixelBuffer::new(Shape::new(0, 4, 3))),
            Err(IoError::Encode(_))
        ));
        assert!(matches!(
            encode(&PixelBuffer::new(Shape::new(2, 2, 5))),
            Err(IoError::Encode(_))
        ));
    }
}
