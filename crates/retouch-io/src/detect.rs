//! Format detection utilities.
//!
//! Recognises catalog formats from file extensions (case-insensitive) and
//! from magic bytes.

use retouch_core::config::IMAGE_EXTENSIONS;
use std::path::Path;

/// Image formats the catalog lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
    /// TIFF format.
    Tiff,
    /// Windows bitmap.
    Bmp,
    /// GIF format (first frame).
    Gif,
    /// Anything else.
    Unknown,
}

impl Format {
    /// Detects format from the file extension only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retouch_io::Format;
    ///
    /// assert_eq!(Format::from_extension("Holiday.JPG"), Format::Jpeg);
    /// assert_eq!(Format::from_extension("notes.txt"), Format::Unknown);
    /// ```
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            Some("jpg") | Some("jpeg") => Format::Jpeg,
            Some("tiff") => Format::Tiff,
            Some("bmp") => Format::Bmp,
            Some("gif") => Format::Gif,
            _ => Format::Unknown,
        }
    }

    /// Detects format from leading file bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match bytes {
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Format::Png,
            [0xFF, 0xD8, 0xFF, ..] => Format::Jpeg,
            [b'I', b'I', 0x2A, 0x00, ..] | [b'M', b'M', 0x00, 0x2A, ..] => Format::Tiff,
            [b'G', b'I', b'F', b'8', ..] => Format::Gif,
            [b'B', b'M', ..] => Format::Bmp,
            _ => Format::Unknown,
        }
    }

    /// Returns `true` unless this is [`Format::Unknown`].
    #[inline]
    pub fn is_supported(self) -> bool {
        self != Format::Unknown
    }
}

/// Returns `true` if `name` ends in one of the recognised image extensions.
pub fn is_image_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}
