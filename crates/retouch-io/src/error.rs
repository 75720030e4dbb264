//! Error types for catalog, decode and preview operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No image with this identifier exists in the catalog.
    #[error("image not found: {0}")]
    NotFound(String),

    /// The file extension is not one of the recognised image formats.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The file exists but could not be decoded as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Preview encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Decoded pixels did not form a valid buffer.
    #[error(transparent)]
    Core(#[from] retouch_core::Error),
}

impl IoError {
    /// Returns `true` for failures that leave the caller free to retry with
    /// another image.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::UnsupportedFormat(_) | Self::Decode(_)
        )
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = IoError::NotFound("cat.png".into());
        assert_eq!(err.to_string(), "image not found: cat.png");
        assert!(err.is_load_failure());

        let err: IoError = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(err, IoError::Io(_)));
        assert!(!err.is_load_failure());
    }
}
