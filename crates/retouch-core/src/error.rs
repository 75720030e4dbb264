//! Error types for retouch-core operations.
//!
//! Buffer construction and element access are the only fallible core
//! operations; the pixel transforms themselves never fail.
//!
//! # Usage
//!
//! ```rust
//! use retouch_core::{Error, PixelBuffer, Shape};
//!
//! let err = PixelBuffer::from_vec(Shape::new(2, 2, 3), vec![0; 5]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use crate::Shape;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or addressing a pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Sample coordinates are outside the buffer.
    ///
    /// Returned by checked accessors such as
    /// [`PixelBuffer::set`](crate::PixelBuffer::set).
    #[error("sample ({row}, {col}, {channel}) out of bounds for buffer {shape}")]
    OutOfBounds {
        /// Row that was accessed
        row: usize,
        /// Column that was accessed
        col: usize,
        /// Channel that was accessed
        channel: usize,
        /// Shape of the buffer
        shape: Shape,
    },

    /// Buffer dimensions are unusable for the supplied data.
    ///
    /// Returned when the sample count does not match `height * width * channels`
    /// or when that product overflows `usize`.
    #[error("invalid dimensions {shape}: {reason}")]
    InvalidDimensions {
        /// Requested shape
        shape: Shape,
        /// Why the dimensions were rejected
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(shape: Shape, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            shape,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(row: usize, col: usize, channel: usize, shape: Shape) -> Self {
        Self::OutOfBounds {
            row,
            col,
            channel,
            shape,
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
