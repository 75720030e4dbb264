//! Error types for pixel operations.

use retouch_core::Shape;
use thiserror::Error;

/// Error type for pixel operations.
///
/// Every variant is recoverable: the operation that reports it leaves the
/// buffer it was given untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Two buffers that must match element by element have different shapes.
    #[error("shape mismatch: target is {target}, other is {other}")]
    ShapeMismatch {
        /// Shape of the buffer being modified.
        target: Shape,
        /// Shape of the buffer it was combined with.
        other: Shape,
    },

    /// Contrast level outside the domain of the factor derivation.
    #[error("invalid contrast level {level}: must be finite and below 259")]
    InvalidContrastLevel {
        /// Rejected level.
        level: f64,
    },

    /// Error from buffer construction or access.
    #[error(transparent)]
    Core(#[from] retouch_core::Error),
}

impl OpsError {
    /// Returns `true` for [`OpsError::ShapeMismatch`].
    #[inline]
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }
}

/// Result type for pixel operations.
pub type OpsResult<T> = Result<T, OpsError>;
