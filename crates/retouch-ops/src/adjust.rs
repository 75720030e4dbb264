//! Brightness and contrast remapping.
//!
//! Every sample is remapped around mid-gray:
//!
//! ```text
//! out = (in - 128) * contrast + 128 + brightness
//! ```
//!
//! and then settled with [`clamp_truncate`]. Mid-gray (128) is a fixed
//! point of every contrast factor.
//!
//! User-facing contrast is a *level* in roughly `[-255, 255]`; it is turned
//! into the multiplicative factor by [`contrast_factor`].
//!
//! # Example
//!
//! ```rust
//! use retouch_core::{PixelBuffer, Shape};
//! use retouch_ops::adjust::{brightness_contrast, contrast_factor};
//!
//! let mut buf = PixelBuffer::filled(Shape::new(3, 3, 3), 100);
//! brightness_contrast(&mut buf, 0, 2.0);
//! assert_eq!(buf[(0, 0, 0)], 72);
//!
//! assert!(contrast_factor(259.0).is_err());
//! ```

use crate::{OpsError, OpsResult};
use retouch_core::config::{CONTRAST_PIVOT, CONTRAST_SINGULARITY};
use retouch_core::{clamp_truncate, PixelBuffer};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Brightness/contrast parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessContrast {
    /// Value added to every sample after contrast scaling (0 = no change).
    pub brightness: i32,
    /// Multiplicative contrast factor around mid-gray (1.0 = no change).
    pub contrast: f64,
}

impl Default for BrightnessContrast {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 1.0,
        }
    }
}

impl BrightnessContrast {
    /// Create identity (no change).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Brightness shift only.
    pub fn brightness(delta: i32) -> Self {
        Self {
            brightness: delta,
            ..Self::default()
        }
    }

    /// Contrast factor only.
    pub fn contrast(factor: f64) -> Self {
        Self {
            contrast: factor,
            ..Self::default()
        }
    }

    /// Contrast derived from a user-facing level.
    ///
    /// # Errors
    ///
    /// See [`contrast_factor`].
    pub fn from_contrast_level(level: f64) -> OpsResult<Self> {
        Ok(Self::contrast(contrast_factor(level)?))
    }

    /// Check if this is identity (no-op).
    pub fn is_identity(&self) -> bool {
        self.brightness == 0 && self.contrast == 1.0
    }

    /// Remaps a single sample.
    #[inline]
    pub fn apply_value(&self, value: u8) -> u8 {
        clamp_truncate(
            (value as f64 - CONTRAST_PIVOT) * self.contrast + CONTRAST_PIVOT + self.brightness as f64,
        )
    }

    /// Remaps every sample of `buf` in place.
    pub fn apply(&self, buf: &mut PixelBuffer) {
        if self.is_identity() {
            trace!("brightness_contrast: identity, skipped");
            return;
        }
        trace!(shape = %buf.shape(), brightness = self.brightness, contrast = self.contrast, "brightness_contrast");
        for v in buf.as_mut_slice().iter_mut() {
            *v = self.apply_value(*v);
        }
    }
}

/// Converts a contrast level into a multiplicative factor.
///
/// ```text
/// factor(L) = (259 * (L + 255)) / (255 * (259 - L))
/// ```
///
/// Level 0 maps to 1.0, -255 to 0.0 (flat gray) and 255 to about 129.5.
///
/// # Errors
///
/// Returns [`OpsError::InvalidContrastLevel`] if `level` is not finite or
/// `level >= 259`, where the denominator is zero or negative.
pub fn contrast_factor(level: f64) -> OpsResult<f64> {
    if !level.is_finite() || level >= CONTRAST_SINGULARITY {
        debug!(level, "rejecting contrast level");
        return Err(OpsError::InvalidContrastLevel { level });
    }
    Ok((CONTRAST_SINGULARITY * (level + 255.0)) / (255.0 * (CONTRAST_SINGULARITY - level)))
}

/// Applies brightness and contrast to every sample of `buf`.
///
/// Pass `0` / `1.0` for the parameter that should stay unchanged.
pub fn brightness_contrast(buf: &mut PixelBuffer, brightness: i32, contrast: f64) {
    BrightnessContrast {
        brightness,
        contrast,
    }
    .apply(buf);
}
