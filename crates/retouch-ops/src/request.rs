//! Operation requests and their dispatch onto a [`TransformEngine`].
//!
//! Front ends describe what the user asked for as an [`Operation`] value
//! and hand it to [`dispatch`], which maps each variant onto exactly one
//! engine method.
//!
//! # Example
//!
//! ```rust
//! use retouch_core::{PixelBuffer, Shape};
//! use retouch_ops::{dispatch, Operation, TransformEngine};
//!
//! let mut engine = TransformEngine::new(PixelBuffer::filled(Shape::new(3, 3, 3), 100));
//! dispatch(&mut engine, Operation::Brightness { delta: 20 }).unwrap();
//! assert_eq!(engine.target()[(0, 0, 0)], 120);
//! ```

use crate::adjust::BrightnessContrast;
use crate::transform::FlipAxis;
use crate::{OpsResult, TransformEngine};
use retouch_core::PixelBuffer;
use tracing::debug;

/// A single edit requested by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Shift every sample by `delta`.
    Brightness {
        /// Value added to every sample.
        delta: i32,
    },
    /// Contrast from a user-facing level in roughly `[-255, 255]`.
    Contrast {
        /// Contrast level fed to [`contrast_factor`](crate::adjust::contrast_factor).
        level: f64,
    },
    /// Brightness and contrast factor in one pass.
    BrightnessContrast(BrightnessContrast),
    /// Collapse every pixel to its luma.
    Grayscale,
    /// Mirror along an axis.
    Flip(FlipAxis),
    /// Average a second buffer into the grayscaled target.
    Stack(PixelBuffer),
    /// 3×3 box blur.
    Blur,
    /// Restore the target from the origin snapshot.
    Reset,
}

impl Operation {
    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brightness { .. } => "brightness",
            Self::Contrast { .. } => "contrast",
            Self::BrightnessContrast(_) => "brightness/contrast",
            Self::Grayscale => "grayscale",
            Self::Flip(_) => "flip",
            Self::Stack(_) => "stack",
            Self::Blur => "blur",
            Self::Reset => "reset",
        }
    }
}

/// Applies `op` to `engine`.
///
/// # Errors
///
/// Propagates the recoverable errors of the engine methods:
/// [`OpsError::InvalidContrastLevel`](crate::OpsError::InvalidContrastLevel)
/// and [`OpsError::ShapeMismatch`](crate::OpsError::ShapeMismatch). The
/// target is unchanged whenever an error is returned.
pub fn dispatch(engine: &mut TransformEngine, op: Operation) -> OpsResult<()> {
    debug!(op = op.name(), "dispatch");
    match op {
        Operation::Brightness { delta } => engine.brightness(delta),
        Operation::Contrast { level } => engine.contrast_level(level)?,
        Operation::BrightnessContrast(bc) => engine.brightness_contrast(bc.brightness, bc.contrast),
        Operation::Grayscale => engine.grayscale(),
        Operation::Flip(axis) => engine.flip_axis(axis),
        Operation::Stack(other) => engine.stack(&other)?,
        Operation::Blur => engine.blur(),
        Operation::Reset => engine.reset(),
    }
    Ok(())
}
