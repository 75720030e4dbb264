//! Two-image stacking.
//!
//! Stacking merges a second buffer into the target as an equal-weight
//! average of two grayscale layers:
//!
//! ```text
//! target' = (grayscale(target) + other) / 2
//! ```
//!
//! Only the target is grayscaled here. The second layer is used exactly as
//! supplied; callers that want two gray layers grayscale it themselves
//! before stacking (the CLI session does). Stacking a colour `other` is
//! allowed and tints the result.

use crate::grayscale::grayscale;
use crate::{OpsError, OpsResult};
use retouch_core::{clamp_truncate, PixelBuffer};
use tracing::{trace, warn};

/// Averages `other` into the grayscaled `target`.
///
/// # Errors
///
/// Returns [`OpsError::ShapeMismatch`] if the two shapes differ. `target` is
/// left byte-for-byte unchanged in that case.
///
/// # Example
///
/// ```rust
/// use retouch_core::{PixelBuffer, Shape};
/// use retouch_ops::composite::stack;
///
/// let mut target = PixelBuffer::filled(Shape::new(2, 2, 3), 0);
/// let other = PixelBuffer::filled(Shape::new(2, 2, 3), 201);
/// stack(&mut target, &other).unwrap();
/// assert!(target.as_slice().iter().all(|&v| v == 100));
///
/// let small = PixelBuffer::new(Shape::new(1, 1, 3));
/// assert!(stack(&mut target, &small).is_err());
/// ```
pub fn stack(target: &mut PixelBuffer, other: &PixelBuffer) -> OpsResult<()> {
    if !target.same_shape(other) {
        warn!(target = %target.shape(), other = %other.shape(), "stack: shape mismatch");
        return Err(OpsError::ShapeMismatch {
            target: target.shape(),
            other: other.shape(),
        });
    }
    trace!(shape = %target.shape(), "stack");

    grayscale(target);
    average_into(target.as_mut_slice(), other.as_slice());
    Ok(())
}

/// Elementwise mean of two equally sized sample slices, written to `dst`.
#[inline]
pub(crate) fn average_into(dst: &mut [u8], other: &[u8]) {
    for (t, &o) in dst.iter_mut().zip(other) {
        *t = clamp_truncate((*t as f64 + o as f64) / 2.0);
    }
}
