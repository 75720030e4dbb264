//! Clamping and truncation of arithmetic results.
//!
//! Every pixel operation funnels its real-valued results through
//! [`clamp_truncate`]: the value is clamped into `[0, 255]` first and then
//! truncated toward zero. Applying the rule twice gives the same result as
//! applying it once.
//!
//! # Example
//!
//! ```rust
//! use retouch_core::clamp_truncate;
//!
//! assert_eq!(clamp_truncate(-12.0), 0);
//! assert_eq!(clamp_truncate(71.9), 71);
//! assert_eq!(clamp_truncate(300.5), 255);
//! ```

use crate::config::{MAX_CHANNEL_VALUE, MIN_CHANNEL_VALUE};

/// Settles a real value into a channel sample.
///
/// NaN settles to [`MIN_CHANNEL_VALUE`]; infinities settle to the nearest
/// bound.
#[inline]
pub fn clamp_truncate(value: f64) -> u8 {
    if value.is_nan() {
        return MIN_CHANNEL_VALUE;
    }
    // `as u8` truncates toward zero; the clamp keeps it in range.
    value.clamp(MIN_CHANNEL_VALUE as f64, MAX_CHANNEL_VALUE as f64) as u8
}

/// Settles a slice of intermediate results in place.
///
/// Each element is replaced by its [`clamp_truncate`]d value, still stored
/// as `f64` so callers can keep working in real arithmetic.
pub fn settle(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = clamp_truncate(*v) as f64;
    }
}
