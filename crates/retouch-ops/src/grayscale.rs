//! Grayscale conversion.
//!
//! Collapses every pixel to a single approximate luma value:
//!
//! ```text
//! luma = R * 0.21 + G * 0.72 + B * 0.11
//! ```
//!
//! The weights sum to 1.04, so very bright pixels can overshoot 255; the
//! result is settled with [`clamp_truncate`] like every other operation.
//! Only the first three channels are weighted and overwritten; any further
//! channel (alpha) is kept as is.

use retouch_core::config::{LUMA_B, LUMA_G, LUMA_R};
use retouch_core::{clamp_truncate, PixelBuffer};
use tracing::{debug, trace};

/// Luma of an RGB triple, before settling.
#[inline]
pub fn luma(rgb: [u8; 3]) -> f64 {
    rgb[0] as f64 * LUMA_R + rgb[1] as f64 * LUMA_G + rgb[2] as f64 * LUMA_B
}

/// Settled luma of a pixel's first three channels.
#[inline]
pub(crate) fn pixel_luma(px: &[u8]) -> u8 {
    clamp_truncate(luma([px[0], px[1], px[2]]))
}

/// Sets the colour channels of every pixel to its luma.
///
/// Buffers with fewer than three channels are already single-valued and are
/// left unchanged.
pub fn grayscale(buf: &mut PixelBuffer) {
    let channels = buf.channels();
    if channels < 3 {
        debug!(channels, "grayscale: nothing to collapse");
        return;
    }
    trace!(shape = %buf.shape(), "grayscale");

    for px in buf.pixels_mut() {
        let y = pixel_luma(px);
        px[..3].fill(y);
    }
}
