//! Parallel pixel operations using Rayon.
//!
//! Drop-in replacements for the sequential operations, producing identical
//! results. Workers only read from a snapshot taken before the parallel
//! region starts and only write disjoint output rows or pixels.
//!
//! # Example
//!
//! ```rust
//! use retouch_core::{PixelBuffer, Shape};
//! use retouch_ops::parallel;
//!
//! let mut buf = PixelBuffer::filled(Shape::new(256, 256, 3), 40);
//! parallel::box_blur(&mut buf);
//! parallel::brightness_contrast(&mut buf, 10, 1.0);
//! assert!(buf.as_slice().iter().all(|&v| v == 50));
//! ```

use crate::adjust::BrightnessContrast;
use crate::filter::{has_interior, neighbourhood_mean};
use crate::grayscale::pixel_luma;
use rayon::prelude::*;
use retouch_core::config::BOX_BLUR_BORDER;
use retouch_core::PixelBuffer;
use tracing::trace;

/// Parallel 3×3 box blur.
///
/// Rows are blurred concurrently from a snapshot of the input; the border
/// is left unchanged exactly as in [`crate::filter::box_blur`].
pub fn box_blur(buf: &mut PixelBuffer) {
    trace!(shape = %buf.shape(), "parallel::box_blur");
    if !has_interior(buf) {
        return;
    }

    let snapshot = buf.clone();
    let (height, width, channels) = (buf.height(), buf.width(), buf.channels());
    let row_len = buf.shape().row_len();

    buf.as_mut_slice()
        .par_chunks_mut(row_len)
        .enumerate()
        .filter(|(row, _)| *row >= BOX_BLUR_BORDER && *row < height - BOX_BLUR_BORDER)
        .for_each(|(row, out)| {
            for col in BOX_BLUR_BORDER..width - BOX_BLUR_BORDER {
                for ch in 0..channels {
                    out[col * channels + ch] = neighbourhood_mean(&snapshot, row, col, ch);
                }
            }
        });
}

/// Parallel brightness/contrast remap.
pub fn brightness_contrast(buf: &mut PixelBuffer, brightness: i32, contrast: f64) {
    let params = BrightnessContrast {
        brightness,
        contrast,
    };
    if params.is_identity() {
        return;
    }
    trace!(shape = %buf.shape(), brightness, contrast, "parallel::brightness_contrast");

    buf.as_mut_slice()
        .par_iter_mut()
        .for_each(|v| *v = params.apply_value(*v));
}

/// Parallel grayscale conversion.
pub fn grayscale(buf: &mut PixelBuffer) {
    let channels = buf.channels();
    if channels < 3 {
        return;
    }
    trace!(shape = %buf.shape(), "parallel::grayscale");

    buf.as_mut_slice()
        .par_chunks_mut(channels)
        .for_each(|px| {
            let y = pixel_luma(px);
            px[..3].fill(y);
        });
}
