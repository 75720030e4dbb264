//! 3×3 box blur.
//!
//! Each interior pixel becomes the mean of its 3×3 neighbourhood, centre
//! included, channel by channel. The one-pixel border is copied unchanged.
//!
//! All sums are taken from the pre-blur samples: the result is written to a
//! separate output buffer, so no neighbour read ever sees an already
//! blurred value.
//!
//! # Example
//!
//! ```rust
//! use retouch_core::{PixelBuffer, Shape};
//! use retouch_ops::filter::box_blur;
//!
//! let mut buf = PixelBuffer::new(Shape::new(3, 3, 1));
//! buf[(1, 1, 0)] = 90;
//! box_blur(&mut buf);
//! assert_eq!(buf[(1, 1, 0)], 10);
//! assert_eq!(buf[(0, 0, 0)], 0);
//! ```

use retouch_core::config::{BOX_BLUR_AREA, BOX_BLUR_BORDER, BOX_BLUR_OFFSETS};
use retouch_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Returns `true` if `buf` has at least one interior pixel to blur.
#[inline]
pub(crate) fn has_interior(buf: &PixelBuffer) -> bool {
    !buf.is_empty() && buf.height() > 2 * BOX_BLUR_BORDER && buf.width() > 2 * BOX_BLUR_BORDER
}

/// Mean of the 3×3 neighbourhood of interior pixel `(row, col)` on `channel`.
///
/// The caller guarantees `(row, col)` is at least one pixel away from
/// every edge.
#[inline]
pub(crate) fn neighbourhood_mean(src: &PixelBuffer, row: usize, col: usize, channel: usize) -> u8 {
    let sum: u32 = BOX_BLUR_OFFSETS
        .iter()
        .map(|&(dr, dc)| {
            let r = row.wrapping_add_signed(dr);
            let c = col.wrapping_add_signed(dc);
            src.as_slice()[src.index_of(r, c, channel)] as u32
        })
        .sum();
    // Integer division truncates; the mean of valid samples stays in range.
    (sum / BOX_BLUR_AREA) as u8
}

/// Blurs the interior of `buf` with a 3×3 box filter.
///
/// Buffers smaller than 3×3 have no interior and are left unchanged.
pub fn box_blur(buf: &mut PixelBuffer) {
    trace!(shape = %buf.shape(), "box_blur");
    if !has_interior(buf) {
        debug!(shape = %buf.shape(), "box_blur: no interior pixels");
        return;
    }

    let (height, width) = (buf.height(), buf.width());
    let mut dst = buf.clone();

    for row in BOX_BLUR_BORDER..height - BOX_BLUR_BORDER {
        for col in BOX_BLUR_BORDER..width - BOX_BLUR_BORDER {
            let out = dst.pixel_mut(row, col);
            for (ch, v) in out.iter_mut().enumerate() {
                *v = neighbourhood_mean(buf, row, col, ch);
            }
        }
    }

    *buf = dst;
}
