//! Geometric transforms.
//!
//! Mirrors a buffer in place, either left-right (columns reversed) or
//! up-down (rows reversed). Samples are only permuted, never changed, so
//! flipping twice along the same axis restores the buffer.
//!
//! # Example
//!
//! ```rust
//! use retouch_core::{PixelBuffer, Shape};
//! use retouch_ops::transform::{flip, FlipAxis};
//!
//! let mut buf = PixelBuffer::from_vec(Shape::new(1, 2, 3), vec![
//!     1, 0, 0, // Left pixel (red)
//!     0, 1, 0, // Right pixel (green)
//! ]).unwrap();
//! flip(&mut buf, FlipAxis::LeftRight);
//! assert_eq!(buf.as_slice(), &[0, 1, 0, 1, 0, 0]);
//! ```

use retouch_core::PixelBuffer;
use tracing::trace;

/// Mirror axis for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipAxis {
    /// Reverse the order of columns (horizontal mirror).
    LeftRight,
    /// Reverse the order of rows (vertical mirror).
    UpDown,
}

impl FlipAxis {
    /// `true` selects [`FlipAxis::LeftRight`], `false` [`FlipAxis::UpDown`].
    #[inline]
    pub fn from_left_right(left_right: bool) -> Self {
        if left_right { Self::LeftRight } else { Self::UpDown }
    }
}

/// Mirrors `buf` in place along `axis`.
pub fn flip(buf: &mut PixelBuffer, axis: FlipAxis) {
    trace!(shape = %buf.shape(), ?axis, "flip");
    if buf.is_empty() {
        return;
    }
    match axis {
        FlipAxis::LeftRight => flip_columns(buf),
        FlipAxis::UpDown => flip_rows(buf),
    }
}

fn flip_columns(buf: &mut PixelBuffer) {
    let shape = buf.shape();
    let channels = shape.channels;
    let width = shape.width;

    for row in buf.as_mut_slice().chunks_exact_mut(shape.row_len()) {
        for x in 0..width / 2 {
            let mirror = width - 1 - x;
            let (left, right) = row.split_at_mut(mirror * channels);
            left[x * channels..(x + 1) * channels].swap_with_slice(&mut right[..channels]);
        }
    }
}

fn flip_rows(buf: &mut PixelBuffer) {
    let shape = buf.shape();
    let row_len = shape.row_len();
    let height = shape.height;
    let data = buf.as_mut_slice();

    for y in 0..height / 2 {
        let mirror = height - 1 - y;
        let (top, bottom) = data.split_at_mut(mirror * row_len);
        top[y * row_len..(y + 1) * row_len].swap_with_slice(&mut bottom[..row_len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::Shape;

    fn ramp(shape: Shape) -> PixelBuffer {
        let data = (0..shape.len()).map(|i| (i % 251) as u8).collect();
        PixelBuffer::from_vec(shape, data).unwrap()
    }

    #[test]
    fn test_flip_left_right() {
        let mut buf = ramp(Shape::new(2, 3, 3));
        let src = buf.clone();
        flip(&mut buf, FlipAxis::LeftRight);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(buf.pixel(row, col), src.pixel(row, 2 - col));
            }
        }
    }

    #[test]
    fn test_flip_up_down() {
        let mut buf = ramp(Shape::new(3, 2, 3));
        let src = buf.clone();
        flip(&mut buf, FlipAxis::UpDown);
        for row in 0..3 {
            for col in 0..2 {
                assert_eq!(buf.pixel(row, col), src.pixel(2 - row, col));
            }
        }
    }

    #[test]
    fn test_flip_involution() {
        for shape in [
            Shape::new(1, 1, 3),
            Shape::new(1, 6, 3),
            Shape::new(7, 1, 3),
            Shape::new(4, 5, 3),
            Shape::new(5, 4, 4),
            Shape::new(3, 3, 1),
        ] {
            for axis in [FlipAxis::LeftRight, FlipAxis::UpDown] {
                let src = ramp(shape);
                let mut buf = src.clone();
                flip(&mut buf, axis);
                flip(&mut buf, axis);
                assert_eq!(buf, src, "{shape} {axis:?}");
            }
        }
    }

    #[test]
    fn test_flip_empty() {
        let mut buf = PixelBuffer::new(Shape::new(0, 4, 3));
        flip(&mut buf, FlipAxis::LeftRight);
        flip(&mut buf, FlipAxis::UpDown);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_from_left_right() {
        assert_eq!(FlipAxis::from_left_right(true), FlipAxis::LeftRight);
        assert_eq!(FlipAxis::from_left_right(false), FlipAxis::UpDown);
    }
}
