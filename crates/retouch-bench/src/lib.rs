//! Benchmark fixtures for retouch.
//!
//! Run with: `cargo bench -p retouch-bench`

#![warn(missing_docs)]

use retouch_core::{PixelBuffer, Shape};

/// Square RGB test sizes, in pixels per side.
pub const SIZES: [usize; 3] = [256, 1024, 2048];

/// Deterministic noisy RGB buffer of `side`×`side` pixels.
pub fn noise(side: usize) -> PixelBuffer {
    let shape = Shape::new(side, side, 3);
    let mut state = 0x2545_f491_u32;
    let data = (0..shape.len())
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    PixelBuffer::from_vec(shape, data).unwrap_or_else(|_| PixelBuffer::new(shape))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_is_deterministic() {
        let a = noise(16);
        assert_eq!(a, noise(16));
        assert_eq!(a.shape(), Shape::new(16, 16, 3));
        assert!(a.as_slice().iter().any(|&v| v != a.as_slice()[0]));
    }
}
