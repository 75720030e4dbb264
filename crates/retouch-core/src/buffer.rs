//! Pixel buffer types.
//!
//! This module provides the image container every operation works on:
//! - [`Shape`] - `(height, width, channels)` dimensions
//! - [`PixelBuffer`] - Owned, settled 8-bit samples
//!
//! # Memory Layout
//!
//! Samples are stored in **row-major** order, top-to-bottom, with channels
//! interleaved:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! Sample `(row, col, channel)` lives at `(row * width + col) * channels + channel`.
//!
//! # Ownership
//!
//! A `PixelBuffer` owns its storage outright (a plain `Vec<u8>`), so
//! `clone()` is always a deep copy. Two buffers never alias.
//!
//! # Usage
//!
//! ```rust
//! use retouch_core::{PixelBuffer, Shape};
//!
//! let mut buf = PixelBuffer::new(Shape::new(4, 6, 3));
//! buf.set(1, 2, 0, 200).unwrap();
//! assert_eq!(buf[(1, 2, 0)], 200);
//! assert_eq!(buf.pixel(1, 2), &[200, 0, 0]);
//! ```

use crate::clamp::clamp_truncate;
use crate::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dimensions of a pixel buffer.
///
/// Two buffers can only be combined element by element when their shapes
/// are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    /// Number of rows
    pub height: usize,
    /// Number of columns
    pub width: usize,
    /// Samples per pixel
    pub channels: usize,
}

impl Shape {
    /// Creates a shape from `(height, width, channels)`.
    #[inline]
    pub const fn new(height: usize, width: usize, channels: usize) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }

    /// Total sample count, or `None` on overflow.
    #[inline]
    pub fn checked_len(&self) -> Option<usize> {
        self.height
            .checked_mul(self.width)
            .and_then(|v| v.checked_mul(self.channels))
    }

    /// Total sample count.
    ///
    /// # Panics
    ///
    /// Panics if `height * width * channels` overflows `usize`.
    #[inline]
    pub fn len(&self) -> usize {
        self.checked_len().expect("buffer shape overflows usize")
    }

    /// Returns `true` if the shape holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0 || self.channels == 0
    }

    /// Samples per row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width * self.channels
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.channels)
    }
}

impl From<(usize, usize, usize)> for Shape {
    fn from((height, width, channels): (usize, usize, usize)) -> Self {
        Self::new(height, width, channels)
    }
}

/// Owned height × width × channels grid of settled samples.
///
/// Every element lies in `[0, 255]` by construction. Real-valued results
/// enter the buffer only through [`from_values`](Self::from_values) or
/// [`map_values`](Self::map_values), which settle them with
/// [`clamp_truncate`].
///
/// # Example
///
/// ```rust
/// use retouch_core::{PixelBuffer, Shape};
///
/// let buf = PixelBuffer::from_values(Shape::new(1, 2, 1), [-4.0, 300.7]).unwrap();
/// assert_eq!(buf.as_slice(), &[0, 255]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    shape: Shape,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a buffer filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if the sample count overflows `usize`.
    pub fn new(shape: Shape) -> Self {
        Self::filled(shape, 0)
    }

    /// Creates a buffer with every sample set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if the sample count overflows `usize`.
    pub fn filled(shape: Shape, value: u8) -> Self {
        Self {
            shape,
            data: vec![value; shape.len()],
        }
    }

    /// Creates a buffer from existing samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` does not match
    /// the shape.
    pub fn from_vec(shape: Shape, data: Vec<u8>) -> Result<Self> {
        let expected = shape
            .checked_len()
            .ok_or_else(|| Error::invalid_dimensions(shape, "sample count overflows usize"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                shape,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self { shape, data })
    }

    /// Creates a buffer from real-valued samples, settling each one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the number of values does
    /// not match the shape.
    pub fn from_values<I>(shape: Shape, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let data: Vec<u8> = values.into_iter().map(clamp_truncate).collect();
        Self::from_vec(shape, data)
    }

    /// Returns the buffer shape.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.shape.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.shape.width
    }

    /// Samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.shape.channels
    }

    /// Total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if `other` has the same shape.
    #[inline]
    pub fn same_shape(&self, other: &PixelBuffer) -> bool {
        self.shape == other.shape
    }

    /// Raw samples in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw samples in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns its samples.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Linear index of sample `(row, col, channel)`.
    ///
    /// No bounds check; use [`get`](Self::get) for checked access.
    #[inline]
    pub fn index_of(&self, row: usize, col: usize, channel: usize) -> usize {
        (row * self.shape.width + col) * self.shape.channels + channel
    }

    #[inline]
    fn in_bounds(&self, row: usize, col: usize, channel: usize) -> bool {
        row < self.shape.height && col < self.shape.width && channel < self.shape.channels
    }

    /// Returns sample `(row, col, channel)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        if self.in_bounds(row, col, channel) {
            Some(self.data[self.index_of(row, col, channel)])
        } else {
            None
        }
    }

    /// Sets sample `(row, col, channel)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the buffer.
    pub fn set(&mut self, row: usize, col: usize, channel: usize, value: u8) -> Result<()> {
        if !self.in_bounds(row, col, channel) {
            return Err(Error::out_of_bounds(row, col, channel, self.shape));
        }
        let idx = self.index_of(row, col, channel);
        self.data[idx] = value;
        Ok(())
    }

    /// All channels of pixel `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the pixel is out of bounds.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &[u8] {
        let start = self.index_of(row, col, 0);
        &self.data[start..start + self.shape.channels]
    }

    /// Mutable channels of pixel `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the pixel is out of bounds.
    #[inline]
    pub fn pixel_mut(&mut self, row: usize, col: usize) -> &mut [u8] {
        let start = self.index_of(row, col, 0);
        let end = start + self.shape.channels;
        &mut self.data[start..end]
    }

    /// Iterates over rows as slices of `width * channels` samples.
    ///
    /// Yields nothing for an empty buffer.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact(0) panics; an empty row length means no rows anyway.
        let row_len = self.shape.row_len().max(1);
        self.data.chunks_exact(row_len)
    }

    /// Iterates over pixels as slices of `channels` samples.
    ///
    /// Yields nothing for an empty buffer.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.shape.channels.max(1))
    }

    /// Mutable iteration over pixels.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let channels = self.shape.channels.max(1);
        self.data.chunks_exact_mut(channels)
    }

    /// Applies real arithmetic to every sample and settles the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retouch_core::{PixelBuffer, Shape};
    ///
    /// let mut buf = PixelBuffer::filled(Shape::new(1, 1, 3), 10);
    /// buf.map_values(|v| v - 20.0);
    /// assert_eq!(buf.as_slice(), &[0, 0, 0]);
    /// ```
    pub fn map_values<F>(&mut self, mut f: F)
    where
        F: FnMut(f64) -> f64,
    {
        for v in self.data.iter_mut() {
            *v = clamp_truncate(f(*v as f64));
        }
    }

    /// Sets every sample to `value`.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("shape", &self.shape)
            .field("samples", &self.data.len())
            .finish()
    }
}

impl Index<(usize, usize, usize)> for PixelBuffer {
    type Output = u8;

    #[inline]
    fn index(&self, (row, col, channel): (usize, usize, usize)) -> &u8 {
        assert!(
            self.in_bounds(row, col, channel),
            "sample ({row}, {col}, {channel}) out of bounds for buffer {}",
            self.shape
        );
        &self.data[self.index_of(row, col, channel)]
    }
}

impl IndexMut<(usize, usize, usize)> for PixelBuffer {
    #[inline]
    fn index_mut(&mut self, (row, col, channel): (usize, usize, usize)) -> &mut u8 {
        assert!(
            self.in_bounds(row, col, channel),
            "sample ({row}, {col}, {channel}) out of bounds for buffer {}",
            self.shape
        );
        let idx = self.index_of(row, col, channel);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(shape: Shape) -> PixelBuffer {
        let data = (0..shape.len()).map(|i| (i % 256) as u8).collect();
        PixelBuffer::from_vec(shape, data).unwrap()
    }

    #[test]
    fn test_new_is_zeroed() {
        let buf = PixelBuffer::new(Shape::new(3, 4, 3));
        assert_eq!(buf.len(), 36);
        assert!(buf.as_slice().iter().all(|&v| v == 0));
        assert_eq!(buf.shape().to_string(), "3x4x3");
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = PixelBuffer::from_vec(Shape::new(2, 2, 3), vec![0; 11]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_from_vec_overflow() {
        let shape = Shape::new(usize::MAX, 2, 3);
        assert!(shape.checked_len().is_none());
        assert!(PixelBuffer::from_vec(shape, Vec::new()).is_err());
    }

    #[test]
    fn test_from_values_settles() {
        let buf = PixelBuffer::from_values(Shape::new(1, 1, 3), [-1.0, 127.9, 999.0]).unwrap();
        assert_eq!(buf.as_slice(), &[0, 127, 255]);
    }

    #[test]
    fn test_layout_row_major() {
        let buf = ramp(Shape::new(2, 3, 3));
        // (row 1, col 2) starts at (1 * 3 + 2) * 3 = 15
        assert_eq!(buf.pixel(1, 2), &[15, 16, 17]);
        assert_eq!(buf[(1, 0, 1)], 10);
        assert_eq!(buf.rows().count(), 2);
        assert_eq!(buf.pixels().count(), 6);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut buf = PixelBuffer::new(Shape::new(2, 2, 3));
        assert!(buf.set(1, 1, 2, 9).is_ok());
        assert_eq!(buf.get(1, 1, 2), Some(9));
        assert_eq!(buf.get(2, 0, 0), None);
        assert_eq!(buf.get(0, 0, 3), None);
        let err = buf.set(0, 2, 0, 1).unwrap_err();
        assert!(err.is_bounds_error());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let buf = PixelBuffer::new(Shape::new(2, 2, 3));
        let _ = buf[(0, 0, 3)];
    }

    #[test]
    fn test_clone_is_deep() {
        let original = ramp(Shape::new(2, 2, 3));
        let mut copy = original.clone();
        copy.fill(7);
        assert_ne!(original, copy);
        assert_eq!(original[(0, 0, 1)], 1);
    }

    #[test]
    fn test_map_values_clamps() {
        let mut buf = PixelBuffer::filled(Shape::new(2, 2, 1), 100);
        buf.map_values(|v| v * 3.0);
        assert!(buf.as_slice().iter().all(|&v| v == 255));
        buf.map_values(|v| v - 1000.0);
        assert!(buf.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_empty_buffer_iterators() {
        let buf = PixelBuffer::new(Shape::new(0, 5, 3));
        assert!(buf.is_empty());
        assert!(buf.shape().is_empty());
        assert_eq!(buf.rows().count(), 0);
        assert_eq!(buf.pixels().count(), 0);
    }
}
