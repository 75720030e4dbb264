//! # retouch-core
//!
//! Core types for interactive raster image adjustment.
//!
//! This crate provides the foundational types used throughout the retouch
//! workspace:
//!
//! - [`PixelBuffer`] - Owned height × width × channels grid of settled 8-bit samples
//! - [`Shape`] - Buffer dimensions, compared when two buffers are combined
//! - [`clamp_truncate`] - The single rule that settles arithmetic results into `[0, 255]`
//! - [`config`] - Shared numeric constants (channel range, luma weights, blur offsets)
//!
//! ## Settled buffers
//!
//! A [`PixelBuffer`] only ever holds values in `[0, 255]`. Operations do their
//! arithmetic in `f64` and pass every result through [`clamp_truncate`] before
//! writing it back:
//!
//! ```
//! use retouch_core::{PixelBuffer, Shape};
//!
//! let mut buf = PixelBuffer::filled(Shape::new(2, 2, 3), 200);
//! buf.map_values(|v| v * 2.0);
//! assert!(buf.as_slice().iter().all(|&v| v == 255));
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! retouch-core (this crate)
//!    ^
//!    |
//!    +-- retouch-ops (pixel operations, TransformEngine)
//!    +-- retouch-io (catalog, decoding, preview presenter)
//!    +-- retouch-cli (menu driven session)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod clamp;
pub mod config;
pub mod error;

pub use buffer::{PixelBuffer, Shape};
pub use clamp::{clamp_truncate, settle};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use retouch_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{PixelBuffer, Shape};
    pub use crate::clamp::{clamp_truncate, settle};
    pub use crate::config::{MAX_CHANNEL_VALUE, MIN_CHANNEL_VALUE, NUM_CHANNELS};
    pub use crate::error::{Error, Result};
}
