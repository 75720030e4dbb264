//! # retouch-ops
//!
//! Pixel operations and the mutable image state of an interactive editor.
//!
//! # Modules
//!
//! - [`adjust`] - Brightness/contrast remapping and the contrast-level factor
//! - [`grayscale`] - Approximate luma conversion
//! - [`transform`] - Left-right and up-down flips
//! - [`composite`] - Two-image stacking
//! - [`filter`] - 3×3 box blur
//! - [`engine`] - [`TransformEngine`], the origin/target pair
//! - [`request`] - [`Operation`] requests and [`dispatch`]
//! - `parallel` - Rayon-backed variants (feature `parallel`, on by default)
//!
//! Every operation works in place on a [`PixelBuffer`](retouch_core::PixelBuffer)
//! and settles its results into `[0, 255]`.
//!
//! # Example
//!
//! ```rust
//! use retouch_core::{PixelBuffer, Shape};
//! use retouch_ops::TransformEngine;
//!
//! let mut engine = TransformEngine::new(PixelBuffer::filled(Shape::new(8, 8, 3), 60));
//! engine.grayscale();
//! engine.blur();
//! engine.flip(true);
//! engine.contrast_level(40.0)?;
//!
//! engine.reset();
//! assert_eq!(engine.target(), engine.origin());
//! # Ok::<(), retouch_ops::OpsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod adjust;
pub mod composite;
pub mod engine;
pub mod filter;
pub mod grayscale;
pub mod request;
pub mod transform;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use adjust::{contrast_factor, BrightnessContrast};
pub use engine::{EngineOptions, TransformEngine};
pub use error::{OpsError, OpsResult};
pub use request::{dispatch, Operation};
pub use transform::FlipAxis;
