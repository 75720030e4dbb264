//! Mutable image state: the origin snapshot and the working target.
//!
//! [`TransformEngine`] owns two independent buffers:
//!
//! - `origin` - captured when an image is loaded, read-only afterwards
//! - `target` - the working copy every operation mutates in place
//!
//! [`reset`](TransformEngine::reset) copies `origin` back over `target`,
//! discarding every edit. Only [`set_target`](TransformEngine::set_target)
//! (and [`load_with`](TransformEngine::load_with), which calls it) and
//! `reset` ever touch `origin`.
//!
//! # Example
//!
//! ```rust
//! use retouch_core::{PixelBuffer, Shape};
//! use retouch_ops::TransformEngine;
//!
//! let mut engine = TransformEngine::new(PixelBuffer::filled(Shape::new(3, 3, 3), 100));
//! engine.contrast(2.0);
//! engine.brightness(50);
//! assert_eq!(engine.target()[(1, 1, 0)], 122);
//!
//! engine.reset();
//! assert_eq!(engine.target(), engine.origin());
//! ```

use crate::adjust::{self, contrast_factor};
use crate::transform::{self, FlipAxis};
use crate::{composite, filter, grayscale, OpsResult};
use retouch_core::PixelBuffer;
use tracing::{debug, info};

/// Execution options for a [`TransformEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Run blur, grayscale and brightness/contrast on the rayon thread pool.
    ///
    /// Ignored when the crate is built without the `parallel` feature.
    pub parallel: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
        }
    }
}

impl EngineOptions {
    /// Sequential execution.
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    #[inline]
    fn use_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }
}

/// Holds the origin snapshot and the working target of one image.
#[derive(Debug, Clone)]
pub struct TransformEngine {
    origin: PixelBuffer,
    target: PixelBuffer,
    options: EngineOptions,
}

impl TransformEngine {
    /// Creates an engine for `buffer` with default options.
    pub fn new(buffer: PixelBuffer) -> Self {
        Self::with_options(buffer, EngineOptions::default())
    }

    /// Creates an engine for `buffer` with explicit options.
    pub fn with_options(buffer: PixelBuffer, options: EngineOptions) -> Self {
        let target = buffer.clone();
        Self {
            origin: buffer,
            target,
            options,
        }
    }

    /// Returns the execution options.
    #[inline]
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Replaces the execution options.
    pub fn set_options(&mut self, options: EngineOptions) {
        self.options = options;
    }

    /// Snapshot captured at load time.
    #[inline]
    pub fn origin(&self) -> &PixelBuffer {
        &self.origin
    }

    /// Working buffer with all edits applied.
    #[inline]
    pub fn target(&self) -> &PixelBuffer {
        &self.target
    }

    /// Replaces both buffers with `buffer`.
    ///
    /// `origin` takes ownership of `buffer`; `target` gets an independent
    /// deep copy.
    pub fn set_target(&mut self, buffer: PixelBuffer) {
        info!(shape = %buffer.shape(), "loading new image");
        self.target = buffer.clone();
        self.origin = buffer;
    }

    /// Loads a new image produced by `load`.
    ///
    /// The loader runs to completion before any state changes. On error
    /// both buffers are kept exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns whatever error `load` returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retouch_core::{PixelBuffer, Shape};
    /// use retouch_ops::TransformEngine;
    ///
    /// let mut engine = TransformEngine::new(PixelBuffer::new(Shape::new(2, 2, 3)));
    /// let failed: Result<(), &str> = engine.load_with(|| Err("unreadable"));
    /// assert!(failed.is_err());
    /// assert_eq!(engine.target().shape(), Shape::new(2, 2, 3));
    /// ```
    pub fn load_with<E, F>(&mut self, load: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<PixelBuffer, E>,
    {
        let buffer = load()?;
        self.set_target(buffer);
        Ok(())
    }

    /// Discards every edit by copying `origin` over `target`.
    pub fn reset(&mut self) {
        debug!("reset target to origin");
        self.target = self.origin.clone();
    }

    /// Applies brightness and contrast in one pass.
    pub fn brightness_contrast(&mut self, brightness: i32, contrast: f64) {
        #[cfg(feature = "parallel")]
        if self.options.use_parallel() {
            crate::parallel::brightness_contrast(&mut self.target, brightness, contrast);
            return;
        }
        adjust::brightness_contrast(&mut self.target, brightness, contrast);
    }

    /// Shifts every sample by `delta`.
    pub fn brightness(&mut self, delta: i32) {
        self.brightness_contrast(delta, 1.0);
    }

    /// Scales every sample around mid-gray by `factor`.
    pub fn contrast(&mut self, factor: f64) {
        self.brightness_contrast(0, factor);
    }

    /// Applies contrast given as a user-facing level.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidContrastLevel`](crate::OpsError::InvalidContrastLevel)
    /// for levels the factor derivation cannot handle; `target` is unchanged.
    pub fn contrast_level(&mut self, level: f64) -> OpsResult<()> {
        let factor = contrast_factor(level)?;
        debug!(level, factor, "contrast level");
        self.contrast(factor);
        Ok(())
    }

    /// Collapses every pixel to its luma.
    pub fn grayscale(&mut self) {
        #[cfg(feature = "parallel")]
        if self.options.use_parallel() {
            crate::parallel::grayscale(&mut self.target);
            return;
        }
        grayscale::grayscale(&mut self.target);
    }

    /// Mirrors the target; `true` flips left-right, `false` up-down.
    pub fn flip(&mut self, left_right: bool) {
        self.flip_axis(FlipAxis::from_left_right(left_right));
    }

    /// Mirrors the target along `axis`.
    pub fn flip_axis(&mut self, axis: FlipAxis) {
        transform::flip(&mut self.target, axis);
    }

    /// Averages `other` into the grayscaled target.
    ///
    /// `other` is used as supplied; see [`composite::stack`].
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::ShapeMismatch`](crate::OpsError::ShapeMismatch) if
    /// the shapes differ; `target` is unchanged.
    pub fn stack(&mut self, other: &PixelBuffer) -> OpsResult<()> {
        composite::stack(&mut self.target, other)
    }

    /// Blurs the interior of the target with a 3×3 box filter.
    pub fn blur(&mut self) {
        #[cfg(feature = "parallel")]
        if self.options.use_parallel() {
            crate::parallel::box_blur(&mut self.target);
            return;
        }
        filter::box_blur(&mut self.target);
    }
}
