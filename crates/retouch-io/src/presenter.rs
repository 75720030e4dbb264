//! Showing the working image to the user.
//!
//! A [`Presenter`] is fire-and-forget: display failures are the presenter's
//! own business and never interrupt an editing session.

use crate::png;
use retouch_core::PixelBuffer;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Renders a buffer for the user.
pub trait Presenter {
    /// Shows `buffer`. Failures are logged, not returned.
    fn display(&mut self, buffer: &PixelBuffer);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn display(&mut self, buffer: &PixelBuffer) {
        (**self).display(buffer);
    }
}

/// Writes every displayed buffer to the same preview PNG, overwriting it.
#[derive(Debug, Clone)]
pub struct PngPresenter {
    path: PathBuf,
    written: usize,
}

impl PngPresenter {
    /// Creates a presenter writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            written: 0,
        }
    }

    /// Preview file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of previews successfully written.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl Presenter for PngPresenter {
    fn display(&mut self, buffer: &PixelBuffer) {
        match png::write(&self.path, buffer) {
            Ok(()) => {
                self.written += 1;
                info!(path = %self.path.display(), shape = %buffer.shape(), "preview updated");
            }
            Err(e) => warn!(path = %self.path.display(), error = %e, "preview not written"),
        }
    }
}
