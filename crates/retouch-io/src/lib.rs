//! # retouch-io
//!
//! Image sources and preview output for retouch sessions.
//!
//! - [`ImageCatalog`] - lists selectable images and loads one as a
//!   [`PixelBuffer`](retouch_core::PixelBuffer); [`DirectoryCatalog`] scans a
//!   folder, [`MemoryCatalog`] holds pre-decoded buffers
//! - [`Presenter`] - shows the working buffer; [`PngPresenter`] writes a
//!   preview file
//! - [`decode`] - decoding through the `image` crate, always to 8-bit RGB
//! - [`png`] - PNG encoding through the `png` crate
//!
//! Recognised catalog extensions: png, jpg, jpeg, tiff, bmp, gif
//! (case-insensitive).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use retouch_io::{DirectoryCatalog, ImageCatalog, PngPresenter, Presenter};
//!
//! let catalog = DirectoryCatalog::new("pictures");
//! let names = catalog.list_available()?;
//! let buffer = catalog.load(&names[0])?;
//!
//! let mut presenter = PngPresenter::new("preview.png");
//! presenter.display(&buffer);
//! # Ok::<(), retouch_io::IoError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod detect;
pub mod catalog;
pub mod decode;
pub mod png;
pub mod presenter;

pub use catalog::{DirectoryCatalog, ImageCatalog, MemoryCatalog};
pub use detect::{is_image_name, Format};
pub use error::{IoError, IoResult};
pub use presenter::{PngPresenter, Presenter};
