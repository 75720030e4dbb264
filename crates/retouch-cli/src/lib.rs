//! # retouch-cli
//!
//! Building blocks of the `retouch` binary: the numbered [`menu`], the
//! validated integer [`prompt`], runtime [`settings`] and the interactive
//! [`session`] loop tying catalog, engine and presenter together.
//!
//! # Example
//!
//! ```rust
//! use retouch_cli::{Prompter, Session};
//! use retouch_core::{PixelBuffer, Shape};
//! use retouch_io::{MemoryCatalog, Presenter};
//! use retouch_ops::EngineOptions;
//! use std::io::Cursor;
//!
//! struct Discard;
//! impl Presenter for Discard {
//!     fn display(&mut self, _: &PixelBuffer) {}
//! }
//!
//! let catalog = MemoryCatalog::new().with("one.png", PixelBuffer::filled(Shape::new(4, 4, 3), 30));
//! let mut session = Session::new(catalog, Discard, EngineOptions::default());
//!
//! // select image 0, brightness +10, exit
//! let mut prompt = Prompter::new(Cursor::new(b"0\n0\n10\n8\n".to_vec()), Vec::new());
//! session.run(&mut prompt)?;
//! assert_eq!(session.engine().unwrap().target()[(0, 0, 0)], 40);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod menu;
pub mod prompt;
pub mod session;
pub mod settings;

pub use menu::MenuChoice;
pub use prompt::Prompter;
pub use session::Session;
pub use settings::Settings;
