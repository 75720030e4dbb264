//! Sources of selectable images.
//!
//! An [`ImageCatalog`] names the images a session can choose from and loads
//! one of them into a [`PixelBuffer`]. Identifiers are plain file names for
//! [`DirectoryCatalog`] and arbitrary keys for [`MemoryCatalog`].
//!
//! # Example
//!
//! ```rust
//! use retouch_core::{PixelBuffer, Shape};
//! use retouch_io::{ImageCatalog, MemoryCatalog};
//!
//! let catalog = MemoryCatalog::new()
//!     .with("b.png", PixelBuffer::new(Shape::new(2, 2, 3)))
//!     .with("a.png", PixelBuffer::new(Shape::new(4, 4, 3)));
//!
//! assert_eq!(catalog.list_available()?, ["a.png", "b.png"]);
//! assert_eq!(catalog.load("a.png")?.height(), 4);
//! assert!(catalog.load("c.png").is_err());
//! # Ok::<(), retouch_io::IoError>(())
//! ```

use crate::detect::{is_image_name, Format};
use crate::{decode, IoError, IoResult};
use retouch_core::PixelBuffer;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Lists images and loads them by identifier.
pub trait ImageCatalog {
    /// Identifiers of every selectable image, in a stable sorted order.
    fn list_available(&self) -> IoResult<Vec<String>>;

    /// Loads the image named `id` as an 8-bit RGB buffer.
    ///
    /// # Errors
    ///
    /// - [`IoError::NotFound`] if `id` names no image in the catalog
    /// - [`IoError::UnsupportedFormat`] if `id` is not an image name
    /// - [`IoError::Decode`] if the image cannot be decoded
    fn load(&self, id: &str) -> IoResult<PixelBuffer>;
}

/// Image files directly inside one directory.
///
/// Only regular files whose extension is one of the recognised image
/// extensions (compared case-insensitively) are listed. Subdirectories are
/// not scanned.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    /// Creates a catalog over `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scanned directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `id` to a path inside the catalog directory.
    ///
    /// Identifiers containing path separators or parent references never
    /// resolve.
    fn resolve(&self, id: &str) -> Option<PathBuf> {
        let plain = !id.is_empty()
            && id != "."
            && id != ".."
            && !id.contains(['/', '\\']);
        plain.then(|| self.root.join(id))
    }
}

impl ImageCatalog for DirectoryCatalog {
    fn list_available(&self) -> IoResult<Vec<String>> {
        trace!(root = %self.root.display(), "list_available");
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) if is_image_name(&name) => names.push(name),
                Ok(_) => {}
                Err(name) => debug!(?name, "skipping non-UTF-8 file name"),
            }
        }
        names.sort();
        debug!(count = names.len(), "catalog scanned");
        Ok(names)
    }

    fn load(&self, id: &str) -> IoResult<PixelBuffer> {
        let path = self
            .resolve(id)
            .filter(|p| p.is_file())
            .ok_or_else(|| IoError::NotFound(id.to_string()))?;
        if !Format::from_extension(&path).is_supported() {
            return Err(IoError::UnsupportedFormat(id.to_string()));
        }

        decode::read(&path).map_err(|e| {
            warn!(id, error = %e, "load failed");
            match e {
                IoError::Io(io) => IoError::Decode(format!("{id}: {io}")),
                other => other,
            }
        })
    }
}

/// Pre-decoded buffers keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    images: BTreeMap<String, PixelBuffer>,
}

impl MemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `buffer` under `id`, replacing any previous entry.
    pub fn insert(&mut self, id: impl Into<String>, buffer: PixelBuffer) {
        self.images.insert(id.into(), buffer);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, id: impl Into<String>, buffer: PixelBuffer) -> Self {
        self.insert(id, buffer);
        self
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the catalog holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageCatalog for MemoryCatalog {
    fn list_available(&self) -> IoResult<Vec<String>> {
        Ok(self.images.keys().cloned().collect())
    }

    fn load(&self, id: &str) -> IoResult<PixelBuffer> {
        self.images
            .get(id)
            .cloned()
            .ok_or_else(|| IoError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_rejects_paths() {
        let catalog = DirectoryCatalog::new("/tmp/pictures");
        assert!(catalog.resolve("cat.png").is_some());
        for id in ["", ".", "..", "../cat.png", "sub/cat.png", "sub\\cat.png"] {
            assert!(catalog.resolve(id).is_none(), "{id:?}");
        }
    }

    #[test]
    fn test_memory_catalog_sorted() {
        use retouch_core::Shape;
        let mut catalog = MemoryCatalog::new();
        for id in ["zebra", "apple", "mango"] {
            catalog.insert(id, PixelBuffer::new(Shape::new(1, 1, 3)));
        }
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.list_available().unwrap(), ["apple", "mango", "zebra"]);
        assert!(matches!(catalog.load("kiwi"), Err(IoError::NotFound(_))));
    }
}
