//! Runtime settings.
//!
//! Values come from three layers, later ones winning:
//!
//! 1. [`Settings::default`]
//! 2. an optional YAML file (`--config`); missing keys keep their defaults
//! 3. command-line flags
//!
//! ```yaml
//! directory: /home/me/pictures
//! preview: /tmp/retouch.png
//! parallel: false
//! threads: 4
//! ```

use anyhow::{Context, Result};
use retouch_ops::EngineOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default preview file name.
pub const DEFAULT_PREVIEW: &str = "retouch-preview.png";

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory scanned for images.
    pub directory: PathBuf,
    /// Preview PNG rewritten after every change.
    pub preview: PathBuf,
    /// Use the parallel pixel paths.
    pub parallel: bool,
    /// Worker threads for the parallel paths (0 = one per core).
    pub threads: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            preview: PathBuf::from(DEFAULT_PREVIEW),
            parallel: true,
            threads: 0,
        }
    }
}

impl Settings {
    /// Parses settings from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("invalid settings")
    }

    /// Reads settings from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    /// Defaults, or the contents of `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Engine options derived from these settings.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            parallel: self.parallel,
        }
    }
}
