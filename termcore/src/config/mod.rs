//! Configuration structures and loading logic.
//!
//! Every section and field has a default, so a partial (or empty) TOML file
//! yields a usable configuration.

use std::io;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::buffer::DEFAULT_SCROLLBACK;
use crate::error::{Error, Result};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub terminal: TerminalConfig,
    pub atlas: AtlasConfig,
}

/// Screen geometry and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub columns: usize,
    pub rows: usize,
    /// Maximum scrollback lines. Must be non-zero.
    pub scrollback: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            columns: 80,
            rows: 24,
            scrollback: DEFAULT_SCROLLBACK.get(),
        }
    }
}

/// Glyph atlas surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse the configuration file at `path`.
    ///
    /// Unlike [`Config::load_or_default`] this keeps "file missing" and
    /// "parse error" apart so callers can keep a previous config on error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&data)?;
        debug!("config: loaded from {}", path.display());
        Ok(config)
    }

    /// Load `path`, falling back to defaults if it is missing or invalid.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!("config: {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }
}
