//! Error type shared by the whole crate.
//!
//! Only construction-time misuse and configuration loading can fail. Parsing
//! and grid addressing never return errors: malformed input resynchronizes and
//! out-of-range writes are dropped.

use std::io;

use thiserror::Error;

/// Errors produced by `termcore`.
#[derive(Debug, Error)]
pub enum Error {
    /// A ring buffer (or scrollback) was requested with zero capacity.
    #[error("ring buffer capacity must be greater than zero")]
    InvalidCapacity,
    /// The atlas surface cannot hold even a single cell-sized glyph.
    #[error("atlas {width}x{height} cannot fit a {cell_width}x{cell_height} cell")]
    AtlasTooSmall {
        width: u32,
        height: u32,
        cell_width: u32,
        cell_height: u32,
    },
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    /// The configuration file is not valid TOML for [`crate::Config`].
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
