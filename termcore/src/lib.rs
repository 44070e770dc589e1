//! Terminal emulation core.
//!
//! Turns a raw pty byte stream into a structured screen model and provides
//! the data a renderer paints from: per-cell character/attribute storage, a
//! scrollback ring buffer, the screen grid with cursor and alternate screen,
//! an explicit VT state-machine parser, and a shelf-packed glyph atlas. It
//! contains no GUI, pty, or platform code.

#![deny(unsafe_code)]

pub mod atlas;
pub mod buffer;
pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod parser;
pub mod ring;
pub mod term;

pub use atlas::Surface;
pub use atlas::{BuiltinRasterizer, FontMetrics, GlyphAtlas, GlyphKey, GlyphUv, Rasterizer};
pub use buffer::{Cursor, DirtyRegion, Row, TerminalBuffer};
pub use cell::{Cell, CellFlags, DEFAULT_BG, DEFAULT_FG};
pub use config::{AtlasConfig, Config, TerminalConfig};
pub use error::{Error, Result};
pub use event::{Event, EventListener, VoidListener};
pub use parser::{Parser, State, TermMode};
pub use ring::CircularBuffer;
pub use term::Terminal;
