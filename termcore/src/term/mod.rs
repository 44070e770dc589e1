//! Terminal session.
//!
//! `Terminal<T: EventListener>` pairs a [`TerminalBuffer`] with the
//! [`Parser`] that drives it, so a host feeds pty output in one place and
//! reads the screen from another. Generic over `EventListener` so tests can
//! use `VoidListener` while a real host routes bells, titles, and replies to
//! its own event loop.

use log::debug;

use crate::buffer::TerminalBuffer;
use crate::config::Config;
use crate::error::Result;
use crate::event::{EventListener, VoidListener};
use crate::parser::{Parser, TermMode};

/// A screen plus the parser feeding it.
#[derive(Debug)]
pub struct Terminal<T: EventListener = VoidListener> {
    buffer: TerminalBuffer,
    parser: Parser<T>,
}

impl<T: EventListener> Terminal<T> {
    /// Create a `cols` x `rows` terminal with the default scrollback.
    pub fn new(cols: usize, rows: usize, listener: T) -> Self {
        Self {
            buffer: TerminalBuffer::new(cols, rows),
            parser: Parser::with_listener(listener),
        }
    }

    /// Create a terminal sized by `config.terminal`.
    ///
    /// Fails with [`crate::Error::InvalidCapacity`] on a zero scrollback.
    pub fn from_config(config: &Config, listener: T) -> Result<Self> {
        let tc = &config.terminal;
        let buffer = TerminalBuffer::with_scrollback(tc.columns, tc.rows, tc.scrollback)?;
        debug!(
            "terminal {}x{}, scrollback {}",
            buffer.cols(),
            buffer.rows(),
            tc.scrollback
        );
        Ok(Self {
            buffer,
            parser: Parser::with_listener(listener),
        })
    }

    /// Process a chunk of pty output. Chunks may split sequences anywhere.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.parser.parse(&mut self.buffer, bytes);
    }

    pub fn feed_str(&mut self, text: &str) {
        self.feed(text.as_bytes());
    }

    /// Resize the screen. Tab stops follow on the next [`Terminal::feed`].
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.buffer.resize(cols, rows);
    }

    /// Full reset, as if `ESC c` had been received.
    pub fn reset(&mut self) {
        self.parser.reset(&mut self.buffer);
    }

    pub fn buffer(&self) -> &TerminalBuffer {
        &self.buffer
    }

    /// Mutable screen access, e.g. for a renderer draining dirty lines.
    pub fn buffer_mut(&mut self) -> &mut TerminalBuffer {
        &mut self.buffer
    }

    pub fn parser(&self) -> &Parser<T> {
        &self.parser
    }

    /// Modes set by the application.
    pub fn mode(&self) -> TermMode {
        self.parser.mode()
    }

    pub fn listener(&self) -> &T {
        self.parser.listener()
    }
}
