//! VT/ANSI parser.
//!
//! A deterministic byte-at-a-time state machine that applies an output
//! stream from a pty directly to a [`TerminalBuffer`]. It covers:
//!
//! - printable characters (ASCII + full UTF-8, split across chunks)
//! - C0 controls (BEL, BS, HT, LF/VT/FF, CR)
//! - ESC sequences (scroll up/down, NEL, DECSC/DECRC, RIS, HTS)
//! - CSI sequences (cursor, erase, scroll, insert/delete, SGR, modes,
//!   tab stops, device status and attribute reports)
//! - OSC title changes
//! - DCS strings, consumed and discarded
//!
//! Anything unrecognized returns to `Ground` without touching the buffer.
//! The parser keeps no grid state of its own; the buffer is passed to every
//! [`Parser::parse`] call.

mod csi;
pub mod mode;
mod sgr;
pub mod tabs;

use log::trace;

use crate::buffer::TerminalBuffer;
use crate::cell::Cell;
use crate::event::{Event, EventListener, VoidListener};

pub use mode::TermMode;
pub use tabs::TabStops;

/// Most parameters kept per CSI sequence; the rest are dropped.
const MAX_PARAMS: usize = 32;

/// Most intermediate bytes kept per sequence.
const MAX_INTERMEDIATES: usize = 2;

/// Longest OSC payload kept, in bytes. Longer payloads are truncated.
const MAX_OSC_LEN: usize = 4096;

const BEL: u8 = 0x07;
const CAN: u8 = 0x18;
const SUB: u8 = 0x1A;
const ESC: u8 = 0x1B;
const DEL: u8 = 0x7F;

/// Parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Printing text and executing C0 controls.
    #[default]
    Ground,
    /// After `ESC`.
    Escape,
    /// After `ESC` and one or more `0x20..=0x2F` bytes.
    EscapeIntermediate,
    /// After `ESC [`.
    CsiEntry,
    /// Collecting CSI parameters.
    CsiParam,
    /// After a CSI intermediate byte.
    CsiIntermediate,
    /// Skipping a malformed CSI sequence up to its final byte.
    CsiIgnore,
    /// Collecting an OSC payload.
    OscString,
    /// Discarding a DCS payload.
    DcsString,
}

/// The VT state machine.
///
/// Parser state, including half-received escape sequences and partial
/// UTF-8 characters, persists across [`Parser::parse`] calls, so input may
/// be split at any byte.
#[derive(Debug)]
pub struct Parser<T: EventListener = VoidListener> {
    state: State,
    /// Committed CSI parameters.
    params: Vec<u16>,
    /// Parameter being accumulated; `None` until a digit arrives.
    current_param: Option<u16>,
    /// Private marker (`?`, `>`, `<`, `=`) of the current CSI sequence.
    marker: Option<u8>,
    intermediates: Vec<u8>,
    osc: Vec<u8>,
    /// The OSC payload ended on ESC; only a following `\` dispatches it.
    osc_ended: bool,
    /// UTF-8 bytes of the character being decoded.
    utf8_buf: [u8; 4],
    utf8_len: u8,
    /// Continuation bytes still expected.
    utf8_remaining: u8,
    /// Pen used for printed characters.
    current_attr: Cell,
    /// Pen saved by DECSC alongside the cursor.
    saved_attr: Cell,
    /// Primary-screen pen held while mode 1049 has the alternate screen.
    primary_attr: Cell,
    tab_stops: TabStops,
    mode: TermMode,
    listener: T,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser that discards events.
    pub fn new() -> Self {
        Self::with_listener(VoidListener)
    }
}

impl<T: EventListener> Parser<T> {
    /// Create a parser in ground state that reports events to `listener`.
    pub fn with_listener(listener: T) -> Self {
        Self {
            state: State::Ground,
            params: Vec::with_capacity(MAX_PARAMS),
            current_param: None,
            marker: None,
            intermediates: Vec::with_capacity(MAX_INTERMEDIATES),
            osc: Vec::new(),
            osc_ended: false,
            utf8_buf: [0; 4],
            utf8_len: 0,
            utf8_remaining: 0,
            current_attr: Cell::default(),
            saved_attr: Cell::default(),
            primary_attr: Cell::default(),
            tab_stops: TabStops::new(0),
            mode: TermMode::default(),
            listener,
        }
    }

    /// Current state-machine state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Modes set by DECSET/SM.
    pub fn mode(&self) -> TermMode {
        self.mode
    }

    /// The pen applied to printed characters.
    pub fn current_attr(&self) -> &Cell {
        &self.current_attr
    }

    pub fn tab_stops(&self) -> &TabStops {
        &self.tab_stops
    }

    pub fn listener(&self) -> &T {
        &self.listener
    }

    /// Feed a chunk of bytes, applying every effect to `buf`.
    pub fn parse(&mut self, buf: &mut TerminalBuffer, bytes: &[u8]) {
        if self.tab_stops.len() != buf.cols() {
            self.tab_stops.resize(buf.cols());
        }
        for &byte in bytes {
            self.advance(buf, byte);
        }
    }

    /// Feed a string. Same as [`Parser::parse`] on its UTF-8 bytes.
    pub fn parse_str(&mut self, buf: &mut TerminalBuffer, text: &str) {
        self.parse(buf, text.as_bytes());
    }

    /// Advance the state machine by one byte.
    fn advance(&mut self, buf: &mut TerminalBuffer, byte: u8) {
        // Transitions valid from every state.
        match byte {
            CAN | SUB => {
                self.utf8_remaining = 0;
                self.osc_ended = false;
                self.state = State::Ground;
                return;
            }
            ESC => {
                self.utf8_remaining = 0;
                self.osc_ended = self.state == State::OscString;
                self.enter_escape();
                return;
            }
            _ => {}
        }

        match self.state {
            State::Ground => self.advance_ground(buf, byte),
            State::Escape => self.advance_escape(buf, byte),
            State::EscapeIntermediate => self.advance_escape_intermediate(buf, byte),
            State::CsiEntry => self.advance_csi_entry(buf, byte),
            State::CsiParam => self.advance_csi_param(buf, byte),
            State::CsiIntermediate => self.advance_csi_intermediate(buf, byte),
            State::CsiIgnore => self.advance_csi_ignore(buf, byte),
            State::OscString => self.advance_osc(byte),
            State::DcsString => {}
        }
    }

    fn advance_ground(&mut self, buf: &mut TerminalBuffer, byte: u8) {
        if self.utf8_remaining > 0 {
            if (0x80..=0xBF).contains(&byte) {
                self.push_utf8(buf, byte);
                return;
            }
            // Malformed: drop the partial character and reprocess this byte.
            trace!("dropping malformed UTF-8 sequence");
            self.utf8_remaining = 0;
        }

        match byte {
            0x00..=0x1F => self.execute(buf, byte),
            0x20..=0x7E => self.print(buf, char::from(byte)),
            DEL => {}
            0xC2..=0xDF => self.start_utf8(byte, 1),
            0xE0..=0xEF => self.start_utf8(byte, 2),
            0xF0..=0xF4 => self.start_utf8(byte, 3),
            // Stray continuation bytes, overlong leads, and bytes past U+10FFFF.
            _ => trace!("ignoring invalid UTF-8 byte {byte:#04x}"),
        }
    }

    fn start_utf8(&mut self, lead: u8, remaining: u8) {
        self.utf8_buf[0] = lead;
        self.utf8_len = 1;
        self.utf8_remaining = remaining;
    }

    fn push_utf8(&mut self, buf: &mut TerminalBuffer, byte: u8) {
        self.utf8_buf[usize::from(self.utf8_len)] = byte;
        self.utf8_len += 1;
        self.utf8_remaining -= 1;
        if self.utf8_remaining > 0 {
            return;
        }
        // Rejects overlongs and surrogates the lead byte alone cannot.
        match std::str::from_utf8(&self.utf8_buf[..usize::from(self.utf8_len)]) {
            Ok(s) => {
                if let Some(ch) = s.chars().next() {
                    self.print(buf, ch);
                }
            }
            Err(_) => trace!("dropping invalid UTF-8 sequence"),
        }
    }

    /// Write a printable character with the current pen.
    fn print(&mut self, buf: &mut TerminalBuffer, ch: char) {
        if self.mode.contains(TermMode::INSERT) {
            let width = if Cell::is_wide_char(ch) { 2 } else { 1 };
            buf.insert_blank(width);
        }
        let auto_wrap = self.mode.contains(TermMode::LINE_WRAP);
        buf.write_char(ch, &self.current_attr, auto_wrap);
    }

    /// Execute a C0 control. Valid in ground and inside escape sequences.
    fn execute(&mut self, buf: &mut TerminalBuffer, byte: u8) {
        match byte {
            BEL => self.listener.send_event(Event::Bell),
            0x08 => buf.backspace(),
            b'\t' => self.tab_forward(buf, 1),
            b'\n' | 0x0B | 0x0C => buf.linefeed(),
            b'\r' => buf.carriage_return(),
            _ => trace!("ignoring C0 control {byte:#04x}"),
        }
    }

    fn enter_escape(&mut self) {
        self.intermediates.clear();
        self.state = State::Escape;
    }

    fn advance_escape(&mut self, buf: &mut TerminalBuffer, byte: u8) {
        let osc_ended = std::mem::take(&mut self.osc_ended);
        self.state = State::Ground;
        match byte {
            0x00..=0x1F => {
                self.execute(buf, byte);
                self.state = State::Escape;
                self.osc_ended = osc_ended;
            }
            0x20..=0x2F => {
                self.collect_intermediate(byte);
                self.state = State::EscapeIntermediate;
            }
            b'[' => {
                self.params.clear();
                self.current_param = None;
                self.marker = None;
                self.state = State::CsiEntry;
            }
            b']' => {
                self.osc.clear();
                self.state = State::OscString;
            }
            b'P' => self.state = State::DcsString,
            b'D' => buf.scroll_up(1),
            b'M' => buf.scroll_down(1),
            // NEL
            b'E' => {
                buf.carriage_return();
                buf.linefeed();
            }
            // DECSC
            b'7' => self.save_cursor(buf),
            // DECRC
            b'8' => self.restore_cursor(buf),
            // RIS
            b'c' => self.reset(buf),
            // HTS
            b'H' => self.tab_stops.set(buf.cursor_x()),
            // DECKPAM / DECKPNM
            b'=' => self.mode.insert(TermMode::APP_KEYPAD),
            b'>' => self.mode.remove(TermMode::APP_KEYPAD),
            // ST. Any other byte after an OSC's ESC drops the payload.
            b'\\' => {
                if osc_ended {
                    self.osc_dispatch();
                }
            }
            DEL => {
                self.state = State::Escape;
                self.osc_ended = osc_ended;
            }
            _ => trace!("unhandled ESC {:?}", char::from(byte)),
        }
    }

    fn advance_escape_intermediate(&mut self, buf: &mut TerminalBuffer, byte: u8) {
        match byte {
            0x00..=0x1F => self.execute(buf, byte),
            0x20..=0x2F => self.collect_intermediate(byte),
            DEL => {}
            _ => {
                // Charset designations and the like: consumed, not applied.
                trace!(
                    "unhandled ESC {} {:?}",
                    String::from_utf8_lossy(&self.intermediates),
                    char::from(byte)
                );
                self.state = State::Ground;
            }
        }
    }

    fn advance_csi_entry(&mut self, buf: &mut TerminalBuffer, byte: u8) {
        match byte {
            b'<' | b'=' | b'>' | b'?' => {
                self.marker = Some(byte);
                self.state = State::CsiParam;
            }
            _ => self.advance_csi_param(buf, byte),
        }
    }

    fn advance_csi_param(&mut self, buf: &mut TerminalBuffer, byte: u8) {
        match byte {
            0x00..=0x1F => self.execute(buf, byte),
            b'0'..=b'9' => {
                let digit = u16::from(byte - b'0');
                let value = self.current_param.unwrap_or(0);
                self.current_param = Some(value.saturating_mul(10).saturating_add(digit));
                self.state = State::CsiParam;
            }
            b';' | b':' => {
                self.commit_param();
                self.state = State::CsiParam;
            }
            // A marker after the first parameter byte is malformed.
            0x3C..=0x3F => self.state = State::CsiIgnore,
            0x20..=0x2F => {
                self.collect_intermediate(byte);
                self.state = State::CsiIntermediate;
            }
            0x40..=0x7E => self.finish_csi(buf, byte),
            DEL => {}
            _ => self.state = State::CsiIgnore,
        }
    }

    fn advance_csi_intermediate(&mut self, buf: &mut TerminalBuffer, byte: u8) {
        match byte {
            0x00..=0x1F => self.execute(buf, byte),
            0x20..=0x2F => self.collect_intermediate(byte),
            0x40..=0x7E => self.finish_csi(buf, byte),
            DEL => {}
            _ => self.state = State::CsiIgnore,
        }
    }

    fn advance_csi_ignore(&mut self, buf: &mut TerminalBuffer, byte: u8) {
        match byte {
            0x00..=0x1F => self.execute(buf, byte),
            0x40..=0x7E => self.state = State::Ground,
            _ => {}
        }
    }

    /// Commit the trailing parameter and dispatch on the final byte.
    fn finish_csi(&mut self, buf: &mut TerminalBuffer, action: u8) {
        if self.current_param.is_some() || !self.params.is_empty() {
            self.commit_param();
        }
        self.state = State::Ground;
        self.csi_dispatch(buf, action);
    }

    fn commit_param(&mut self) {
        let value = self.current_param.take().unwrap_or(0);
        if self.params.len() < MAX_PARAMS {
            self.params.push(value);
        }
    }

    fn collect_intermediate(&mut self, byte: u8) {
        if self.intermediates.len() < MAX_INTERMEDIATES {
            self.intermediates.push(byte);
        }
    }

    fn advance_osc(&mut self, byte: u8) {
        match byte {
            BEL => {
                self.osc_dispatch();
                self.state = State::Ground;
            }
            0x00..=0x1F => {}
            _ => {
                if self.osc.len() < MAX_OSC_LEN {
                    self.osc.push(byte);
                }
            }
        }
    }

    /// Act on a complete OSC payload. Only titles (OSC 0 and 2) are used.
    fn osc_dispatch(&mut self) {
        let payload = std::mem::take(&mut self.osc);
        let (command, rest) = match payload.iter().position(|&b| b == b';') {
            Some(split) => (&payload[..split], &payload[split + 1..]),
            None => (&payload[..], &[][..]),
        };
        match command {
            b"0" | b"2" => {
                let title = String::from_utf8_lossy(rest).into_owned();
                self.listener.send_event(Event::Title(title));
            }
            _ => trace!("unhandled OSC {}", String::from_utf8_lossy(command)),
        }
        // Keep the allocation for the next payload.
        self.osc = payload;
        self.osc.clear();
    }

    /// DECSC: cursor position plus the pen.
    fn save_cursor(&mut self, buf: &mut TerminalBuffer) {
        buf.save_cursor();
        self.saved_attr.copy_from(&self.current_attr);
    }

    /// DECRC.
    fn restore_cursor(&mut self, buf: &mut TerminalBuffer) {
        buf.restore_cursor();
        self.current_attr.copy_from(&self.saved_attr);
    }

    /// HT / CHT: advance `count` tab stops.
    fn tab_forward(&mut self, buf: &mut TerminalBuffer, count: usize) {
        let x = self.tab_stops.next(buf.cursor_x(), count);
        buf.set_cursor(x, buf.cursor_y());
    }

    /// CBT: move back `count` tab stops.
    fn tab_backward(&mut self, buf: &mut TerminalBuffer, count: usize) {
        let x = self.tab_stops.prev(buf.cursor_x(), count);
        buf.set_cursor(x, buf.cursor_y());
    }

    /// Full reset (RIS): return the buffer and every parser-side setting to
    /// power-on state and drop any half-received sequence.
    pub fn reset(&mut self, buf: &mut TerminalBuffer) {
        self.state = State::Ground;
        self.utf8_len = 0;
        self.utf8_remaining = 0;
        self.osc.clear();
        self.osc_ended = false;
        buf.reset();
        self.current_attr.reset();
        self.saved_attr.reset();
        self.primary_attr.reset();
        self.tab_stops.reset();
        self.mode = TermMode::default();
    }
}
