//! CSI dispatch.
//!
//! Parameters arrive 1-based with `0` and missing both meaning "default";
//! positions are converted to the buffer's 0-based coordinates here.

use log::trace;

use crate::buffer::TerminalBuffer;
use crate::event::{Event, EventListener};

use super::{Parser, TermMode, sgr};

impl<T: EventListener> Parser<T> {
    /// Execute a complete CSI sequence ending in `action`.
    pub(super) fn csi_dispatch(&mut self, buf: &mut TerminalBuffer, action: u8) {
        if !self.intermediates.is_empty() {
            trace!(
                "unhandled CSI {:?} with intermediates {:?}",
                char::from(action),
                String::from_utf8_lossy(&self.intermediates)
            );
            return;
        }

        match (self.marker, action) {
            (None, b'm') => sgr::apply(&mut self.current_attr, &self.params),
            (None, b'h') => self.set_ansi_modes(true),
            (None, b'l') => self.set_ansi_modes(false),
            (Some(b'?'), b'h') => self.set_private_modes(buf, true),
            (Some(b'?'), b'l') => self.set_private_modes(buf, false),
            (None, _) => self.csi_plain(buf, action),
            (Some(marker), _) => trace!(
                "unhandled CSI {} {:?} {:?}",
                char::from(marker),
                self.params,
                char::from(action)
            ),
        }
    }

    /// Sequences without a private marker, other than SGR and SM/RM.
    fn csi_plain(&mut self, buf: &mut TerminalBuffer, action: u8) {
        let (x, y) = (buf.cursor_x(), buf.cursor_y());
        let n = self.arg(0, 1);

        match action {
            // CUP / HVP
            b'H' | b'f' => buf.set_cursor(self.arg(1, 1) - 1, self.arg(0, 1) - 1),
            // CUU
            b'A' => buf.set_cursor(x, y.saturating_sub(n)),
            // CUD / VPR
            b'B' | b'e' => buf.set_cursor(x, y.saturating_add(n)),
            // CUF / HPR
            b'C' | b'a' => buf.set_cursor(x.saturating_add(n), y),
            // CUB
            b'D' => buf.set_cursor(x.saturating_sub(n), y),
            // CNL
            b'E' => buf.set_cursor(0, y.saturating_add(n)),
            // CPL
            b'F' => buf.set_cursor(0, y.saturating_sub(n)),
            // CHA / HPA
            b'G' | b'`' => buf.set_cursor(n - 1, y),
            // VPA
            b'd' => buf.set_cursor(x, n - 1),
            // ED
            b'J' => match self.arg(0, 0) {
                0 => buf.clear_from_cursor(),
                1 => buf.clear_to_cursor(),
                2 => buf.clear_screen(),
                3 => {
                    buf.clear_screen();
                    buf.clear_scrollback();
                }
                mode => trace!("unhandled ED mode {mode}"),
            },
            // EL
            b'K' => match self.arg(0, 0) {
                0 => buf.clear_line_from_cursor(),
                1 => buf.clear_line_to_cursor(),
                2 => buf.clear_line(),
                mode => trace!("unhandled EL mode {mode}"),
            },
            // SU / SD
            b'S' => buf.scroll_up(n),
            b'T' => buf.scroll_down(n),
            // IL / DL
            b'L' => buf.insert_lines(n),
            b'M' => buf.delete_lines(n),
            // ICH / DCH / ECH
            b'@' => buf.insert_blank(n),
            b'P' => buf.delete_chars(n),
            b'X' => buf.erase_chars(n),
            // CHT / CBT
            b'I' => self.tab_forward(buf, n),
            b'Z' => self.tab_backward(buf, n),
            // TBC
            b'g' => match self.arg(0, 0) {
                0 => self.tab_stops.clear(x),
                3 => self.tab_stops.clear_all(),
                mode => trace!("unhandled TBC mode {mode}"),
            },
            // SCOSC / SCORC
            b's' => buf.save_cursor(),
            b'u' => buf.restore_cursor(),
            // DSR
            b'n' => match self.arg(0, 0) {
                5 => self.reply("\x1b[0n".to_owned()),
                6 => self.reply(format!("\x1b[{};{}R", y + 1, x + 1)),
                kind => trace!("unhandled DSR {kind}"),
            },
            // DA
            b'c' => {
                if self.arg(0, 0) == 0 {
                    self.reply("\x1b[?6c".to_owned());
                }
            }
            _ => trace!("unhandled CSI {:?} {:?}", self.params, char::from(action)),
        }
    }

    /// SM / RM.
    fn set_ansi_modes(&mut self, on: bool) {
        for i in 0..self.params.len() {
            match self.params[i] {
                4 => self.mode.set(TermMode::INSERT, on),
                mode => trace!("unhandled ANSI mode {mode}"),
            }
        }
    }

    /// DECSET / DECRST.
    fn set_private_modes(&mut self, buf: &mut TerminalBuffer, on: bool) {
        for i in 0..self.params.len() {
            match self.params[i] {
                1 => self.mode.set(TermMode::APP_CURSOR, on),
                7 => self.mode.set(TermMode::LINE_WRAP, on),
                25 => buf.set_cursor_visible(on),
                47 | 1047 => {
                    if on {
                        buf.use_alternate_screen();
                    } else {
                        buf.use_normal_screen();
                    }
                }
                1049 => {
                    let alt = buf.is_alternate_screen();
                    if on {
                        if !alt {
                            self.primary_attr.copy_from(&self.current_attr);
                        }
                        buf.enter_alternate_screen();
                    } else {
                        if alt {
                            self.current_attr.copy_from(&self.primary_attr);
                        }
                        buf.leave_alternate_screen();
                    }
                }
                2004 => self.mode.set(TermMode::BRACKETED_PASTE, on),
                mode => trace!("unhandled private mode {mode}"),
            }
        }
    }

    /// Parameter `index`, with a missing or zero value meaning `default`.
    fn arg(&self, index: usize, default: usize) -> usize {
        match self.params.get(index) {
            Some(&value) if value != 0 => usize::from(value),
            _ => default,
        }
    }

    fn reply(&self, text: String) {
        self.listener.send_event(Event::PtyWrite(text));
    }
}
