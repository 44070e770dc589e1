//! Terminal mode flags (DECSET/DECRST, SM/RM).
//!
//! Modes the parser tracks for the host to read back. Cursor visibility
//! and the active screen are tracked by the buffer instead.

use bitflags::bitflags;

bitflags! {
    /// Bitflags for terminal mode state.
    ///
    /// Modes are toggled by DECSET (`CSI ? n h`), DECRST (`CSI ? n l`),
    /// SM (`CSI n h`), and RM (`CSI n l`) escape sequences.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TermMode: u8 {
        /// DECAWM: auto-wrap at end of line.
        const LINE_WRAP       = 1;
        /// IRM: insert mode.
        const INSERT          = 1 << 1;
        /// DECCKM: application cursor keys.
        const APP_CURSOR      = 1 << 2;
        /// DECKPAM/DECKPNM: application keypad mode.
        const APP_KEYPAD      = 1 << 3;
        /// Mode 2004: bracketed paste mode.
        const BRACKETED_PASTE = 1 << 4;
    }
}

impl Default for TermMode {
    fn default() -> Self {
        Self::LINE_WRAP
    }
}
