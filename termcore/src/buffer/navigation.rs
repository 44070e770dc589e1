//! Cursor movement.
//!
//! Absolute and relative positioning, the C0 motion controls (CR, LF, BS),
//! IND/RI, and DECSC/DECRC. Every move is clamped to the grid and clears
//! a pending wrap.

use super::TerminalBuffer;

impl TerminalBuffer {
    /// Move the cursor to `(x, y)`, clamped to the grid.
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.cursor.place(x, y, self.cols, self.rows);
    }

    /// Move the cursor by a signed offset, clamped to the grid.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let x = self.cursor.x().saturating_add_signed(dx);
        let y = self.cursor.y().saturating_add_signed(dy);
        self.set_cursor(x, y);
    }

    /// LF / IND: move down one row, scrolling the screen up at the bottom.
    ///
    /// The column is kept.
    pub fn linefeed(&mut self) {
        let y = self.cursor.y();
        if y + 1 >= self.rows {
            self.scroll_up(1);
            self.cursor.set_wrap_pending(false);
        } else {
            self.set_cursor(self.cursor.x(), y + 1);
        }
    }

    /// RI: move up one row, scrolling the screen down at the top.
    pub fn reverse_index(&mut self) {
        let y = self.cursor.y();
        if y == 0 {
            self.scroll_down(1);
            self.cursor.set_wrap_pending(false);
        } else {
            self.set_cursor(self.cursor.x(), y - 1);
        }
    }

    /// CR: move to column 0.
    pub fn carriage_return(&mut self) {
        self.set_cursor(0, self.cursor.y());
    }

    /// BS: move left one column. Never wraps to the previous row.
    pub fn backspace(&mut self) {
        self.set_cursor(self.cursor.x().saturating_sub(1), self.cursor.y());
    }

    /// DECSC: remember the cursor position.
    pub fn save_cursor(&mut self) {
        self.saved_cursor = Some(self.cursor);
    }

    /// DECRC: return to the saved position, or home if nothing was saved.
    ///
    /// The saved position is re-clamped since the grid may have shrunk.
    /// Visibility is not part of the saved state.
    pub fn restore_cursor(&mut self) {
        let saved = self.saved_cursor.unwrap_or_default();
        self.set_cursor(saved.x(), saved.y());
    }
}
