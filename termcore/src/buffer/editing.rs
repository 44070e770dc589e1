//! Buffer editing operations.
//!
//! The print path plus the erase, insert, and delete primitives the parser
//! calls for CSI J/K/X/@/P. Erased cells become the default cell.

use std::ops::Range;

use crate::cell::Cell;

use super::TerminalBuffer;

impl TerminalBuffer {
    /// Write a character at the cursor and advance it.
    ///
    /// A wide character occupies its cell plus a blank continuation cell to
    /// the right, and wraps early rather than straddle the right edge.
    /// Writing into the last column leaves the cursor there with a pending
    /// wrap; the next character wraps first when `auto_wrap` is on and
    /// overwrites the last column when it is off.
    pub fn write_char(&mut self, ch: char, attr: &Cell, auto_wrap: bool) {
        let width = if Cell::is_wide_char(ch) { 2 } else { 1 };
        let cols = self.cols;

        // A wide char cannot fit a 1-column grid at all.
        if width > cols {
            return;
        }

        if self.cursor.is_wrap_pending() {
            if auto_wrap {
                self.carriage_return();
                self.linefeed();
            } else {
                self.cursor.set_wrap_pending(false);
            }
        }

        let mut x = self.cursor.x();
        if width == 2 && x + 1 >= cols {
            if auto_wrap {
                self.carriage_return();
                self.linefeed();
                x = 0;
            } else {
                x = cols - 2;
            }
        }
        let y = self.cursor.y();

        self.clear_wide_char_at(y, x);
        if width == 2 {
            self.clear_wide_char_at(y, x + 1);
        }

        let row = &mut self.active_rows_mut()[y];
        row[x].assign(ch, attr);
        if width == 2 {
            row[x + 1].copy_from(&Cell::with_bg(attr.bg()));
        }
        self.dirty.mark(y);

        let next = x + width;
        let rows = self.rows;
        if next >= cols {
            self.cursor.place(cols - 1, y, cols, rows);
            self.cursor.set_wrap_pending(true);
        } else {
            self.cursor.place(next, y, cols, rows);
        }
    }

    /// EL 2: erase the whole cursor row.
    pub fn clear_line(&mut self) {
        self.clear_cells(self.cursor.y(), 0..self.cols);
    }

    /// EL 0: erase from the cursor to the end of the row.
    pub fn clear_line_from_cursor(&mut self) {
        self.clear_cells(self.cursor.y(), self.cursor.x()..self.cols);
    }

    /// EL 1: erase from the start of the row through the cursor, inclusive.
    pub fn clear_line_to_cursor(&mut self) {
        self.clear_cells(self.cursor.y(), 0..self.cursor.x() + 1);
    }

    /// ED 2: erase every row of the active screen. The cursor stays put.
    pub fn clear_screen(&mut self) {
        self.clear_rows(0..self.rows);
        self.dirty.mark_all();
    }

    /// ED 0: erase from the cursor to the end of the screen.
    pub fn clear_from_cursor(&mut self) {
        self.clear_line_from_cursor();
        self.clear_rows(self.cursor.y() + 1..self.rows);
    }

    /// ED 1: erase from the top of the screen through the cursor.
    pub fn clear_to_cursor(&mut self) {
        self.clear_rows(0..self.cursor.y());
        self.clear_line_to_cursor();
    }

    /// ED 3: drop all scrollback history. The visible screen is untouched.
    pub fn clear_scrollback(&mut self) {
        self.scrollback.clear();
    }

    /// ECH: erase `count` cells starting at the cursor without shifting.
    pub fn erase_chars(&mut self, count: usize) {
        let x = self.cursor.x();
        self.clear_cells(self.cursor.y(), x..x.saturating_add(count));
    }

    /// ICH: insert `count` blank cells at the cursor, shifting the rest of
    /// the row right. Cells pushed past the right edge are lost.
    pub fn insert_blank(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let (x, y) = (self.cursor.x(), self.cursor.y());
        let last = self.cols - 1;
        self.clear_wide_char_at(y, x);

        let row = &mut self.active_rows_mut()[y];
        row.insert_blank(x, count);
        // A wide char shifted onto the last column lost its continuation.
        if row[last].width() == 2 {
            row[last].reset();
        }
        self.dirty.mark(y);
    }

    /// DCH: delete `count` cells at the cursor, shifting the rest of the
    /// row left and filling the right edge with blanks.
    pub fn delete_chars(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let (x, y) = (self.cursor.x(), self.cursor.y());
        let end = x.saturating_add(count).min(self.cols) - 1;
        self.clear_wide_char_at(y, x);
        self.clear_wide_char_at(y, end);

        self.active_rows_mut()[y].delete(x, count);
        self.dirty.mark(y);
    }

    /// Reset cells `range` of row `y`, blanking the other half of any wide
    /// character cut by either end of the range.
    fn clear_cells(&mut self, y: usize, range: Range<usize>) {
        let end = range.end.min(self.cols);
        if range.start >= end {
            return;
        }
        self.clear_wide_char_at(y, range.start);
        self.clear_wide_char_at(y, end - 1);
        if let Some(row) = self.active_rows_mut().get_mut(y) {
            row.clear_range(range.start..end);
        }
        self.dirty.mark(y);
    }

    /// Reset whole rows in `range`.
    fn clear_rows(&mut self, range: Range<usize>) {
        let cols = self.cols;
        let end = range.end.min(self.rows);
        let start = range.start.min(end);
        for row in &mut self.active_rows_mut()[start..end] {
            row.reset(cols);
        }
        self.dirty.mark_range(start, end);
    }

    /// Break up any wide character pair touching `(x, y)`.
    ///
    /// On a continuation cell the owning wide char is blanked; on a wide
    /// char its continuation is blanked.
    pub(super) fn clear_wide_char_at(&mut self, y: usize, x: usize) {
        let Some(row) = self.active_rows_mut().get_mut(y) else {
            return;
        };
        let cols = row.cols();
        if x >= cols {
            return;
        }
        if x > 0 && row[x - 1].width() == 2 {
            row[x - 1].reset();
        }
        if row[x].width() == 2 && x + 1 < cols {
            row[x + 1].reset();
        }
    }
}

#[cfg(test)]
mod tests;
