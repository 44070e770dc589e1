//! Scroll operations.
//!
//! `scroll_up`, `scroll_down`, `insert_lines`, and `delete_lines` rotate
//! existing row allocations instead of reallocating. Rows leaving the top
//! of the primary screen move into scrollback, and the row the ring evicts
//! comes back as the new blank bottom row.

use std::ops::Range;

use super::{Row, TerminalBuffer};

impl TerminalBuffer {
    /// SU: scroll the active screen up by `count` rows.
    ///
    /// On the primary screen every row scrolled off the top is pushed into
    /// scrollback, so history grows by `count` (up to its capacity). When
    /// `count` exceeds the screen height the surplus rows are blank. The
    /// alternate screen never feeds scrollback.
    pub fn scroll_up(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let (cols, rows) = (self.cols, self.rows);
        let shifted = count.min(rows);

        if self.using_alt {
            self.rotate_up(0..rows, shifted);
        } else {
            self.primary.rotate_left(shifted);
            for y in rows - shifted..rows {
                let line = std::mem::take(&mut self.primary[y]);
                let mut fresh = self.scrollback.push(line).unwrap_or_default();
                fresh.reset(cols);
                self.primary[y] = fresh;
            }
            let surplus = (count - shifted).min(self.scrollback.capacity());
            for _ in 0..surplus {
                self.scrollback.push(Row::new(cols));
            }
        }
        self.dirty.mark_all();
    }

    /// SD: scroll the active screen down by `count` rows.
    ///
    /// Rows pushed off the bottom are lost; blank rows appear at the top.
    pub fn scroll_down(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.rotate_down(0..self.rows, count);
        self.dirty.mark_all();
    }

    /// IL: insert `count` blank rows at the cursor row, pushing the rows
    /// below it down. Rows pushed past the bottom are lost.
    pub fn insert_lines(&mut self, count: usize) {
        let y = self.cursor.y();
        self.rotate_down(y..self.rows, count);
        self.dirty.mark_range(y, self.rows);
        self.carriage_return();
    }

    /// DL: delete `count` rows at the cursor row, pulling the rows below it
    /// up. Blank rows appear at the bottom. Scrollback is not touched.
    pub fn delete_lines(&mut self, count: usize) {
        let y = self.cursor.y();
        self.rotate_up(y..self.rows, count);
        self.dirty.mark_range(y, self.rows);
        self.carriage_return();
    }

    /// Rotate `range` of the active screen up by `count` and blank the rows
    /// that wrapped to the bottom.
    fn rotate_up(&mut self, range: Range<usize>, count: usize) {
        let cols = self.cols;
        let region = &mut self.active_rows_mut()[range];
        let count = count.min(region.len());
        region.rotate_left(count);
        let len = region.len();
        for row in &mut region[len - count..] {
            row.reset(cols);
        }
    }

    /// Rotate `range` of the active screen down by `count` and blank the
    /// rows that wrapped to the top.
    fn rotate_down(&mut self, range: Range<usize>, count: usize) {
        let cols = self.cols;
        let region = &mut self.active_rows_mut()[range];
        let count = count.min(region.len());
        region.rotate_right(count);
        for row in &mut region[..count] {
            row.reset(cols);
        }
    }
}

#[cfg(test)]
mod tests;
