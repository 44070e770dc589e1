//! Screen selection and resize.
//!
//! The buffer is always on one of two screens. The alternate grid is
//! allocated the first time it is selected and then kept, so switching
//! back and forth never copies or clears either grid.

use log::debug;

use super::{Row, TerminalBuffer, blank_grid};

impl TerminalBuffer {
    /// Switch to the alternate screen. No-op if already there.
    pub fn use_alternate_screen(&mut self) {
        if self.using_alt {
            return;
        }
        let (cols, rows) = (self.cols, self.rows);
        self.alternate.get_or_insert_with(|| blank_grid(cols, rows));
        self.using_alt = true;
        self.dirty.mark_all();
        debug!("buffer: switched to alternate screen");
    }

    /// Switch back to the primary screen. No-op if already there.
    pub fn use_normal_screen(&mut self) {
        if !self.using_alt {
            return;
        }
        self.using_alt = false;
        self.dirty.mark_all();
        debug!("buffer: switched to primary screen");
    }

    /// Mode 1049 set: keep the primary cursor in its own slot, then switch
    /// to a cleared alternate screen.
    ///
    /// DECSC on the alternate screen uses the ordinary saved-cursor slot, so
    /// it cannot clobber the position [`Self::leave_alternate_screen`]
    /// returns to.
    pub fn enter_alternate_screen(&mut self) {
        if !self.using_alt {
            self.primary_cursor = Some(self.cursor);
        }
        self.use_alternate_screen();
        self.clear_screen();
    }

    /// Mode 1049 reset: switch to the primary screen and put the cursor back
    /// where [`Self::enter_alternate_screen`] found it.
    pub fn leave_alternate_screen(&mut self) {
        self.use_normal_screen();
        if let Some(saved) = self.primary_cursor.take() {
            self.set_cursor(saved.x(), saved.y());
        }
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.using_alt
    }

    /// Change the grid dimensions in place.
    ///
    /// The overlapping top-left rectangle survives; new cells are blank.
    /// Both grids are resized when the alternate one exists. The cursor is
    /// re-clamped and the whole screen marked dirty. Scrollback rows keep
    /// the width they had when they scrolled off. Zero dimensions are
    /// clamped to 1.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        let cols = cols.max(1);
        let rows = rows.max(1);
        if cols == self.cols && rows == self.rows {
            return;
        }
        let (old_cols, old_rows) = (self.cols, self.rows);
        debug!("buffer: resize {old_cols}x{old_rows} -> {cols}x{rows}");

        resize_grid(&mut self.primary, cols, rows);
        if let Some(alt) = &mut self.alternate {
            resize_grid(alt, cols, rows);
        }
        self.cols = cols;
        self.rows = rows;
        let (x, y) = (self.cursor.x(), self.cursor.y());
        self.cursor.place(x, y, cols, rows);
        self.dirty.resize(rows);
    }
}

fn resize_grid(grid: &mut Vec<Row>, cols: usize, rows: usize) {
    grid.truncate(rows);
    for row in grid.iter_mut() {
        row.resize(cols);
    }
    grid.resize_with(rows, || Row::new(cols));
}
