//! Terminal grid row.
//!
//! A `Row` is a contiguous array of `Cell`s representing one terminal line.
//! Rows are also the unit stored in scrollback, so their allocation is
//! recycled when the scrollback ring evicts its oldest line.

use std::ops::{Index, IndexMut, Range};

use crate::cell::Cell;

/// One row of cells in the terminal grid.
///
/// `Row::default()` is zero columns wide and does not allocate.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Row {
    inner: Vec<Cell>,
}

impl Row {
    /// Create a new row of `cols` default cells.
    pub fn new(cols: usize) -> Self {
        Self {
            inner: vec![Cell::default(); cols],
        }
    }

    /// Number of columns in this row.
    pub fn cols(&self) -> usize {
        self.inner.len()
    }

    /// The cells of this row.
    pub fn cells(&self) -> &[Cell] {
        &self.inner
    }

    /// Cell at `col`, or `None` past the end.
    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.inner.get(col)
    }

    pub fn get_mut(&mut self, col: usize) -> Option<&mut Cell> {
        self.inner.get_mut(col)
    }

    /// Reset every cell to default, resizing to `cols` if needed.
    ///
    /// Keeps the existing allocation, so a recycled scrollback row costs no
    /// heap traffic.
    pub fn reset(&mut self, cols: usize) {
        self.inner.truncate(cols);
        for cell in &mut self.inner {
            cell.reset();
        }
        self.inner.resize_with(cols, Cell::default);
    }

    /// Reset cells in `range` to default. The range is clipped to the row.
    pub fn clear_range(&mut self, range: Range<usize>) {
        let end = range.end.min(self.inner.len());
        if range.start >= end {
            return;
        }
        for cell in &mut self.inner[range.start..end] {
            cell.reset();
        }
    }

    /// Change the width, preserving the leftmost `min(old, new)` cells.
    ///
    /// A wide character whose second column falls past the new edge is
    /// replaced by a blank so no half glyph survives the clip.
    pub fn resize(&mut self, cols: usize) {
        if cols < self.inner.len() {
            if let Some(last) = cols.checked_sub(1) {
                if self.inner[last].width() == 2 {
                    self.inner[last].reset();
                }
            }
            self.inner.truncate(cols);
        } else {
            self.inner.resize_with(cols, Cell::default);
        }
    }

    /// Shift cells in `col..` right by `count`, filling the gap with blanks.
    ///
    /// Cells pushed past the right edge are lost.
    pub fn insert_blank(&mut self, col: usize, count: usize) {
        let cols = self.inner.len();
        if col >= cols {
            return;
        }
        let count = count.min(cols - col);
        self.inner[col..].rotate_right(count);
        for cell in &mut self.inner[col..col + count] {
            cell.reset();
        }
    }

    /// Remove `count` cells at `col`, shifting the rest left and filling the
    /// right edge with blanks.
    pub fn delete(&mut self, col: usize, count: usize) {
        let cols = self.inner.len();
        if col >= cols {
            return;
        }
        let count = count.min(cols - col);
        self.inner[col..].rotate_left(count);
        for cell in &mut self.inner[cols - count..] {
            cell.reset();
        }
    }

    /// Whether every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.inner.iter().all(Cell::is_blank)
    }

    /// Visible text of the row with trailing blanks trimmed.
    ///
    /// The continuation column after a wide character is skipped.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.inner.len());
        let mut skip = false;
        for cell in &self.inner {
            if skip {
                skip = false;
                continue;
            }
            out.push(cell.ch());
            skip = cell.width() == 2;
        }
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out
    }
}

impl Index<usize> for Row {
    type Output = Cell;

    fn index(&self, col: usize) -> &Cell {
        &self.inner[col]
    }
}

impl IndexMut<usize> for Row {
    fn index_mut(&mut self, col: usize) -> &mut Cell {
        &mut self.inner[col]
    }
}
