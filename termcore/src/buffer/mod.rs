//! Terminal screen buffer: grid storage with cursor, scrollback, alternate
//! screen, and dirty tracking.
//!
//! `TerminalBuffer` is the single mutation target of the parser and the
//! data source of the renderer. Editing, navigation, scrolling, and screen
//! switching live in submodules.

pub mod cursor;
pub mod dirty;
pub mod editing;
pub mod navigation;
pub mod row;
pub mod screen;
pub mod scroll;

use std::num::NonZeroUsize;

use log::debug;

use crate::cell::Cell;
use crate::error::Result;
use crate::ring::CircularBuffer;

pub use cursor::Cursor;
pub use dirty::{DirtyIter, DirtyRegion, DirtyTracker};
pub use row::Row;

/// Default maximum scrollback lines.
pub const DEFAULT_SCROLLBACK: NonZeroUsize = NonZeroUsize::new(10_000).unwrap();

/// The terminal screen model.
///
/// Holds the primary grid, a lazily-allocated alternate grid, one cursor,
/// the scrollback ring (fed only from the primary grid), and line-level
/// dirty state. All coordinates are 0-based `(x, y)` = `(column, row)`.
#[derive(Debug, Clone)]
pub struct TerminalBuffer {
    /// Number of columns.
    cols: usize,
    /// Number of visible rows.
    rows: usize,
    /// Primary screen rows (index 0 = top).
    primary: Vec<Row>,
    /// Alternate screen rows, allocated on first switch.
    alternate: Option<Vec<Row>>,
    /// Which grid is active.
    using_alt: bool,
    /// Lines scrolled off the top of the primary screen.
    scrollback: CircularBuffer<Row>,
    cursor: Cursor,
    /// DECSC/DECRC saved cursor.
    saved_cursor: Option<Cursor>,
    /// Primary-screen cursor held while mode 1049 has the alternate screen.
    primary_cursor: Option<Cursor>,
    dirty: DirtyTracker,
}

impl TerminalBuffer {
    /// Create a buffer with the default scrollback capacity.
    ///
    /// Zero dimensions are clamped to 1.
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            primary: blank_grid(cols, rows),
            alternate: None,
            using_alt: false,
            scrollback: CircularBuffer::with_capacity(DEFAULT_SCROLLBACK),
            cursor: Cursor::new(),
            saved_cursor: None,
            primary_cursor: None,
            dirty: DirtyTracker::new(rows),
        }
    }

    /// Create a buffer retaining at most `scrollback` history lines.
    ///
    /// Fails with [`crate::Error::InvalidCapacity`] when `scrollback` is 0.
    pub fn with_scrollback(cols: usize, rows: usize, scrollback: usize) -> Result<Self> {
        let history = CircularBuffer::new(scrollback)?;
        Ok(Self {
            scrollback: history,
            ..Self::new(cols, rows)
        })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of visible rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Cursor column.
    pub fn cursor_x(&self) -> usize {
        self.cursor.x()
    }

    /// Cursor row.
    pub fn cursor_y(&self) -> usize {
        self.cursor.y()
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor.is_visible()
    }

    /// Show or hide the cursor (DECTCEM). Marks the cursor row dirty.
    pub fn set_cursor_visible(&mut self, visible: bool) {
        if self.cursor.is_visible() != visible {
            self.cursor.set_visible(visible);
            self.dirty.mark(self.cursor.y());
        }
    }

    /// Scrollback history, oldest line first.
    pub fn scrollback(&self) -> &CircularBuffer<Row> {
        &self.scrollback
    }

    /// Cell at `(x, y)` on the active screen, or `None` out of bounds.
    pub fn get_cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.active_rows().get(y)?.get(x)
    }

    /// Overwrite the cell at `(x, y)` in place.
    ///
    /// Out-of-bounds writes are silently dropped.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: &Cell) {
        if let Some(target) = self.active_rows_mut().get_mut(y).and_then(|r| r.get_mut(x)) {
            target.copy_from(cell);
            self.dirty.mark(y);
        }
    }

    /// Row `y` of the active screen.
    pub fn row(&self, y: usize) -> Option<&Row> {
        self.active_rows().get(y)
    }

    /// Text of row `y` with trailing blanks trimmed.
    pub fn row_text(&self, y: usize) -> Option<String> {
        self.row(y).map(Row::text)
    }

    /// Rectangles that changed since the last [`Self::clear_dirty`].
    pub fn dirty_regions(&self) -> Vec<DirtyRegion> {
        self.dirty.regions(self.cols)
    }

    /// Whether anything changed since the last [`Self::clear_dirty`].
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_any_dirty()
    }

    /// Mark everything clean. Called by the renderer after a paint.
    pub fn clear_dirty(&mut self) {
        self.dirty.clear();
    }

    /// Dirty row indices, resetting the tracker as they are consumed.
    pub fn drain_dirty(&mut self) -> DirtyIter<'_> {
        self.dirty.drain()
    }

    /// RIS: return to the power-on state.
    ///
    /// Leaves the alternate screen (discarding it), blanks the primary
    /// screen, and homes a visible cursor. Scrollback history is kept.
    pub fn reset(&mut self) {
        debug!("buffer: full reset");
        self.alternate = None;
        self.using_alt = false;
        for row in &mut self.primary {
            row.reset(self.cols);
        }
        self.cursor = Cursor::new();
        self.saved_cursor = None;
        self.primary_cursor = None;
        self.dirty.mark_all();
    }

    /// Rows of the active screen.
    fn active_rows(&self) -> &[Row] {
        match &self.alternate {
            Some(alt) if self.using_alt => alt,
            _ => &self.primary,
        }
    }

    fn active_rows_mut(&mut self) -> &mut [Row] {
        match &mut self.alternate {
            Some(alt) if self.using_alt => alt,
            _ => &mut self.primary,
        }
    }
}

/// Allocate `rows` blank rows of `cols` cells.
fn blank_grid(cols: usize, rows: usize) -> Vec<Row> {
    (0..rows).map(|_| Row::new(cols)).collect()
}
