//! Terminal cursor state.

/// Cursor position, visibility, and the pending-wrap latch.
///
/// Coordinates are 0-based and always inside the grid. After a character
/// is written into the last column the cursor stays on that column with
/// `wrap_pending` set; the next printable character wraps first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    x: usize,
    y: usize,
    visible: bool,
    wrap_pending: bool,
}

impl Cursor {
    /// Create a visible cursor at (0, 0).
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            visible: true,
            wrap_pending: false,
        }
    }

    /// Column.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Render hint (DECTCEM).
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the next printable character wraps before it is written.
    pub fn is_wrap_pending(&self) -> bool {
        self.wrap_pending
    }

    /// Move to `(x, y)` clamped into a `cols × rows` grid, clearing the
    /// pending wrap.
    pub(crate) fn place(&mut self, x: usize, y: usize, cols: usize, rows: usize) {
        self.x = x.min(cols.saturating_sub(1));
        self.y = y.min(rows.saturating_sub(1));
        self.wrap_pending = false;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_wrap_pending(&mut self, pending: bool) {
        self.wrap_pending = pending;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
