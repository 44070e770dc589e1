//! Line-level dirty tracking for damage-based rendering.
//!
//! Tracks which visible rows have changed since the renderer last asked.
//! The renderer reads [`DirtyTracker::regions`] (or drains line indices),
//! repaints only those rows, and resets the tracker to clean.

/// A rectangle of cells, in cell coordinates, that needs repainting.
///
/// Tracking is line-granular, so regions always span the full row width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRegion {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl DirtyRegion {
    /// `height` full-width rows of a `width`-column grid, starting at row `y`.
    pub fn rows(y: usize, height: usize, width: usize) -> Self {
        Self {
            x: 0,
            y,
            width,
            height,
        }
    }
}

/// Tracks which rows have changed since last read.
///
/// Each visible line has a dirty bit. `mark_all` provides a fast path for
/// operations that invalidate everything (scroll, resize, screen switch).
#[derive(Debug, Clone)]
pub struct DirtyTracker {
    /// One bool per visible row.
    dirty: Vec<bool>,
    /// Shortcut: everything changed.
    all_dirty: bool,
}

impl DirtyTracker {
    /// Create a tracker for `lines` rows, fully dirty so the first frame
    /// paints everything.
    pub fn new(lines: usize) -> Self {
        Self {
            dirty: vec![false; lines],
            all_dirty: true,
        }
    }

    /// Mark a single line dirty. Out-of-range lines are ignored.
    pub fn mark(&mut self, line: usize) {
        if let Some(b) = self.dirty.get_mut(line) {
            *b = true;
        }
    }

    /// Mark `start..end` dirty.
    pub fn mark_range(&mut self, start: usize, end: usize) {
        let end = end.min(self.dirty.len());
        if start < end {
            self.dirty[start..end].fill(true);
        }
    }

    /// Mark everything dirty.
    pub fn mark_all(&mut self) {
        self.all_dirty = true;
    }

    /// Whether the coarse full-screen flag is set.
    pub fn is_fully_dirty(&self) -> bool {
        self.all_dirty
    }

    /// Check whether a specific line is dirty.
    pub fn is_dirty(&self, line: usize) -> bool {
        self.all_dirty || self.dirty.get(line).copied().unwrap_or(false)
    }

    /// Check whether any line is dirty.
    pub fn is_any_dirty(&self) -> bool {
        self.all_dirty || self.dirty.iter().any(|&b| b)
    }

    /// Dirty rectangles for a grid `cols` wide.
    ///
    /// One full-screen region when fully dirty; otherwise one region per
    /// run of adjacent dirty rows.
    pub fn regions(&self, cols: usize) -> Vec<DirtyRegion> {
        let lines = self.dirty.len();
        if self.all_dirty {
            return vec![DirtyRegion::rows(0, lines, cols)];
        }

        let mut out = Vec::new();
        let mut run_start = None;
        for (line, &d) in self.dirty.iter().enumerate() {
            match (d, run_start) {
                (true, None) => run_start = Some(line),
                (false, Some(start)) => {
                    out.push(DirtyRegion::rows(start, line - start, cols));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            out.push(DirtyRegion::rows(start, lines - start, cols));
        }
        out
    }

    /// Reset every line to clean.
    pub fn clear(&mut self) {
        self.all_dirty = false;
        self.dirty.fill(false);
    }

    /// Yield dirty line indices and reset all to clean.
    ///
    /// Each yielded index is immediately cleared, and any un-iterated dirty
    /// lines are cleared when the iterator is dropped.
    pub fn drain(&mut self) -> DirtyIter<'_> {
        let all = self.all_dirty;
        self.all_dirty = false;
        DirtyIter {
            dirty: &mut self.dirty,
            pos: 0,
            all,
        }
    }

    /// Resize the tracker to a new line count, marking all dirty.
    pub fn resize(&mut self, lines: usize) {
        self.dirty.resize(lines, false);
        self.mark_all();
    }
}

/// Iterator over dirty line indices produced by [`DirtyTracker::drain`].
#[derive(Debug)]
pub struct DirtyIter<'a> {
    dirty: &'a mut [bool],
    pos: usize,
    all: bool,
}

impl Iterator for DirtyIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pos < self.dirty.len() {
            let line = self.pos;
            self.pos += 1;
            if self.all || self.dirty[line] {
                self.dirty[line] = false;
                return Some(line);
            }
        }
        None
    }
}

impl Drop for DirtyIter<'_> {
    fn drop(&mut self) {
        for b in &mut self.dirty[self.pos..] {
            *b = false;
        }
    }
}
