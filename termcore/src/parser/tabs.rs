//! Horizontal tab stops.

/// Default distance between tab stops.
const TAB_WIDTH: usize = 8;

/// One flag per column; a set flag is a tab stop.
///
/// Defaults to a stop every 8 columns starting at column 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStops {
    stops: Vec<bool>,
}

impl TabStops {
    pub fn new(cols: usize) -> Self {
        Self {
            stops: (0..cols).map(|c| c % TAB_WIDTH == 0).collect(),
        }
    }

    /// Number of columns covered.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Whether column `col` holds a stop.
    pub fn is_set(&self, col: usize) -> bool {
        self.stops.get(col).copied().unwrap_or(false)
    }

    /// HTS: set a stop at `col`.
    pub fn set(&mut self, col: usize) {
        if let Some(stop) = self.stops.get_mut(col) {
            *stop = true;
        }
    }

    /// TBC 0: clear the stop at `col`.
    pub fn clear(&mut self, col: usize) {
        if let Some(stop) = self.stops.get_mut(col) {
            *stop = false;
        }
    }

    /// TBC 3: clear every stop.
    pub fn clear_all(&mut self) {
        self.stops.fill(false);
    }

    /// Restore the default stops.
    pub fn reset(&mut self) {
        *self = Self::new(self.stops.len());
    }

    /// Follow a column-count change. Existing stops are kept and new
    /// columns get the default stops.
    pub fn resize(&mut self, cols: usize) {
        let old = self.stops.len();
        self.stops.truncate(cols);
        self.stops.extend((old..cols).map(|c| c % TAB_WIDTH == 0));
    }

    /// Column of the `count`-th stop after `col`, or the last column when
    /// the stops run out.
    pub fn next(&self, col: usize, count: usize) -> usize {
        let last = self.stops.len().saturating_sub(1);
        let mut col = col;
        for _ in 0..count {
            match (col + 1..self.stops.len()).find(|&c| self.stops[c]) {
                Some(stop) => col = stop,
                None => return last,
            }
        }
        col.min(last)
    }

    /// Column of the `count`-th stop before `col`, or column 0 when the
    /// stops run out.
    pub fn prev(&self, col: usize, count: usize) -> usize {
        let mut col = col.min(self.stops.len());
        for _ in 0..count {
            match (0..col).rev().find(|&c| self.stops[c]) {
                Some(stop) => col = stop,
                None => return 0,
            }
        }
        col
    }
}
