//! Fixed-capacity ring buffer.
//!
//! Backs scrollback history. Storage grows on demand up to `capacity`, then
//! each push overwrites the oldest slot in O(1) (classic ring buffer).

use std::num::NonZeroUsize;

use crate::error::{Error, Result};

/// Fixed-capacity FIFO with overwrite-on-full semantics.
///
/// Index 0 is the oldest surviving item and `len - 1` the newest. Pushing
/// into a full buffer silently evicts the oldest item.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    /// Storage, grows up to `capacity`. Slots past `len` may hold stale
    /// items after `clear`; they are unreachable until overwritten.
    inner: Vec<T>,
    /// Maximum number of items to retain.
    capacity: usize,
    /// Number of live items.
    len: usize,
    /// Physical index of the oldest item.
    start: usize,
}

impl<T> CircularBuffer<T> {
    /// Create an empty buffer holding at most `capacity` items.
    ///
    /// Fails with [`Error::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        NonZeroUsize::new(capacity)
            .map(Self::with_capacity)
            .ok_or(Error::InvalidCapacity)
    }

    /// Infallible constructor for a capacity known to be non-zero.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Vec::new(),
            capacity: capacity.get(),
            len: 0,
            start: 0,
        }
    }

    /// Append an item, evicting the oldest if the buffer is full.
    ///
    /// Returns the evicted item so callers can recycle its allocation.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.len == self.capacity {
            // Full: overwrite the oldest slot and advance start.
            let evicted = std::mem::replace(&mut self.inner[self.start], item);
            self.start = (self.start + 1) % self.capacity;
            return Some(evicted);
        }

        let end = (self.start + self.len) % self.capacity;
        if end < self.inner.len() {
            // Reusing a slot left behind by `clear`.
            self.inner[end] = item;
        } else {
            // Growing phase: just append.
            self.inner.push(item);
        }
        self.len += 1;
        None
    }

    /// Item at logical `index` (0 = oldest), or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(&self.inner[self.physical_index(index)])
    }

    /// Mutable access to the item at logical `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let idx = self.physical_index(index);
        Some(&mut self.inner[idx])
    }

    /// Most recently pushed item.
    pub fn newest(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next push will evict.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Maximum number of items retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget all items in O(1) without dropping storage.
    pub fn clear(&mut self) {
        self.len = 0;
        self.start = 0;
    }

    /// Change the capacity, keeping the newest `min(len, new_capacity)`
    /// items and discarding the oldest first.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        if new_capacity == self.capacity {
            return Ok(());
        }

        let keep = self.len.min(new_capacity);
        let skip = self.len - keep;
        let mut old = std::mem::take(&mut self.inner);

        // Rotate the live window to the front, then drop the evicted head
        // and any stale tail in one pass.
        old.rotate_left(self.start);
        old.truncate(self.len);
        old.drain(..skip);

        self.inner = old;
        self.capacity = new_capacity;
        self.len = keep;
        self.start = 0;
        Ok(())
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buf: self,
            front: 0,
            back: self.len,
        }
    }

    /// Translate a logical index (0 = oldest) to a physical Vec index.
    fn physical_index(&self, logical: usize) -> usize {
        debug_assert!(logical < self.len, "logical {logical} >= len {}", self.len);
        (self.start + logical) % self.capacity
    }
}

/// Oldest-to-newest iterator produced by [`CircularBuffer::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    buf: &'a CircularBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.buf.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.buf.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
