//! Shelf packing for fixed-height glyph slots.

/// Shelf packer over a fixed-size surface.
///
/// Every slot is exactly one shelf tall. Slots are placed left to right along
/// the current shelf; when the next slot does not fit horizontally a new shelf
/// is opened directly below. The packer never revisits space, so freeing is
/// only possible through [`ShelfPacker::reset`].
#[derive(Debug, Clone)]
pub(super) struct ShelfPacker {
    width: u32,
    height: u32,
    shelf_height: u32,
    x: u32,
    y: u32,
}

impl ShelfPacker {
    pub(super) fn new(width: u32, height: u32, shelf_height: u32) -> Self {
        Self {
            width,
            height,
            shelf_height,
            x: 0,
            y: 0,
        }
    }

    /// Reserve a slot `width` pixels wide, returning its top-left corner.
    ///
    /// Returns `None` without changing state when no shelf has room.
    pub(super) fn pack(&mut self, width: u32) -> Option<(u32, u32)> {
        let (x, y) = self.position_for(width)?;
        self.x = x + width;
        self.y = y;
        Some((x, y))
    }

    /// Whether a slot `width` pixels wide would fit.
    pub(super) fn can_fit(&self, width: u32) -> bool {
        self.position_for(width).is_some()
    }

    /// Forget every slot and start again at the top-left corner.
    pub(super) fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    fn position_for(&self, width: u32) -> Option<(u32, u32)> {
        if width == 0 || width > self.width {
            return None;
        }
        let (x, y) = if self.x + width <= self.width {
            (self.x, self.y)
        } else {
            (0, self.y + self.shelf_height)
        };
        (y + self.shelf_height <= self.height).then_some((x, y))
    }
}
