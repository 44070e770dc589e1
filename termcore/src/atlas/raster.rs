//! Rasterization seam between the atlas and a font backend.

use crate::cell::Cell;

use super::GlyphKey;

/// Pixel geometry of one grid cell.
///
/// All values are in pixels measured from the top of the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub cell_width: u32,
    pub cell_height: u32,
    /// Row the bottom of most glyphs rests on.
    pub baseline: u32,
    /// First row of the underline stroke.
    pub underline_position: u32,
    pub underline_thickness: u32,
}

/// Produces alpha coverage masks for glyphs.
///
/// The atlas calls [`Rasterizer::rasterize`] once per cache miss and tints
/// the mask with the key's color itself, so implementations only deal in
/// coverage.
pub trait Rasterizer {
    /// Cell geometry. Must stay constant for the life of the atlas.
    fn metrics(&self) -> FontMetrics;

    /// Horizontal advance of `ch` in pixels.
    fn advance(&self, ch: char) -> u32 {
        if ch.is_control() {
            0
        } else if Cell::is_wide_char(ch) {
            self.metrics().cell_width * 2
        } else {
            self.metrics().cell_width
        }
    }

    /// Render `key` into a row-major coverage mask of `width * height` bytes.
    ///
    /// `width` is one cell for ordinary characters and two cells for wide
    /// ones. Short masks are padded with transparent pixels.
    fn rasterize(&self, key: &GlyphKey, width: u32, height: u32) -> Vec<u8>;
}
