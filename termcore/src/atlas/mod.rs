//! Shelf-packed glyph atlas.
//!
//! Caches one rasterized image per distinct (character, bold, italic,
//! underline, color) combination on a single RGBA8 [`Surface`] and hands the
//! renderer normalized texture coordinates for it. Slots are one cell tall and
//! one or two cells wide, packed left to right in shelves. The atlas never
//! evicts individual glyphs: once [`GlyphAtlas::is_full`] reports true the
//! caller recycles the whole surface with [`GlyphAtlas::clear`].

mod builtin;
mod packer;
mod raster;
mod surface;

use std::collections::HashMap;

use log::debug;

use crate::cell::Cell;
use crate::config::AtlasConfig;
use crate::error::{Error, Result};

pub use builtin::BuiltinRasterizer;
pub use raster::{FontMetrics, Rasterizer};
pub use surface::Surface;

use packer::ShelfPacker;

/// Cache key: everything that changes a glyph's pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphKey {
    pub ch: char,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// 24-bit `0xRRGGBB`.
    pub color: u32,
}

impl GlyphKey {
    pub fn new(ch: char, bold: bool, italic: bool, underline: bool, color: u32) -> Self {
        Self {
            ch,
            bold,
            italic,
            underline,
            color: color & 0xFF_FFFF,
        }
    }

    /// Key for drawing `cell`'s character with its own attributes.
    pub fn for_cell(cell: &Cell) -> Self {
        Self::new(
            cell.ch(),
            cell.is_bold(),
            cell.is_italic(),
            cell.is_underline(),
            cell.fg(),
        )
    }
}

/// Normalized texture coordinates of a cached glyph, `(u1, v1)` top-left and
/// `(u2, v2)` bottom-right, all in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphUv {
    pub u1: f32,
    pub v1: f32,
    pub u2: f32,
    pub v2: f32,
}

/// Glyph cache backed by a shelf-packed surface.
#[derive(Debug)]
pub struct GlyphAtlas<R: Rasterizer = BuiltinRasterizer> {
    rasterizer: R,
    metrics: FontMetrics,
    surface: Surface,
    packer: ShelfPacker,
    cache: HashMap<GlyphKey, GlyphUv>,
    dirty: bool,
}

impl<R: Rasterizer> GlyphAtlas<R> {
    /// Create an empty `width` x `height` atlas.
    ///
    /// Fails with [`Error::AtlasTooSmall`] when either dimension is zero or a
    /// single cell from `rasterizer.metrics()` does not fit.
    pub fn new(width: u32, height: u32, rasterizer: R) -> Result<Self> {
        let metrics = rasterizer.metrics();
        let fits = metrics.cell_width > 0
            && metrics.cell_height > 0
            && metrics.cell_width <= width
            && metrics.cell_height <= height;
        if !fits {
            return Err(Error::AtlasTooSmall {
                width,
                height,
                cell_width: metrics.cell_width,
                cell_height: metrics.cell_height,
            });
        }

        debug!(
            "glyph atlas {width}x{height}, cell {}x{}",
            metrics.cell_width, metrics.cell_height
        );
        Ok(Self {
            rasterizer,
            metrics,
            surface: Surface::new(width, height),
            packer: ShelfPacker::new(width, height, metrics.cell_height),
            cache: HashMap::new(),
            dirty: false,
        })
    }

    /// Create an atlas sized by `config`.
    pub fn from_config(config: &AtlasConfig, rasterizer: R) -> Result<Self> {
        Self::new(config.width, config.height, rasterizer)
    }

    /// Texture coordinates for a glyph, rasterizing it on first use.
    ///
    /// Repeated calls with the same arguments return the same cached entry.
    /// Returns `None` only when the glyph is not cached and there is no room
    /// left for it.
    pub fn get_glyph(
        &mut self,
        ch: char,
        bold: bool,
        italic: bool,
        underline: bool,
        color: u32,
    ) -> Option<&GlyphUv> {
        self.glyph(GlyphKey::new(ch, bold, italic, underline, color))
    }

    /// [`GlyphAtlas::get_glyph`] taking a prepared key.
    #[allow(
        clippy::map_entry,
        reason = "insert() borrows &mut self for packing and rasterizing"
    )]
    pub fn glyph(&mut self, key: GlyphKey) -> Option<&GlyphUv> {
        if !self.cache.contains_key(&key) {
            let uv = self.insert(&key)?;
            self.cache.insert(key, uv);
        }
        self.cache.get(&key)
    }

    /// Whether there is no room left for another single-cell glyph.
    pub fn is_full(&self) -> bool {
        !self.packer.can_fit(self.metrics.cell_width)
    }

    /// Drop every cached glyph and wipe the surface.
    ///
    /// Coordinates handed out before the call are invalid afterwards.
    pub fn clear(&mut self) {
        debug!("glyph atlas cleared ({} glyphs evicted)", self.cache.len());
        self.cache.clear();
        self.packer.reset();
        self.surface.clear();
        self.dirty = false;
    }

    pub fn font_metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Horizontal advance of `ch` in pixels.
    pub fn measure_glyph_width(&self, ch: char) -> u32 {
        self.rasterizer.advance(ch)
    }

    /// The backing RGBA8 surface.
    pub fn texture(&self) -> &Surface {
        &self.surface
    }

    /// Whether the surface changed since the last [`GlyphAtlas::mark_clean`].
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledge that the surface has been uploaded.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Number of cached glyphs.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Pack, rasterize and blit a glyph that is not cached yet.
    fn insert(&mut self, key: &GlyphKey) -> Option<GlyphUv> {
        let cells = if Cell::is_wide_char(key.ch) { 2 } else { 1 };
        let w = self.metrics.cell_width * cells;
        let h = self.metrics.cell_height;

        let Some((x, y)) = self.packer.pack(w) else {
            debug!("glyph atlas full, cannot place {:?}", key.ch);
            return None;
        };

        let coverage = self.rasterizer.rasterize(key, w, h);
        self.surface.blit(x, y, w, &coverage, key.color);
        self.dirty = true;

        let (sw, sh) = (self.surface.width() as f32, self.surface.height() as f32);
        Some(GlyphUv {
            u1: x as f32 / sw,
            v1: y as f32 / sh,
            u2: (x + w) as f32 / sw,
            v2: (y + h) as f32 / sh,
        })
    }
}
