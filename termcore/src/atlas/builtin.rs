//! Font-free rasterizer.
//!
//! Block elements (U+2580-U+259F) and light/heavy box-drawing lines
//! (U+2500-U+254F) are drawn geometrically so they tile seamlessly between
//! neighbouring cells. Any other visible character becomes a hollow "tofu"
//! box. Hosts with a real font backend implement [`Rasterizer`] themselves.

use super::GlyphKey;
use super::raster::{FontMetrics, Rasterizer};

const OPAQUE: u8 = 0xFF;

/// Segment weights for U+2500..=U+254F, two bits per direction packed as
/// `left << 6 | right << 4 | up << 2 | down`. 1 = light, 2 = heavy.
/// Dashed variants are drawn solid.
#[rustfmt::skip]
const BOX_WEIGHTS: [u8; 80] = [
    0x50, 0xA0, 0x05, 0x0A, 0x50, 0xA0, 0x05, 0x0A, // U+2500
    0x50, 0xA0, 0x05, 0x0A, 0x11, 0x21, 0x12, 0x22, // U+2508
    0x41, 0x81, 0x42, 0x82, 0x14, 0x24, 0x18, 0x28, // U+2510
    0x44, 0x84, 0x48, 0x88, 0x15, 0x25, 0x19, 0x16, // U+2518
    0x1A, 0x29, 0x26, 0x2A, 0x45, 0x85, 0x49, 0x46, // U+2520
    0x4A, 0x89, 0x86, 0x8A, 0x51, 0x91, 0x61, 0xA1, // U+2528
    0x52, 0x92, 0x62, 0xA2, 0x54, 0x94, 0x64, 0xA4, // U+2530
    0x58, 0x98, 0x68, 0xA8, 0x55, 0x95, 0x65, 0xA5, // U+2538
    0x59, 0x56, 0x5A, 0x99, 0x69, 0x96, 0x66, 0xA9, // U+2540
    0xA6, 0x9A, 0x6A, 0xAA, 0x50, 0xA0, 0x05, 0x0A, // U+2548
];

/// Quadrant masks for U+2596..=U+259F: bit 3 = top-left, 2 = top-right,
/// 1 = bottom-left, 0 = bottom-right.
const QUADRANTS: [u8; 10] = [
    0b0010, 0b0001, 0b1000, 0b1011, 0b1001, 0b1110, 0b1101, 0b0100, 0b0110, 0b0111,
];

/// Geometric rasterizer that needs no font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinRasterizer {
    metrics: FontMetrics,
}

impl BuiltinRasterizer {
    /// Rasterizer for cells of the given pixel size (each at least 1).
    pub fn new(cell_width: u32, cell_height: u32) -> Self {
        let cell_width = cell_width.max(1);
        let cell_height = cell_height.max(1);
        let baseline = cell_height * 4 / 5;
        let underline_thickness = (cell_height / 16).max(1);
        let underline_position =
            (baseline + 1).min(cell_height.saturating_sub(underline_thickness));
        Self {
            metrics: FontMetrics {
                cell_width,
                cell_height,
                baseline,
                underline_position,
                underline_thickness,
            },
        }
    }

    fn box_drawing(mask: &mut Mask, ch: char, bold: bool) {
        let Some(&bits) = BOX_WEIGHTS.get((ch as u32 - 0x2500) as usize) else {
            return;
        };
        let (w, h) = (mask.width, mask.height);
        let thin = (w / 8).max(1) + u32::from(bold);
        let thick = (thin * 3).min((w / 2).max(thin));
        let (cx, cy) = (w / 2, h / 2);

        let stroke = |shift: u32| match (bits >> shift) & 0b11 {
            0 => None,
            1 => Some(thin),
            _ => Some(thick),
        };
        // Each arm runs from the cell edge to the far side of the center line.
        if let Some(t) = stroke(6) {
            mask.fill(0, cy.saturating_sub(t / 2), cx + t - t / 2, t, OPAQUE);
        }
        if let Some(t) = stroke(4) {
            let x0 = cx.saturating_sub(t / 2);
            mask.fill(x0, cy.saturating_sub(t / 2), w - x0, t, OPAQUE);
        }
        if let Some(t) = stroke(2) {
            mask.fill(cx.saturating_sub(t / 2), 0, t, cy + t - t / 2, OPAQUE);
        }
        if let Some(t) = stroke(0) {
            let y0 = cy.saturating_sub(t / 2);
            mask.fill(cx.saturating_sub(t / 2), y0, t, h - y0, OPAQUE);
        }
    }

    fn block_element(mask: &mut Mask, ch: char) {
        let (w, h) = (mask.width, mask.height);
        let eighths = |len: u32, n: u32| (len * n + 4) / 8;
        match ch {
            '\u{2580}' => mask.fill(0, 0, w, h.div_ceil(2), OPAQUE),
            '\u{2581}'..='\u{2587}' => {
                let bh = eighths(h, ch as u32 - 0x2580);
                mask.fill(0, h - bh, w, bh, OPAQUE);
            }
            '\u{2588}' => mask.fill(0, 0, w, h, OPAQUE),
            '\u{2589}'..='\u{258F}' => mask.fill(0, 0, eighths(w, 0x2590 - ch as u32), h, OPAQUE),
            '\u{2590}' => {
                let hw = w.div_ceil(2);
                mask.fill(w - hw, 0, hw, h, OPAQUE);
            }
            '\u{2591}'..='\u{2593}' => {
                let alpha = (ch as u32 - 0x2590) * 0x40;
                mask.fill(0, 0, w, h, alpha as u8);
            }
            '\u{2594}' => mask.fill(0, 0, w, eighths(h, 1), OPAQUE),
            '\u{2595}' => {
                let bw = eighths(w, 1);
                mask.fill(w - bw, 0, bw, h, OPAQUE);
            }
            '\u{2596}'..='\u{259F}' => {
                let quad = QUADRANTS[(ch as u32 - 0x2596) as usize];
                let (hw, hh) = (w.div_ceil(2), h.div_ceil(2));
                if quad & 0b1000 != 0 {
                    mask.fill(0, 0, hw, hh, OPAQUE);
                }
                if quad & 0b0100 != 0 {
                    mask.fill(hw, 0, w - hw, hh, OPAQUE);
                }
                if quad & 0b0010 != 0 {
                    mask.fill(0, hh, hw, h - hh, OPAQUE);
                }
                if quad & 0b0001 != 0 {
                    mask.fill(hw, hh, w - hw, h - hh, OPAQUE);
                }
            }
            _ => {}
        }
    }

    fn tofu(&self, mask: &mut Mask, bold: bool) {
        let (w, h) = (mask.width, mask.height);
        let stroke = (w / 8).max(1) + u32::from(bold);
        let (x0, x1) = if w >= 4 { (1, w - 1) } else { (0, w) };
        let y0 = h / 8;
        let y1 = self.metrics.baseline.clamp(y0 + 1, h);
        let (bw, bh) = (x1 - x0, y1 - y0);

        mask.fill(x0, y0, bw, stroke, OPAQUE);
        mask.fill(x0, y1.saturating_sub(stroke), bw, stroke, OPAQUE);
        mask.fill(x0, y0, stroke, bh, OPAQUE);
        mask.fill(x1.saturating_sub(stroke), y0, stroke, bh, OPAQUE);
    }
}

impl Default for BuiltinRasterizer {
    /// 8x16 cells.
    fn default() -> Self {
        Self::new(8, 16)
    }
}

impl Rasterizer for BuiltinRasterizer {
    fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn rasterize(&self, key: &GlyphKey, width: u32, height: u32) -> Vec<u8> {
        let mut mask = Mask::new(width, height);
        if mask.data.is_empty() {
            return mask.data;
        }
        match key.ch {
            '\u{2500}'..='\u{254F}' => Self::box_drawing(&mut mask, key.ch, key.bold),
            '\u{2580}'..='\u{259F}' => Self::block_element(&mut mask, key.ch),
            ch if ch.is_whitespace() || ch.is_control() => {}
            _ => {
                self.tofu(&mut mask, key.bold);
                if key.italic {
                    mask.shear();
                }
            }
        }
        if key.underline {
            let thickness = self.metrics.underline_thickness + u32::from(key.bold);
            mask.fill(0, self.metrics.underline_position, width, thickness, OPAQUE);
        }
        mask.data
    }
}

/// Alpha coverage buffer with clipped rectangle fills.
struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Mask {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    fn fill(&mut self, x: u32, y: u32, w: u32, h: u32, alpha: u8) {
        let x1 = x.saturating_add(w).min(self.width);
        let y1 = y.saturating_add(h).min(self.height);
        if x >= x1 {
            return;
        }
        for row in y..y1 {
            let start = (row * self.width) as usize;
            for px in &mut self.data[start + x as usize..start + x1 as usize] {
                *px = (*px).max(alpha);
            }
        }
    }

    /// Slant rows to the right, increasingly toward the top.
    fn shear(&mut self) {
        let w = self.width as usize;
        for row in 0..self.height {
            let shift = ((self.height - 1 - row) * self.width / (3 * self.height)) as usize;
            if shift == 0 {
                continue;
            }
            let start = row as usize * w;
            let line = &mut self.data[start..start + w];
            line.copy_within(..w - shift, shift);
            line[..shift].fill(0);
        }
    }
}
