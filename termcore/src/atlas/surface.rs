//! CPU-side RGBA8 backing surface for the glyph atlas.

use crate::color::channels;

/// Row-major RGBA8 pixel buffer, 4 bytes per pixel.
///
/// Glyph slots are written as the glyph color with the rasterized coverage in
/// the alpha channel; untouched pixels are fully transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, suitable for a texture upload.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        self.pixels[i..i + 4].try_into().ok()
    }

    /// Make every pixel transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Copy an alpha `coverage` mask `width` pixels wide to `(x, y)`, tinted
    /// with `color`. Parts falling outside the surface are dropped.
    pub(super) fn blit(&mut self, x: u32, y: u32, width: u32, coverage: &[u8], color: u32) {
        if width == 0 {
            return;
        }
        let (r, g, b) = channels(color);
        for (dy, line) in (0u32..).zip(coverage.chunks(width as usize)) {
            let py = y + dy;
            if py >= self.height {
                break;
            }
            for (dx, &alpha) in (0u32..).zip(line) {
                let px = x + dx;
                if px >= self.width {
                    break;
                }
                let i = self.offset(px, py);
                self.pixels[i..i + 4].copy_from_slice(&[r, g, b, alpha]);
            }
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}
