//! Color helpers for terminal emulation.
//!
//! Colors are plain `0xRRGGBB` integers. The `palette` module maps xterm
//! 256-color indices onto them.

pub mod palette;

pub use palette::{ANSI_COLORS, cube_color, grayscale_color, indexed_color};

/// Pack 8-bit channels into a `0xRRGGBB` value.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split a `0xRRGGBB` value into its channels.
#[inline]
pub const fn channels(color: u32) -> (u8, u8, u8) {
    ((color >> 16) as u8, (color >> 8) as u8, color as u8)
}
