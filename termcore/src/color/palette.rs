//! xterm 256-color palette.
//!
//! Layout: 0–15 ANSI, 16–231 6×6×6 cube, 232–255 grayscale ramp. Only the
//! first 16 entries are a table; the rest are pure functions of the index.

use super::rgb;

/// Standard ANSI colors (indices 0–15).
pub const ANSI_COLORS: [u32; 16] = [
    0x00_0000, // 0  Black
    0xCC_0000, // 1  Red
    0x4E_9A06, // 2  Green
    0xC4_A000, // 3  Yellow
    0x34_65A4, // 4  Blue
    0x75_507B, // 5  Magenta
    0x06_989A, // 6  Cyan
    0xD3_D7CF, // 7  White
    0x55_5753, // 8  Bright Black
    0xEF_2929, // 9  Bright Red
    0x8A_E234, // 10 Bright Green
    0xFC_E94F, // 11 Bright Yellow
    0x72_9FCF, // 12 Bright Blue
    0xAD_7FA8, // 13 Bright Magenta
    0x34_E2E2, // 14 Bright Cyan
    0xEE_EEEC, // 15 Bright White
];

/// Resolve any 256-color index to `0xRRGGBB`.
pub const fn indexed_color(index: u8) -> u32 {
    match index {
        0..=15 => ANSI_COLORS[index as usize],
        16..=231 => cube_color(index),
        _ => grayscale_color(index),
    }
}

/// 6×6×6 cube entry for indices 16–231, `51 * component` per channel.
///
/// Indices outside the cube are clamped to its ends.
pub const fn cube_color(index: u8) -> u32 {
    let i = if index < 16 {
        0
    } else if index > 231 {
        215
    } else {
        index - 16
    };
    let r = i / 36;
    let g = (i / 6) % 6;
    let b = i % 6;
    rgb(r * 51, g * 51, b * 51)
}

/// Grayscale ramp entry for indices 232–255: `8 + 10 * step`.
///
/// Indices below the ramp are clamped to its first step.
pub const fn grayscale_color(index: u8) -> u32 {
    let step = if index < 232 { 0 } else { index - 232 };
    let v = 8 + step * 10;
    rgb(v, v, v)
}
