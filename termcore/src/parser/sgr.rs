//! SGR (Select Graphic Rendition) handling.
//!
//! Applies `CSI ... m` parameters to the pen cell the parser prints with.

use log::trace;

use crate::cell::{Cell, CellFlags, DEFAULT_BG, DEFAULT_FG};
use crate::color::{ANSI_COLORS, indexed_color, rgb};

/// Apply SGR `params` to `attr` in order.
///
/// An empty list is the same as `0`. Extended colors (`38`/`48`) consume
/// their sub-parameters; an incomplete or out-of-range one is dropped.
pub(super) fn apply(attr: &mut Cell, params: &[u16]) {
    if params.is_empty() {
        reset(attr);
        return;
    }

    let mut iter = params.iter().copied();
    while let Some(param) = iter.next() {
        match param {
            0 => reset(attr),
            1 => attr.set_bold(true),
            2 => attr.set_dim(true),
            3 => attr.set_italic(true),
            4 | 21 => attr.set_underline(true),
            5 | 6 => attr.set_blink(true),
            7 => attr.set_inverse(true),
            8 => attr.set_invisible(true),
            9 => attr.set_strikethrough(true),
            22 => {
                attr.set_bold(false);
                attr.set_dim(false);
            }
            23 => attr.set_italic(false),
            24 => attr.set_underline(false),
            25 => attr.set_blink(false),
            27 => attr.set_inverse(false),
            28 => attr.set_invisible(false),
            29 => attr.set_strikethrough(false),
            30..=37 => attr.set_fg(ANSI_COLORS[usize::from(param - 30)]),
            38 => {
                if let Some(color) = extended_color(&mut iter) {
                    attr.set_fg(color);
                }
            }
            39 => attr.set_fg(DEFAULT_FG),
            40..=47 => attr.set_bg(ANSI_COLORS[usize::from(param - 40)]),
            48 => {
                if let Some(color) = extended_color(&mut iter) {
                    attr.set_bg(color);
                }
            }
            49 => attr.set_bg(DEFAULT_BG),
            90..=97 => attr.set_fg(ANSI_COLORS[usize::from(param - 90) + 8]),
            100..=107 => attr.set_bg(ANSI_COLORS[usize::from(param - 100) + 8]),
            _ => trace!("unhandled SGR parameter {param}"),
        }
    }
}

/// Restore the default colors and clear every flag.
fn reset(attr: &mut Cell) {
    attr.set_fg(DEFAULT_FG);
    attr.set_bg(DEFAULT_BG);
    attr.set_flags(CellFlags::empty());
}

/// Parse the tail of a `38`/`48` sequence: `5;n` or `2;r;g;b`.
fn extended_color(iter: &mut impl Iterator<Item = u16>) -> Option<u32> {
    match iter.next()? {
        5 => {
            let index = iter.next()?;
            u8::try_from(index).ok().map(indexed_color)
        }
        2 => {
            let r = channel(iter.next()?);
            let g = channel(iter.next()?);
            let b = channel(iter.next()?);
            Some(rgb(r, g, b))
        }
        kind => {
            trace!("unhandled extended color kind {kind}");
            None
        }
    }
}

fn channel(value: u16) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
