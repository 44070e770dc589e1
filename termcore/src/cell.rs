//! Terminal cell type.
//!
//! A `Cell` represents one character position in the terminal grid: one
//! display character, a 24-bit foreground and background color, an 8-bit
//! attribute set, and a display width of 1 or 2. Cells are plain values
//! stored inline in each row; the write path mutates them in place through
//! [`Cell::copy_from`] and [`Cell::assign`] instead of building new ones.

use bitflags::bitflags;

/// Default foreground color (white).
pub const DEFAULT_FG: u32 = 0xFF_FFFF;

/// Default background color (black).
pub const DEFAULT_BG: u32 = 0x00_0000;

/// Mask applied to every color stored in a cell.
const COLOR_MASK: u32 = 0xFF_FFFF;

bitflags! {
    /// Per-cell SGR attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        const BOLD          = 1 << 0;
        const DIM           = 1 << 1;
        const ITALIC        = 1 << 2;
        const UNDERLINE     = 1 << 3;
        const BLINK         = 1 << 4;
        const INVERSE       = 1 << 5;
        const INVISIBLE     = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

impl Default for CellFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// One character position in the terminal grid.
///
/// Fields are private so the constructor's sanitizing guarantees hold for
/// the lifetime of the value: `ch` is never a control character, colors
/// never exceed 24 bits, and `width` is always 1 or 2.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    ch: char,
    fg: u32,
    bg: u32,
    flags: CellFlags,
    width: u8,
}

const _: () = assert!(size_of::<Cell>() <= 16);

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            flags: CellFlags::empty(),
            width: 1,
        }
    }
}

/// Generate a `set_x(bool)` / `is_x()` pair per attribute flag.
macro_rules! flag_accessors {
    ($($set:ident, $is:ident => $flag:ident;)*) => {
        $(
            #[doc = concat!("Set or clear the `", stringify!($flag), "` attribute.")]
            #[inline]
            pub fn $set(&mut self, on: bool) {
                self.flags.set(CellFlags::$flag, on);
            }

            #[doc = concat!("Whether the `", stringify!($flag), "` attribute is set.")]
            #[inline]
            pub fn $is(&self) -> bool {
                self.flags.contains(CellFlags::$flag)
            }
        )*
    };
}

impl Cell {
    /// Build a cell, sanitizing every input.
    ///
    /// Control characters become a space, colors are masked to 24 bits, and
    /// the width is derived from `ch` when `width` is `None`. Explicit widths
    /// are clamped into `1..=2`.
    pub fn new(ch: char, fg: u32, bg: u32, flags: CellFlags, width: Option<u8>) -> Self {
        let ch = sanitize(ch);
        Self {
            ch,
            fg: fg & COLOR_MASK,
            bg: bg & COLOR_MASK,
            flags,
            width: width.map_or_else(|| char_width(ch), |w| w.clamp(1, 2)),
        }
    }

    /// Default cell carrying only the given background (erase with color).
    pub fn with_bg(bg: u32) -> Self {
        Self {
            bg: bg & COLOR_MASK,
            ..Self::default()
        }
    }

    /// The displayed character.
    #[inline]
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Foreground color as `0xRRGGBB`.
    #[inline]
    pub fn fg(&self) -> u32 {
        self.fg
    }

    /// Background color as `0xRRGGBB`.
    #[inline]
    pub fn bg(&self) -> u32 {
        self.bg
    }

    /// Attribute flags.
    #[inline]
    pub fn flags(&self) -> CellFlags {
        self.flags
    }

    /// Display width in columns (1 or 2).
    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Replace the character, re-deriving the width.
    pub fn set_char(&mut self, ch: char) {
        self.ch = sanitize(ch);
        self.width = char_width(self.ch);
    }

    pub fn set_fg(&mut self, fg: u32) {
        self.fg = fg & COLOR_MASK;
    }

    pub fn set_bg(&mut self, bg: u32) {
        self.bg = bg & COLOR_MASK;
    }

    pub fn set_flags(&mut self, flags: CellFlags) {
        self.flags = flags;
    }

    flag_accessors! {
        set_bold, is_bold => BOLD;
        set_dim, is_dim => DIM;
        set_italic, is_italic => ITALIC;
        set_underline, is_underline => UNDERLINE;
        set_blink, is_blink => BLINK;
        set_inverse, is_inverse => INVERSE;
        set_invisible, is_invisible => INVISIBLE;
        set_strikethrough, is_strikethrough => STRIKETHROUGH;
    }

    /// Overwrite this cell with `other` without allocating.
    #[inline]
    pub fn copy_from(&mut self, other: &Self) {
        self.ch = other.ch;
        self.fg = other.fg;
        self.bg = other.bg;
        self.flags = other.flags;
        self.width = other.width;
    }

    /// Write `ch` styled with the colors and flags of `attr`, in place.
    ///
    /// This is the per-character print path.
    #[inline]
    pub fn assign(&mut self, ch: char, attr: &Self) {
        self.set_char(ch);
        self.fg = attr.fg;
        self.bg = attr.bg;
        self.flags = attr.flags;
    }

    /// Restore the default character, colors, flags, and width.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the cell is visually empty: a space with default colors and
    /// no attributes.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `ch` occupies two columns.
    ///
    /// Covers CJK Unified Ideographs (with extension A), the common emoji
    /// blocks, and the CJK fullwidth forms. Everything else is one column.
    pub fn is_wide_char(ch: char) -> bool {
        matches!(
            ch,
            '\u{3400}'..='\u{4DBF}'
                | '\u{4E00}'..='\u{9FFF}'
                | '\u{1F300}'..='\u{1F64F}'
                | '\u{1F900}'..='\u{1F9FF}'
                | '\u{FF00}'..='\u{FF60}'
                | '\u{FFE0}'..='\u{FFE6}'
        )
    }
}

/// Replace C0/C1 control characters and DEL with a space.
fn sanitize(ch: char) -> char {
    match ch {
        '\u{0}'..='\u{1F}' | '\u{7F}'..='\u{9F}' => ' ',
        _ => ch,
    }
}

fn char_width(ch: char) -> u8 {
    if Cell::is_wide_char(ch) { 2 } else { 1 }
}
