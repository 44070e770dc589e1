use crate::buffer::TerminalBuffer;
use crate::cell::{Cell, CellFlags};

/// Helper: create a buffer and print `text` with the default attribute.
fn buffer_with_text(cols: usize, rows: usize, text: &str) -> TerminalBuffer {
    let mut buf = TerminalBuffer::new(cols, rows);
    let attr = Cell::default();
    for ch in text.chars() {
        buf.write_char(ch, &attr, true);
    }
    buf
}

fn ch_at(buf: &TerminalBuffer, x: usize, y: usize) -> char {
    buf.get_cell(x, y).unwrap().ch()
}

// --- write_char ---

#[test]
fn write_char_writes_and_advances() {
    let buf = buffer_with_text(80, 24, "A");
    assert_eq!(ch_at(&buf, 0, 0), 'A');
    assert_eq!(buf.cursor_x(), 1);
    assert_eq!(buf.cursor_y(), 0);
}

#[test]
fn write_char_applies_attribute() {
    let mut buf = TerminalBuffer::new(10, 2);
    let flags = CellFlags::BOLD | CellFlags::UNDERLINE;
    let attr = Cell::new(' ', 0xFF_0000, 0x00_00FF, flags, None);
    buf.write_char('x', &attr, true);

    let cell = buf.get_cell(0, 0).unwrap();
    assert_eq!(cell.ch(), 'x');
    assert_eq!(cell.fg(), 0xFF_0000);
    assert_eq!(cell.bg(), 0x00_00FF);
    assert!(cell.is_bold());
    assert!(cell.is_underline());
}

#[test]
fn last_column_sets_wrap_pending_without_leaving_grid() {
    let buf = buffer_with_text(5, 3, "ABCDE");
    assert_eq!(buf.cursor_x(), 4);
    assert_eq!(buf.cursor_y(), 0);
    assert!(buf.cursor().is_wrap_pending());
}

#[test]
fn pending_wrap_moves_to_next_line() {
    let buf = buffer_with_text(5, 3, "ABCDEF");
    assert_eq!(buf.row_text(0).unwrap(), "ABCDE");
    assert_eq!(ch_at(&buf, 0, 1), 'F');
    assert_eq!((buf.cursor_x(), buf.cursor_y()), (1, 1));
}

#[test]
fn wrap_at_bottom_scrolls() {
    let buf = buffer_with_text(3, 2, "abcdefg");
    assert_eq!(buf.row_text(0).unwrap(), "def");
    assert_eq!(buf.row_text(1).unwrap(), "g");
    assert_eq!(buf.scrollback().len(), 1);
    assert_eq!(buf.scrollback().get(0).unwrap().text(), "abc");
}

#[test]
fn no_auto_wrap_overwrites_last_column() {
    let mut buf = TerminalBuffer::new(3, 2);
    let attr = Cell::default();
    for ch in "abcXYZ".chars() {
        buf.write_char(ch, &attr, false);
    }
    assert_eq!(buf.row_text(0).unwrap(), "abZ");
    assert_eq!(buf.row_text(1).unwrap(), "");
    assert_eq!((buf.cursor_x(), buf.cursor_y()), (2, 0));
}

#[test]
fn wide_char_writes_pair() {
    let buf = buffer_with_text(80, 24, "\u{597d}");
    let head = buf.get_cell(0, 0).unwrap();
    assert_eq!(head.ch(), '\u{597d}');
    assert_eq!(head.width(), 2);
    let tail = buf.get_cell(1, 0).unwrap();
    assert_eq!(tail.ch(), ' ');
    assert_eq!(tail.width(), 1);
    assert_eq!(buf.cursor_x(), 2);
}

#[test]
fn wide_char_at_last_column_wraps_early() {
    let buf = buffer_with_text(5, 3, "AAAA\u{597d}");
    assert_eq!(buf.row_text(0).unwrap(), "AAAA");
    assert_eq!(ch_at(&buf, 0, 1), '\u{597d}');
    assert_eq!((buf.cursor_x(), buf.cursor_y()), (2, 1));
}

#[test]
fn wide_char_filling_row_sets_wrap_pending() {
    let buf = buffer_with_text(4, 2, "AB\u{597d}");
    assert_eq!(buf.cursor_x(), 3);
    assert!(buf.cursor().is_wrap_pending());
}

#[test]
fn wide_char_on_single_column_grid_is_dropped() {
    let buf = buffer_with_text(1, 2, "\u{597d}");
    assert!(buf.get_cell(0, 0).unwrap().is_blank());
    assert_eq!(buf.cursor_x(), 0);
}

#[test]
fn overwrite_continuation_clears_wide_char() {
    let mut buf = buffer_with_text(80, 24, "\u{597d}");
    buf.set_cursor(1, 0);
    buf.write_char('X', &Cell::default(), true);
    assert_eq!(ch_at(&buf, 0, 0), ' ');
    assert_eq!(buf.get_cell(0, 0).unwrap().width(), 1);
    assert_eq!(ch_at(&buf, 1, 0), 'X');
}

#[test]
fn overwrite_wide_char_clears_continuation() {
    let mut buf = buffer_with_text(80, 24, "\u{597d}Z");
    buf.set_cursor(0, 0);
    buf.write_char('Y', &Cell::default(), true);
    assert_eq!(buf.row_text(0).unwrap(), "Y Z");
}

#[test]
fn write_marks_row_dirty() {
    let mut buf = TerminalBuffer::new(10, 5);
    buf.clear_dirty();
    buf.set_cursor(0, 3);
    buf.write_char('q', &Cell::default(), true);
    let regions = buf.dirty_regions();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].y, 3);
    assert_eq!(regions[0].height, 1);
}

// --- erase ---

#[test]
fn clear_line_from_cursor() {
    let mut buf = buffer_with_text(10, 2, "ABCDEFGHIJ");
    buf.set_cursor(3, 0);
    buf.clear_line_from_cursor();
    assert_eq!(buf.row_text(0).unwrap(), "ABC");
}

#[test]
fn clear_line_to_cursor_is_inclusive() {
    let mut buf = buffer_with_text(10, 2, "ABCDEFGHIJ");
    buf.set_cursor(3, 0);
    buf.clear_line_to_cursor();
    assert_eq!(buf.row_text(0).unwrap(), "    EFGHIJ");
}

#[test]
fn clear_line_whole_row() {
    let mut buf = buffer_with_text(5, 2, "ABCDEFG");
    buf.set_cursor(2, 0);
    buf.clear_line();
    assert_eq!(buf.row_text(0).unwrap(), "");
    assert_eq!(buf.row_text(1).unwrap(), "FG");
}

#[test]
fn erase_resets_to_default_cell() {
    let mut buf = TerminalBuffer::new(5, 1);
    let attr = Cell::new(' ', 0x12_3456, 0x65_4321, CellFlags::INVERSE, None);
    buf.write_char('A', &attr, true);
    buf.set_cursor(0, 0);
    buf.clear_line();
    assert_eq!(buf.get_cell(0, 0), Some(&Cell::default()));
}

#[test]
fn clear_screen_keeps_cursor() {
    let mut buf = buffer_with_text(5, 3, "ABCDEFGHIJK");
    let (x, y) = (buf.cursor_x(), buf.cursor_y());
    buf.clear_screen();
    for y in 0..3 {
        assert!(buf.row(y).unwrap().is_blank());
    }
    assert_eq!((buf.cursor_x(), buf.cursor_y()), (x, y));
}

#[test]
fn clear_from_cursor_erases_below() {
    let mut buf = buffer_with_text(3, 3, "abcdefghi");
    buf.set_cursor(1, 1);
    buf.clear_from_cursor();
    assert_eq!(buf.row_text(0).unwrap(), "abc");
    assert_eq!(buf.row_text(1).unwrap(), "d");
    assert_eq!(buf.row_text(2).unwrap(), "");
}

#[test]
fn clear_to_cursor_erases_above() {
    let mut buf = buffer_with_text(3, 3, "abcdefghi");
    buf.set_cursor(1, 1);
    buf.clear_to_cursor();
    assert_eq!(buf.row_text(0).unwrap(), "");
    assert_eq!(buf.row_text(1).unwrap(), "  f");
    assert_eq!(buf.row_text(2).unwrap(), "ghi");
}

#[test]
fn clear_scrollback_leaves_screen() {
    let mut buf = buffer_with_text(3, 2, "abcdefghi");
    assert_eq!(buf.scrollback().len(), 1);
    buf.clear_scrollback();
    assert!(buf.scrollback().is_empty());
    assert_eq!(buf.row_text(0).unwrap(), "def");
}

#[test]
fn erase_chars_does_not_shift() {
    let mut buf = buffer_with_text(10, 1, "ABCDEFGHIJ");
    buf.set_cursor(2, 0);
    buf.erase_chars(3);
    assert_eq!(buf.row_text(0).unwrap(), "AB   FGHIJ");
}

#[test]
fn erase_chars_clamps_to_row_end() {
    let mut buf = buffer_with_text(5, 1, "ABCDE");
    buf.set_cursor(3, 0);
    buf.erase_chars(usize::MAX);
    assert_eq!(buf.row_text(0).unwrap(), "ABC");
}

#[test]
fn erase_over_continuation_blanks_wide_head() {
    let mut buf = buffer_with_text(10, 1, "a\u{597d}b");
    buf.set_cursor(2, 0);
    buf.erase_chars(1);
    assert_eq!(buf.row_text(0).unwrap(), "a  b");
    assert_eq!(buf.get_cell(1, 0).unwrap().width(), 1);
}

// --- insert / delete ---

#[test]
fn insert_blank_shifts_right() {
    let mut buf = buffer_with_text(5, 1, "ABCD");
    buf.set_cursor(1, 0);
    buf.insert_blank(2);
    assert_eq!(buf.row_text(0).unwrap(), "A  BC");
}

#[test]
fn insert_blank_past_edge_clears_tail() {
    let mut buf = buffer_with_text(5, 1, "ABCDE");
    buf.set_cursor(2, 0);
    buf.insert_blank(100);
    assert_eq!(buf.row_text(0).unwrap(), "AB");
}

#[test]
fn insert_blank_drops_split_wide_char() {
    let mut buf = buffer_with_text(4, 1, "a\u{597d}");
    buf.set_cursor(0, 0);
    buf.insert_blank(2);
    // The wide char lands on the last column without room for its tail.
    assert_eq!(buf.get_cell(3, 0), Some(&Cell::default()));
}

#[test]
fn delete_chars_shifts_left() {
    let mut buf = buffer_with_text(5, 1, "ABCDE");
    buf.set_cursor(1, 0);
    buf.delete_chars(2);
    assert_eq!(buf.row_text(0).unwrap(), "ADE");
}

#[test]
fn delete_zero_chars_is_noop() {
    let mut buf = buffer_with_text(5, 1, "ABCDE");
    buf.set_cursor(1, 0);
    buf.delete_chars(0);
    buf.insert_blank(0);
    assert_eq!(buf.row_text(0).unwrap(), "ABCDE");
}
