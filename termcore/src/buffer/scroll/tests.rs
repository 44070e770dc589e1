use crate::buffer::TerminalBuffer;
use crate::cell::Cell;

/// Helper: a buffer whose row `y` starts with the letter `b'A' + y`.
fn lettered(cols: usize, rows: usize) -> TerminalBuffer {
    let mut buf = TerminalBuffer::new(cols, rows);
    for y in 0..rows {
        buf.set_cursor(0, y);
        buf.write_char(char::from(b'A' + y as u8), &Cell::default(), true);
    }
    buf.set_cursor(0, 0);
    buf
}

fn first_chars(buf: &TerminalBuffer) -> String {
    (0..buf.rows())
        .map(|y| buf.get_cell(0, y).unwrap().ch())
        .collect()
}

// --- scroll_up ---

#[test]
fn scroll_up_moves_rows_into_scrollback() {
    let mut buf = lettered(10, 3);
    buf.scroll_up(1);
    assert_eq!(first_chars(&buf), "BC ");
    assert_eq!(buf.scrollback().len(), 1);
    assert_eq!(buf.scrollback().get(0).unwrap().text(), "A");
}

#[test]
fn scroll_up_grows_scrollback_by_count() {
    let mut buf = lettered(10, 4);
    buf.scroll_up(3);
    assert_eq!(first_chars(&buf), "D   ");
    let history: Vec<_> = buf.scrollback().iter().map(|r| r.text()).collect();
    assert_eq!(history, ["A", "B", "C"]);
}

#[test]
fn scroll_up_past_height_pushes_blank_surplus() {
    let mut buf = lettered(5, 2);
    buf.scroll_up(5);
    assert_eq!(buf.scrollback().len(), 5);
    assert_eq!(buf.scrollback().get(0).unwrap().text(), "A");
    assert_eq!(buf.scrollback().get(1).unwrap().text(), "B");
    assert!(buf.scrollback().get(4).unwrap().is_blank());
    assert!(buf.row(0).unwrap().is_blank());
    assert!(buf.row(1).unwrap().is_blank());
}

#[test]
fn scroll_up_respects_scrollback_capacity() {
    let mut buf = TerminalBuffer::with_scrollback(5, 3, 2).unwrap();
    for y in 0..3 {
        buf.set_cursor(0, y);
        buf.write_char(char::from(b'a' + y as u8), &Cell::default(), true);
    }
    buf.scroll_up(3);
    assert_eq!(buf.scrollback().len(), 2);
    assert_eq!(buf.scrollback().get(0).unwrap().text(), "b");
    assert_eq!(buf.scrollback().get(1).unwrap().text(), "c");
    // Rows recycled from the evicted history come back blank.
    assert!(buf.row(2).unwrap().is_blank());
}

#[test]
fn scroll_up_zero_is_noop() {
    let mut buf = lettered(5, 3);
    buf.clear_dirty();
    buf.scroll_up(0);
    assert_eq!(first_chars(&buf), "ABC");
    assert!(!buf.is_dirty());
}

#[test]
fn alternate_screen_scroll_never_touches_scrollback() {
    let mut buf = TerminalBuffer::new(5, 3);
    buf.use_alternate_screen();
    buf.write_char('x', &Cell::default(), true);
    buf.scroll_up(2);
    buf.scroll_up(10);
    assert!(buf.scrollback().is_empty());
    assert!(buf.row(0).unwrap().is_blank());
}

#[test]
fn scroll_marks_fully_dirty() {
    let mut buf = lettered(5, 3);
    buf.clear_dirty();
    buf.scroll_up(1);
    assert_eq!(buf.dirty_regions().len(), 1);
    assert_eq!(buf.dirty_regions()[0].height, 3);

    buf.clear_dirty();
    buf.scroll_down(1);
    assert_eq!(buf.dirty_regions()[0].height, 3);
}

// --- scroll_down ---

#[test]
fn scroll_down_inserts_blank_top() {
    let mut buf = lettered(10, 3);
    buf.scroll_down(1);
    assert_eq!(first_chars(&buf), " AB");
    assert!(buf.scrollback().is_empty());
}

#[test]
fn scroll_down_count_clamped_to_height() {
    let mut buf = lettered(10, 3);
    buf.scroll_down(50);
    assert_eq!(first_chars(&buf), "   ");
}

#[test]
fn scroll_up_then_down_leaves_blank_bottom() {
    let mut buf = lettered(10, 3);
    buf.scroll_up(1);
    buf.scroll_down(1);
    assert_eq!(first_chars(&buf), " BC");
}

// --- insert_lines / delete_lines ---

#[test]
fn insert_lines_at_cursor() {
    let mut buf = lettered(10, 4);
    buf.set_cursor(3, 1);
    buf.insert_lines(2);
    assert_eq!(first_chars(&buf), "A  B");
    assert_eq!(buf.cursor_x(), 0);
}

#[test]
fn delete_lines_at_cursor() {
    let mut buf = lettered(10, 4);
    buf.set_cursor(0, 1);
    buf.delete_lines(2);
    assert_eq!(first_chars(&buf), "AD  ");
    assert!(buf.scrollback().is_empty());
}

#[test]
fn delete_lines_more_than_remaining() {
    let mut buf = lettered(10, 4);
    buf.set_cursor(0, 2);
    buf.delete_lines(100);
    assert_eq!(first_chars(&buf), "AB  ");
}

#[test]
fn insert_lines_marks_rows_from_cursor_dirty() {
    let mut buf = lettered(10, 4);
    buf.clear_dirty();
    buf.set_cursor(0, 2);
    buf.insert_lines(1);
    let regions = buf.dirty_regions();
    assert_eq!(regions.len(), 1);
    assert_eq!((regions[0].y, regions[0].height), (2, 2));
}
