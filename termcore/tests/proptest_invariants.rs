//! Property-based invariants that must hold for any input.
//!
//! 1. The parser never panics and the cursor never leaves the grid.
//! 2. Splitting the stream anywhere produces the same screen.
//! 3. Alternate-screen scrolling never feeds scrollback.
//! 4. Cell access and the scrollback ring keep their contracts.

use proptest::prelude::*;
use termcore::{Cell, CellFlags, CircularBuffer, Parser, Row, TerminalBuffer};

// --- helpers ---

/// Small enough for fast runs, large enough to hit wrap and scroll edges.
fn dims() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=40, 1usize..=20)
}

/// Bytes biased toward escape-sequence structure.
fn vt_bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    let byte = prop_oneof![
        4 => any::<u8>(),
        2 => Just(0x1B_u8),
        2 => prop::sample::select(b"[];?0123456789Hm\x07\n\r\t".to_vec()),
    ];
    proptest::collection::vec(byte, 0..max)
}

/// Everything observable about the screen.
fn snapshot(buf: &TerminalBuffer) -> (Vec<Row>, usize, usize, bool, bool, usize) {
    let rows = (0..buf.rows())
        .filter_map(|y| buf.row(y).cloned())
        .collect();
    (
        rows,
        buf.cursor_x(),
        buf.cursor_y(),
        buf.is_cursor_visible(),
        buf.is_alternate_screen(),
        buf.scrollback().len(),
    )
}

// --- parser robustness ---

proptest! {
    #[test]
    fn parser_never_panics_and_cursor_in_bounds(
        (cols, rows) in dims(),
        bytes in vt_bytes(2048),
    ) {
        let mut parser = Parser::new();
        let mut buf = TerminalBuffer::with_scrollback(cols, rows, 64).unwrap();
        for chunk in bytes.chunks(97) {
            parser.parse(&mut buf, chunk);
            prop_assert!(buf.cursor_x() < buf.cols(),
                "cursor_x={} >= cols={}", buf.cursor_x(), buf.cols());
            prop_assert!(buf.cursor_y() < buf.rows(),
                "cursor_y={} >= rows={}", buf.cursor_y(), buf.rows());
        }
        prop_assert_eq!((buf.cols(), buf.rows()), (cols, rows));
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let mut parser = Parser::new();
        let mut buf = TerminalBuffer::new(80, 24);
        parser.parse(&mut buf, &bytes);
    }

    #[test]
    fn split_anywhere_is_equivalent(
        bytes in vt_bytes(1024),
        split in any::<prop::sample::Index>(),
    ) {
        let at = split.index(bytes.len() + 1);

        let mut whole = TerminalBuffer::new(30, 8);
        Parser::new().parse(&mut whole, &bytes);

        let mut parts = TerminalBuffer::new(30, 8);
        let mut parser = Parser::new();
        parser.parse(&mut parts, &bytes[..at]);
        parser.parse(&mut parts, &bytes[at..]);

        prop_assert_eq!(snapshot(&whole), snapshot(&parts));
    }

    #[test]
    fn byte_at_a_time_is_equivalent(text in "[a-z\u{e9}\u{597d} \r\n\t]{0,120}") {
        let mut whole = TerminalBuffer::new(16, 6);
        Parser::new().parse_str(&mut whole, &text);

        let mut single = TerminalBuffer::new(16, 6);
        let mut parser = Parser::new();
        for b in text.as_bytes() {
            parser.parse(&mut single, std::slice::from_ref(b));
        }

        prop_assert_eq!(snapshot(&whole), snapshot(&single));
    }

    #[test]
    fn parsing_is_deterministic(bytes in vt_bytes(1024)) {
        let mut a = TerminalBuffer::new(20, 6);
        let mut b = TerminalBuffer::new(20, 6);
        Parser::new().parse(&mut a, &bytes);
        Parser::new().parse(&mut b, &bytes);
        prop_assert_eq!(snapshot(&a), snapshot(&b));
    }
}

// --- alternate screen ---

proptest! {
    #[test]
    fn alternate_screen_never_grows_scrollback(text in "[a-z\r\n]{0,400}") {
        let mut parser = Parser::new();
        let mut buf = TerminalBuffer::new(10, 4);
        parser.parse_str(&mut buf, "one\r\ntwo\r\nthree\r\nfour\r\nfive\r\n");
        let before = buf.scrollback().len();

        parser.parse_str(&mut buf, "\x1b[?1049h");
        parser.parse_str(&mut buf, &text);
        parser.parse_str(&mut buf, "\x1b[5S");
        prop_assert_eq!(buf.scrollback().len(), before);

        parser.parse_str(&mut buf, "\x1b[?1049l");
        prop_assert_eq!(buf.scrollback().len(), before);
        prop_assert!(!buf.is_alternate_screen());
    }
}

// --- cells and ring ---

proptest! {
    #[test]
    fn set_then_get_roundtrips(
        (cols, rows) in dims(),
        x in 0usize..40,
        y in 0usize..20,
        ch in any::<char>(),
        fg in any::<u32>(),
        bg in any::<u32>(),
        bits in any::<u8>(),
    ) {
        let mut buf = TerminalBuffer::new(cols, rows);
        let cell = Cell::new(ch, fg, bg, CellFlags::from_bits_truncate(bits), None);
        buf.set_cell(x, y, &cell);
        if x < cols && y < rows {
            prop_assert_eq!(buf.get_cell(x, y), Some(&cell));
        } else {
            prop_assert!(buf.get_cell(x, y).is_none());
        }
    }

    #[test]
    fn ring_keeps_newest_items(
        capacity in 1usize..32,
        items in proptest::collection::vec(any::<u16>(), 0..100),
    ) {
        let mut ring = CircularBuffer::new(capacity).unwrap();
        for &item in &items {
            ring.push(item);
            prop_assert!(ring.len() <= capacity);
        }

        let kept = items.len().min(capacity);
        prop_assert_eq!(ring.len(), kept);
        let expected: Vec<u16> = items[items.len() - kept..].to_vec();
        let actual: Vec<u16> = ring.iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn resize_keeps_cursor_in_bounds(
        (cols, rows) in dims(),
        (new_cols, new_rows) in dims(),
        text in "[a-z\r\n]{0,200}",
    ) {
        let mut parser = Parser::new();
        let mut buf = TerminalBuffer::new(cols, rows);
        parser.parse_str(&mut buf, &text);
        buf.resize(new_cols, new_rows);
        prop_assert!(buf.cursor_x() < new_cols);
        prop_assert!(buf.cursor_y() < new_rows);
        for y in 0..new_rows {
            prop_assert_eq!(buf.row(y).map(Row::cols), Some(new_cols));
        }
        parser.parse_str(&mut buf, &text);
        prop_assert!(buf.cursor_y() < new_rows);
    }
}
