use super::Cursor;

#[test]
fn starts_visible_at_origin() {
    let cursor = Cursor::new();
    assert_eq!((cursor.x(), cursor.y()), (0, 0));
    assert!(cursor.is_visible());
    assert!(!cursor.is_wrap_pending());
}

#[test]
fn default_matches_new() {
    assert_eq!(Cursor::default(), Cursor::new());
}

#[test]
fn place_clamps_and_clears_wrap() {
    let mut cursor = Cursor::new();
    cursor.set_wrap_pending(true);
    cursor.place(500, 500, 80, 24);
    assert_eq!((cursor.x(), cursor.y()), (79, 23));
    assert!(!cursor.is_wrap_pending());
}

#[test]
fn place_in_bounds_is_exact() {
    let mut cursor = Cursor::new();
    cursor.place(3, 7, 80, 24);
    assert_eq!((cursor.x(), cursor.y()), (3, 7));
}

#[test]
fn visibility_toggles() {
    let mut cursor = Cursor::new();
    cursor.set_visible(false);
    assert!(!cursor.is_visible());
    cursor.set_visible(true);
    assert!(cursor.is_visible());
}
