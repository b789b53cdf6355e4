use super::*;

#[test]
fn tracks_lines_and_columns() {
    let mut cursor = SourceCursor::new("ab\ncd");
    assert_eq!(cursor.position(), Position::new(1, 1));
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.position(), Position::new(1, 3));
    assert_eq!(cursor.bump(), Some('\n'));
    assert_eq!(cursor.position(), Position::new(2, 1));
    cursor.bump_n(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.position(), Position::new(2, 3));
    assert_eq!(cursor.bump(), None);
}

#[test]
fn multibyte_characters_count_one_column() {
    let mut cursor = SourceCursor::new("é+");
    cursor.bump();
    assert_eq!(cursor.position(), Position::new(1, 2));
    assert_eq!(cursor.peek(), Some('+'));
    assert_eq!(cursor.rest(), "+");
    assert_eq!(cursor.slice_from(0), "é");
}

#[test]
fn eat_while_returns_slice() {
    let mut cursor = SourceCursor::new("abc123 rest");
    let word = cursor.eat_while(|c| c.is_ascii_alphanumeric());
    assert_eq!(word, "abc123");
    assert_eq!(cursor.rest(), " rest");
    assert_eq!(cursor.peek(), Some(' '));
}

#[test]
fn snapshot_restores_position() {
    let mut cursor = SourceCursor::new("x\ny");
    let snapshot = cursor;
    cursor.bump_n(2);
    assert_eq!(cursor.position(), Position::new(2, 1));
    cursor = snapshot;
    assert_eq!(cursor.position(), Position::START);
    assert_eq!(cursor.peek_second(), Some('\n'));
}
