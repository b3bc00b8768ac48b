use super::*;

fn books_cursor() -> BufferedCursor {
    let columns = ResultColumns::new(vec![
        ColumnInfo::new("id", ColumnType::Integer),
        ColumnInfo::new("title", ColumnType::Text),
    ]);
    let rows = vec![
        vec![CellValue::Integer(1), CellValue::Text("Java".to_string())],
        vec![CellValue::Integer(2), CellValue::Text("Rust".to_string())],
        vec![CellValue::Integer(3), CellValue::Null],
    ];
    BufferedCursor::new(columns, rows)
}

#[test]
fn test_starts_before_first_row() {
    let cursor = books_cursor();
    assert_eq!(cursor.row().unwrap(), 0);
    assert!(matches!(
        cursor.get(1),
        Err(DbError::CursorNotOnRow { row: 0, row_count: 3 })
    ));
}

#[test]
fn test_next_walks_rows_then_stops_after_last() {
    let mut cursor = books_cursor();
    assert!(cursor.next().unwrap());
    assert!(cursor.next().unwrap());
    assert!(cursor.next().unwrap());
    assert_eq!(cursor.row().unwrap(), 3);
    assert!(!cursor.next().unwrap());
    assert!(!cursor.next().unwrap());
    assert_eq!(cursor.row().unwrap(), 0);
}

#[test]
fn test_absolute_positions() {
    let mut cursor = books_cursor();
    assert!(cursor.absolute(2).unwrap());
    assert_eq!(cursor.get(2).unwrap(), CellValue::Text("Rust".to_string()));

    assert!(!cursor.absolute(0).unwrap());
    assert_eq!(cursor.row().unwrap(), 0);

    assert!(!cursor.absolute(10).unwrap());
    assert_eq!(cursor.row().unwrap(), 0);
    // Past the end still allows stepping back with absolute.
    assert!(cursor.absolute(1).unwrap());
    assert_eq!(cursor.get(1).unwrap(), CellValue::Integer(1));
}

#[test]
fn test_last_reports_row_count() {
    let mut cursor = books_cursor();
    assert!(cursor.last().unwrap());
    assert_eq!(cursor.row().unwrap(), 3);
    assert_eq!(cursor.get(2).unwrap(), CellValue::Null);
}

#[test]
fn test_last_on_empty_result() {
    let mut cursor = BufferedCursor::new(
        ResultColumns::new(vec![ColumnInfo::new("id", ColumnType::Integer)]),
        Vec::new(),
    );
    assert!(!cursor.last().unwrap());
    assert_eq!(cursor.row().unwrap(), 0);
    assert_eq!(cursor.row_count(), 0);
}

#[test]
fn test_get_column_out_of_range() {
    let mut cursor = books_cursor();
    cursor.absolute(1).unwrap();
    assert!(matches!(
        cursor.get(0),
        Err(DbError::ColumnOutOfRange { column: 0, column_count: 2 })
    ));
    assert!(matches!(
        cursor.get(3),
        Err(DbError::ColumnOutOfRange { column: 3, column_count: 2 })
    ));
}

#[test]
fn test_metadata_snapshot() {
    let cursor = books_cursor();
    let meta = cursor.metadata().unwrap();
    assert_eq!(meta.column_count().unwrap(), 2);
    assert_eq!(meta.column_name(1).unwrap(), "id");
    assert_eq!(meta.column_type(2).unwrap(), ColumnType::Text);
    assert!(meta.column_name(3).is_err());
}
