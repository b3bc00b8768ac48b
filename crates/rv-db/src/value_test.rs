use super::*;

#[test]
fn test_display_scalars() {
    assert_eq!(CellValue::Null.to_string(), "NULL");
    assert_eq!(CellValue::Boolean(true).to_string(), "true");
    assert_eq!(CellValue::Integer(-7).to_string(), "-7");
    assert_eq!(CellValue::Double(49.99).to_string(), "49.99");
    assert_eq!(CellValue::Text("Java".to_string()).to_string(), "Java");
}

#[test]
fn test_display_temporal() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    assert_eq!(CellValue::Date(date).to_string(), "2024-03-09");

    let ts = date.and_hms_opt(13, 5, 0).unwrap();
    assert_eq!(CellValue::Timestamp(ts).to_string(), "2024-03-09 13:05:00");
}

#[test]
fn test_display_blob_as_hex() {
    assert_eq!(CellValue::Blob(vec![0x00, 0xAB, 0x10]).to_string(), "\\x00AB10");
}

#[test]
fn test_is_null() {
    assert!(CellValue::Null.is_null());
    assert!(!CellValue::Text(String::new()).is_null());
}

#[test]
fn test_value_column_type() {
    assert_eq!(CellValue::Integer(1).column_type(), ColumnType::Integer);
    assert_eq!(CellValue::Null.column_type(), ColumnType::Object);
}

#[test]
fn test_column_type_default_is_object() {
    assert_eq!(ColumnType::default(), ColumnType::Object);
    assert_eq!(ColumnType::Object.to_string(), "object");
}

#[test]
fn test_numeric_column_types() {
    assert!(ColumnType::Integer.is_numeric());
    assert!(ColumnType::Double.is_numeric());
    assert!(!ColumnType::Text.is_numeric());
}
