//! Cell values and column types exposed by a table model

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// A single cell read from a result cursor.
///
/// SQL NULL is [`CellValue::Null`]; it is a value, not an absent cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Blob(Vec<u8>),
}

impl CellValue {
    /// Whether this is SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// The column type a value of this kind belongs to
    pub fn column_type(&self) -> ColumnType {
        match self {
            CellValue::Null => ColumnType::Object,
            CellValue::Boolean(_) => ColumnType::Boolean,
            CellValue::Integer(_) => ColumnType::Integer,
            CellValue::Double(_) => ColumnType::Double,
            CellValue::Text(_) => ColumnType::Text,
            CellValue::Date(_) => ColumnType::Date,
            CellValue::Timestamp(_) => ColumnType::Timestamp,
            CellValue::Blob(_) => ColumnType::Blob,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("NULL"),
            CellValue::Boolean(b) => write!(f, "{b}"),
            CellValue::Integer(n) => write!(f, "{n}"),
            CellValue::Double(d) => write!(f, "{d}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Timestamp(ts) => write!(f, "{ts}"),
            CellValue::Blob(bytes) => {
                f.write_str("\\x")?;
                for b in bytes {
                    write!(f, "{b:02X}")?;
                }
                Ok(())
            }
        }
    }
}

/// The declared type of a result column.
///
/// [`ColumnType::Object`] is the generic type used when the real type is
/// unknown or cannot be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnType {
    Boolean,
    Integer,
    Double,
    Text,
    Date,
    Timestamp,
    Blob,
    #[default]
    Object,
}

impl ColumnType {
    /// Short name used in headers and logs
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::Integer => "integer",
            ColumnType::Double => "double",
            ColumnType::Text => "text",
            ColumnType::Date => "date",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Blob => "blob",
            ColumnType::Object => "object",
        }
    }

    /// Whether values of this type read best right-aligned
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Double)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
