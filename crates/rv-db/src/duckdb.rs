//! DuckDB client implementation

use crate::cursor::{BufferedCursor, ColumnInfo, ResultColumns};
use crate::error::{DbError, DbResult};
use crate::traits::{DbConnection, DbStatement, ResultCursor};
use crate::value::{CellValue, ColumnType};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use duckdb::arrow::datatypes::DataType;
use duckdb::types::{TimeUnit, Value};
use duckdb::Connection;
use std::path::Path;

/// Days from 0001-01-01 (CE) to 1970-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// DuckDB database connection
pub struct DuckDbConnection {
    conn: Option<Connection>,
}

impl DuckDbConnection {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn: Some(conn) })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self { conn: Some(conn) })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    /// Execute one or more statements outside any table model
    pub fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.conn()?
            .execute_batch(sql)
            .map_err(|e| DbError::ExecutionError(e.to_string()))
    }

    /// Whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    fn conn(&self) -> DbResult<&Connection> {
        self.conn.as_ref().ok_or(DbError::Closed("connection"))
    }
}

impl DbConnection for DuckDbConnection {
    fn create_statement(&self) -> DbResult<Box<dyn DbStatement>> {
        // The statement owns its own handle on the same database so the two
        // can be closed independently.
        let conn = self
            .conn()?
            .try_clone()
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Box::new(DuckDbStatement { conn: Some(conn) }))
    }

    fn close(&mut self) -> DbResult<()> {
        close_handle(self.conn.take(), "connection")
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

/// Executes SQL on a DuckDB connection
pub struct DuckDbStatement {
    conn: Option<Connection>,
}

impl DuckDbStatement {
    fn conn(&self) -> DbResult<&Connection> {
        self.conn.as_ref().ok_or(DbError::Closed("statement"))
    }
}

impl DbStatement for DuckDbStatement {
    fn execute_query(&mut self, sql: &str) -> DbResult<Box<dyn ResultCursor>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;

        // Column metadata is only available once the statement has run,
        // so rows are collected first.
        let rows: Vec<Vec<CellValue>> = stmt
            .query_map([], |row| {
                let col_count = row.as_ref().column_count();
                (0..col_count)
                    .map(|i| row.get::<_, Value>(i).map(cell_from_duckdb))
                    .collect()
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let columns = (0..stmt.column_count())
            .map(|i| {
                let name = stmt.column_name(i).map_or("?".to_string(), |v| v.to_string());
                ColumnInfo::new(name, column_type_from_arrow(&stmt.column_type(i)))
            })
            .collect();

        log::debug!("Query returned {} rows: {}", rows.len(), sql);
        Ok(Box::new(BufferedCursor::new(
            ResultColumns::new(columns),
            rows,
        )))
    }

    fn execute_update(&mut self, sql: &str) -> DbResult<usize> {
        let affected = self.conn()?.execute(sql, [])?;
        log::debug!("Update affected {} rows: {}", affected, sql);
        Ok(affected)
    }

    fn close(&mut self) -> DbResult<()> {
        close_handle(self.conn.take(), "statement")
    }
}

fn close_handle(conn: Option<Connection>, what: &str) -> DbResult<()> {
    match conn {
        None => Ok(()),
        Some(conn) => conn
            .close()
            .map_err(|(_, e)| DbError::ConnectionError(format!("failed to close {what}: {e}"))),
    }
}

/// Convert a DuckDB value into a [`CellValue`]
pub(crate) fn cell_from_duckdb(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Boolean(b) => CellValue::Boolean(b),
        Value::TinyInt(n) => CellValue::Integer(n.into()),
        Value::SmallInt(n) => CellValue::Integer(n.into()),
        Value::Int(n) => CellValue::Integer(n.into()),
        Value::BigInt(n) => CellValue::Integer(n),
        Value::UTinyInt(n) => CellValue::Integer(n.into()),
        Value::USmallInt(n) => CellValue::Integer(n.into()),
        Value::UInt(n) => CellValue::Integer(n.into()),
        Value::UBigInt(n) => i64::try_from(n)
            .map(CellValue::Integer)
            .unwrap_or_else(|_| CellValue::Text(n.to_string())),
        Value::HugeInt(n) => i64::try_from(n)
            .map(CellValue::Integer)
            .unwrap_or_else(|_| CellValue::Text(n.to_string())),
        Value::Float(f) => CellValue::Double(f.into()),
        Value::Double(f) => CellValue::Double(f),
        Value::Decimal(d) => {
            let text = d.to_string();
            text.parse::<f64>()
                .map(CellValue::Double)
                .unwrap_or(CellValue::Text(text))
        }
        Value::Text(s) => CellValue::Text(s),
        Value::Blob(bytes) => CellValue::Blob(bytes),
        Value::Date32(days) => date_from_days(days)
            .map(CellValue::Date)
            .unwrap_or(CellValue::Integer(days.into())),
        Value::Timestamp(unit, value) => timestamp_from(unit, value)
            .map(CellValue::Timestamp)
            .unwrap_or(CellValue::Integer(value)),
        other => CellValue::Text(format!("{other:?}")),
    }
}

fn date_from_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

fn timestamp_from(unit: TimeUnit, value: i64) -> Option<NaiveDateTime> {
    let micros = match unit {
        TimeUnit::Second => value.checked_mul(1_000_000)?,
        TimeUnit::Millisecond => value.checked_mul(1_000)?,
        TimeUnit::Microsecond => value,
        TimeUnit::Nanosecond => value / 1_000,
    };
    DateTime::from_timestamp_micros(micros).map(|dt| dt.naive_utc())
}

/// Map an arrow column type reported by DuckDB to a [`ColumnType`]
pub(crate) fn column_type_from_arrow(data_type: &DataType) -> ColumnType {
    match data_type {
        DataType::Boolean => ColumnType::Boolean,
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => ColumnType::Integer,
        DataType::Float16
        | DataType::Float32
        | DataType::Float64
        | DataType::Decimal128(..)
        | DataType::Decimal256(..) => ColumnType::Double,
        DataType::Utf8 | DataType::LargeUtf8 => ColumnType::Text,
        DataType::Date32 | DataType::Date64 => ColumnType::Date,
        DataType::Timestamp(..) => ColumnType::Timestamp,
        DataType::Binary | DataType::LargeBinary | DataType::FixedSizeBinary(_) => {
            ColumnType::Blob
        }
        _ => ColumnType::Object,
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
