//! Error types for rv-db

use thiserror::Error;

/// Database and table model errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Table not found (D003)
    #[error("[D003] Table or view not found: {0}")]
    TableNotFound(String),

    /// Handle used after close (D004)
    #[error("[D004] {0} is closed")]
    Closed(&'static str),

    /// Table model used while not bound to a database (D005)
    #[error("[D005] Not connected to database")]
    NotConnected,

    /// Table model read before any query was run (D006)
    #[error("[D006] No query has been executed")]
    NoActiveResult,

    /// Cursor read while not positioned on a row (D007)
    #[error("[D007] Cursor is not positioned on a row (row {row} of {row_count})")]
    CursorNotOnRow { row: usize, row_count: usize },

    /// Column ordinal outside 1..=count (D008)
    #[error("[D008] Column {column} out of range (result has {column_count} columns)")]
    ColumnOutOfRange { column: usize, column_count: usize },

    /// Table index with no cursor ordinal (D009)
    #[error("[D009] Index {index} is beyond the addressable range of the cursor")]
    IndexOverflow { index: usize },
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        // duckdb::Error does not expose structured variants for catalog
        // errors, so classification relies on narrow message patterns.
        let msg = err.to_string();
        if msg.contains("Table with name")
            || msg.contains("View with name")
            || msg.contains("Table or view with name")
            || (msg.contains("Catalog Error") && msg.contains("Table") && msg.contains("not found"))
        {
            DbError::TableNotFound(msg)
        } else {
            DbError::ExecutionError(msg)
        }
    }
}
