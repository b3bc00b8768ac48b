//! Database client traits consumed by the table model
//!
//! Addressing follows the cursor convention: rows and columns are counted
//! from 1, and row 0 means "before the first row".

use crate::error::DbResult;
use crate::value::{CellValue, ColumnType};

/// Column descriptions of a query result
pub trait CursorMetadata {
    /// Number of columns in the result
    fn column_count(&self) -> DbResult<usize>;

    /// Name of the 1-based `column`
    fn column_name(&self, column: usize) -> DbResult<String>;

    /// Declared type of the 1-based `column`
    fn column_type(&self, column: usize) -> DbResult<ColumnType>;
}

/// A seekable pointer over the rows of a query result
pub trait ResultCursor {
    /// Snapshot of the column descriptions
    fn metadata(&self) -> DbResult<Box<dyn CursorMetadata>>;

    /// Move one row forward; `false` once past the last row
    fn next(&mut self) -> DbResult<bool>;

    /// Move to the 1-based `row`; `false` when that row does not exist
    fn absolute(&mut self, row: usize) -> DbResult<bool>;

    /// Move to the last row; `false` when the result is empty
    fn last(&mut self) -> DbResult<bool>;

    /// Ordinal of the current row, 0 when not on a row
    fn row(&self) -> DbResult<usize>;

    /// Value of the 1-based `column` in the current row
    fn get(&self, column: usize) -> DbResult<CellValue>;
}

/// Executes SQL on behalf of a table model
pub trait DbStatement {
    /// Run a read query and return a cursor over its result
    fn execute_query(&mut self, sql: &str) -> DbResult<Box<dyn ResultCursor>>;

    /// Run a write statement and return the number of affected rows
    fn execute_update(&mut self, sql: &str) -> DbResult<usize>;

    /// Release the statement. Closing twice is not an error.
    fn close(&mut self) -> DbResult<()>;
}

/// A live database connection
pub trait DbConnection {
    /// Create a statement bound to this connection
    fn create_statement(&self) -> DbResult<Box<dyn DbStatement>>;

    /// Close the connection. Closing twice is not an error.
    fn close(&mut self) -> DbResult<()>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
