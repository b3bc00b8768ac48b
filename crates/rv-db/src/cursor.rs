//! Materialized, scrollable result cursor

use crate::error::{DbError, DbResult};
use crate::traits::{CursorMetadata, ResultCursor};
use crate::value::{CellValue, ColumnType};

/// Name and type of one result column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Column descriptions of a buffered result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultColumns(Vec<ColumnInfo>);

impl ResultColumns {
    pub fn new(columns: Vec<ColumnInfo>) -> Self {
        Self(columns)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn info(&self, column: usize) -> DbResult<&ColumnInfo> {
        column
            .checked_sub(1)
            .and_then(|idx| self.0.get(idx))
            .ok_or(DbError::ColumnOutOfRange {
                column,
                column_count: self.0.len(),
            })
    }
}

impl CursorMetadata for ResultColumns {
    fn column_count(&self) -> DbResult<usize> {
        Ok(self.0.len())
    }

    fn column_name(&self, column: usize) -> DbResult<String> {
        Ok(self.info(column)?.name.clone())
    }

    fn column_type(&self, column: usize) -> DbResult<ColumnType> {
        Ok(self.info(column)?.column_type)
    }
}

/// A fully materialized result that can be positioned anywhere.
///
/// Position 0 is before the first row and `rows.len() + 1` is after the
/// last row; positions in between are on a row.
#[derive(Debug, Clone)]
pub struct BufferedCursor {
    columns: ResultColumns,
    rows: Vec<Vec<CellValue>>,
    position: usize,
}

impl BufferedCursor {
    /// Create a cursor positioned before the first row
    pub fn new(columns: ResultColumns, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            columns,
            rows,
            position: 0,
        }
    }

    /// Number of rows held by the cursor
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn on_row(&self) -> bool {
        self.position >= 1 && self.position <= self.rows.len()
    }
}

impl ResultCursor for BufferedCursor {
    fn metadata(&self) -> DbResult<Box<dyn CursorMetadata>> {
        Ok(Box::new(self.columns.clone()))
    }

    fn next(&mut self) -> DbResult<bool> {
        let after_last = self.rows.len() + 1;
        if self.position < after_last {
            self.position += 1;
        }
        Ok(self.on_row())
    }

    fn absolute(&mut self, row: usize) -> DbResult<bool> {
        self.position = row.min(self.rows.len() + 1);
        Ok(self.on_row())
    }

    fn last(&mut self) -> DbResult<bool> {
        self.position = self.rows.len();
        Ok(self.on_row())
    }

    fn row(&self) -> DbResult<usize> {
        Ok(if self.on_row() { self.position } else { 0 })
    }

    fn get(&self, column: usize) -> DbResult<CellValue> {
        if !self.on_row() {
            return Err(DbError::CursorNotOnRow {
                row: self.position,
                row_count: self.rows.len(),
            });
        }
        self.columns.info(column)?;
        let row = &self.rows[self.position - 1];
        Ok(row.get(column - 1).cloned().unwrap_or(CellValue::Null))
    }
}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod tests;
