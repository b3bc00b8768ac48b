//! Table model over a database query result
//!
//! [`ResultSetTableModel`] binds a database connection and statement, runs
//! queries through them and exposes the active result as rows and columns
//! counted from 0. The cursor underneath counts from 1; [`cursor_ordinal`]
//! is the only place that translates between the two.
//!
//! Two surfaces are offered:
//!
//! - `try_*` methods return [`DbResult`] and report every failure, including
//!   use while disconnected ([`DbError::NotConnected`]).
//! - the [`TableModel`] trait is what a display widget calls. It never fails:
//!   errors are logged and replaced with display defaults.

use crate::error::{DbError, DbResult};
use crate::listener::{ListenerId, ListenerList, TableModelListener};
use crate::traits::{CursorMetadata, DbConnection, DbStatement, ResultCursor};
use crate::value::{CellValue, ColumnType};
use std::cell::RefCell;

/// Read-only, 0-based view of tabular data for a display widget
pub trait TableModel {
    /// Number of rows
    fn row_count(&self) -> usize;

    /// Number of columns
    fn column_count(&self) -> usize;

    /// Header text of `column`
    fn column_name(&self, column: usize) -> String;

    /// Declared type of `column`
    fn column_type(&self, column: usize) -> ColumnType;

    /// Value at (`row`, `column`), or `None` when there is nothing to show
    fn value_at(&self, row: usize, column: usize) -> Option<CellValue>;

    /// Whether the widget may edit a cell
    fn is_cell_editable(&self, _row: usize, _column: usize) -> bool {
        false
    }

    /// Index of the first column called `name`
    fn find_column(&self, name: &str) -> Option<usize> {
        (0..self.column_count()).find(|&column| self.column_name(column) == name)
    }
}

/// Behavior switches for [`ResultSetTableModel`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelOptions {
    /// Step the cursor forward once before every absolute seek in
    /// [`ResultSetTableModel::try_value_at`].
    ///
    /// Works around drivers that return garbled date values unless the
    /// cursor has moved before repositioning. DuckDB does not need it.
    pub advance_before_seek: bool,
}

/// Translate a 0-based table index into a 1-based cursor ordinal
pub fn cursor_ordinal(index: usize) -> DbResult<usize> {
    index
        .checked_add(1)
        .ok_or(DbError::IndexOverflow { index })
}

/// Table model backed by a database connection and its active query result.
///
/// Not thread-safe: the model is meant to be driven from the display
/// widget's single update thread.
pub struct ResultSetTableModel {
    connection: Option<Box<dyn DbConnection>>,
    statement: Option<Box<dyn DbStatement>>,
    cursor: RefCell<Option<Box<dyn ResultCursor>>>,
    metadata: Option<Box<dyn CursorMetadata>>,
    row_count: usize,
    connected: bool,
    last_query: Option<String>,
    options: ModelOptions,
    listeners: ListenerList,
}

impl ResultSetTableModel {
    /// Create an unbound model
    pub fn new(options: ModelOptions) -> Self {
        Self {
            connection: None,
            statement: None,
            cursor: RefCell::new(None),
            metadata: None,
            row_count: 0,
            connected: false,
            last_query: None,
            options,
            listeners: ListenerList::new(),
        }
    }

    /// Create a model bound to `connection` and a fresh statement on it
    pub fn connect(connection: Box<dyn DbConnection>, options: ModelOptions) -> DbResult<Self> {
        let statement = connection.create_statement()?;
        let mut model = Self::new(options);
        model.set_connection(connection, statement);
        Ok(model)
    }

    /// Bind the handles the model runs queries through.
    ///
    /// Handles are not checked for liveness. When rebinding a model that is
    /// still connected, its active result stays in place until the next
    /// query; a model bound after [`Self::disconnect`] has no active result.
    pub fn set_connection(
        &mut self,
        connection: Box<dyn DbConnection>,
        statement: Box<dyn DbStatement>,
    ) {
        log::debug!("Binding table model to {} connection", connection.db_type());
        self.connection = Some(connection);
        self.statement = Some(statement);
        self.connected = true;
    }

    /// Whether the model is bound and not yet disconnected
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn options(&self) -> ModelOptions {
        self.options
    }

    /// The query behind the current result
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Register a listener for structure-changed notifications
    pub fn add_listener(&mut self, listener: Box<dyn TableModelListener>) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregister a listener; returns whether it was registered
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn ensure_connected(&self) -> DbResult<()> {
        if self.connected {
            Ok(())
        } else {
            Err(DbError::NotConnected)
        }
    }

    fn active_metadata(&self) -> DbResult<&dyn CursorMetadata> {
        self.ensure_connected()?;
        self.metadata.as_deref().ok_or(DbError::NoActiveResult)
    }

    /// Number of columns in the active result
    pub fn try_column_count(&self) -> DbResult<usize> {
        self.active_metadata()?.column_count()
    }

    /// Name of the 0-based `column`
    pub fn try_column_name(&self, column: usize) -> DbResult<String> {
        self.active_metadata()?.column_name(cursor_ordinal(column)?)
    }

    /// Declared type of the 0-based `column`
    pub fn try_column_type(&self, column: usize) -> DbResult<ColumnType> {
        self.active_metadata()?.column_type(cursor_ordinal(column)?)
    }

    /// Row count captured when the active query ran (0 without an active result)
    pub fn try_row_count(&self) -> DbResult<usize> {
        self.ensure_connected()?;
        Ok(self.row_count)
    }

    /// Value at the 0-based (`row`, `column`) of the active result
    pub fn try_value_at(&self, row: usize, column: usize) -> DbResult<CellValue> {
        self.ensure_connected()?;
        let row = cursor_ordinal(row)?;
        let column = cursor_ordinal(column)?;
        let mut guard = self.cursor.borrow_mut();
        let cursor = guard.as_mut().ok_or(DbError::NoActiveResult)?;

        if self.options.advance_before_seek {
            cursor.next()?;
        }
        cursor.absolute(row)?;
        cursor.get(column)
    }

    /// Run a read query and make its result the active one.
    ///
    /// Replaces the cursor and metadata, captures the row count, and
    /// notifies listeners that the structure changed. On error the previous
    /// result stays active.
    pub fn set_query(&mut self, sql: &str) -> DbResult<()> {
        self.ensure_connected()?;
        let statement = self.statement.as_mut().ok_or(DbError::NotConnected)?;

        let mut cursor = statement.execute_query(sql)?;
        let metadata = cursor.metadata()?;
        cursor.last()?;
        let row_count = cursor.row()?;

        *self.cursor.get_mut() = Some(cursor);
        self.metadata = Some(metadata);
        self.row_count = row_count;
        self.last_query = Some(sql.to_string());
        log::debug!("Table model now holds {row_count} rows");

        self.listeners.fire_structure_changed();
        Ok(())
    }

    /// Run a write statement and return the number of affected rows.
    ///
    /// The active cursor, metadata and row count are left untouched; call
    /// [`Self::requery`] to see the effect of the write. Listeners are
    /// still told the structure changed.
    pub fn set_update(&mut self, sql: &str) -> DbResult<usize> {
        self.ensure_connected()?;
        let statement = self.statement.as_mut().ok_or(DbError::NotConnected)?;

        let affected = statement.execute_update(sql)?;

        self.listeners.fire_structure_changed();
        Ok(affected)
    }

    /// Re-run the query behind the active result
    pub fn requery(&mut self) -> DbResult<()> {
        let sql = self.last_query.clone().ok_or(DbError::NoActiveResult)?;
        self.set_query(&sql)
    }

    /// Close the statement and the connection.
    ///
    /// Does nothing when already disconnected. The first close failure is
    /// logged and ends the teardown; the model is disconnected either way.
    /// The active result (cursor, metadata, row count and its query) is
    /// discarded with the handles.
    pub fn disconnect(&mut self) {
        if !self.connected {
            return;
        }

        if let Err(e) = self.close_handles() {
            log::warn!("Failed to close database handles: {e}");
        }

        self.statement = None;
        self.connection = None;
        self.clear_active_result();
        self.connected = false;
    }

    fn clear_active_result(&mut self) {
        *self.cursor.get_mut() = None;
        self.metadata = None;
        self.row_count = 0;
        self.last_query = None;
    }

    fn close_handles(&mut self) -> DbResult<()> {
        if let Some(statement) = self.statement.as_mut() {
            statement.close()?;
        }
        if let Some(connection) = self.connection.as_mut() {
            connection.close()?;
        }
        Ok(())
    }

    fn or_display_default<T>(&self, what: &str, result: DbResult<T>, default: T) -> T {
        match result {
            Ok(value) => value,
            Err(e @ (DbError::NotConnected | DbError::NoActiveResult)) => {
                log::debug!("{what}: {e}");
                default
            }
            Err(e) => {
                log::warn!("{what} failed: {e}");
                default
            }
        }
    }
}

impl Default for ResultSetTableModel {
    fn default() -> Self {
        Self::new(ModelOptions::default())
    }
}

impl Drop for ResultSetTableModel {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl TableModel for ResultSetTableModel {
    fn row_count(&self) -> usize {
        let result = self.try_row_count();
        self.or_display_default("row count", result, 0)
    }

    fn column_count(&self) -> usize {
        let result = self.try_column_count();
        self.or_display_default("column count", result, 0)
    }

    fn column_name(&self, column: usize) -> String {
        let result = self.try_column_name(column);
        self.or_display_default("column name", result, String::new())
    }

    fn column_type(&self, column: usize) -> ColumnType {
        let result = self.try_column_type(column);
        self.or_display_default("column type", result, ColumnType::Object)
    }

    fn value_at(&self, row: usize, column: usize) -> Option<CellValue> {
        let result = self.try_value_at(row, column).map(Some);
        self.or_display_default("cell value", result, None)
    }
}

#[cfg(test)]
#[path = "table_model_test.rs"]
mod tests;
