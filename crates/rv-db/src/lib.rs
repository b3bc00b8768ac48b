//! rv-db - Database layer for resultview
//!
//! This crate provides the client traits a table model talks to, a DuckDB
//! implementation of them, and [`ResultSetTableModel`], which exposes a
//! query result to a row/column-indexed display widget.

pub mod cursor;
pub mod duckdb;
pub mod error;
pub mod listener;
pub mod table_model;
pub mod traits;
pub mod value;

pub use cursor::{BufferedCursor, ColumnInfo, ResultColumns};
pub use crate::duckdb::{DuckDbConnection, DuckDbStatement};
pub use error::{DbError, DbResult};
pub use listener::{ListenerId, ListenerList, TableModelListener};
pub use table_model::{cursor_ordinal, ModelOptions, ResultSetTableModel, TableModel};
pub use traits::{CursorMetadata, DbConnection, DbStatement, ResultCursor};
pub use value::{CellValue, ColumnType};
