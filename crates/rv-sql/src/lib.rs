//! rv-sql - SQL parsing layer for resultview
//!
//! Decides whether a piece of SQL text is a read query (routed to
//! `set_query`) or a write statement (routed to `set_update`).

pub mod error;
pub mod parser;

pub use error::{SqlError, SqlResult};
pub use parser::{SqlParser, StatementKind};
