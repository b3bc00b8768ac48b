//! SQL parser wrapper and statement classification

use crate::error::{SqlError, SqlResult};
use sqlparser::ast::Statement;
use sqlparser::dialect::{Dialect, DuckDbDialect};
use sqlparser::parser::Parser;

/// How a statement must be executed against a table model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Produces a result set
    Query,
    /// Modifies data or schema, produces an affected-row count
    Update,
}

impl StatementKind {
    /// Classify a parsed statement
    pub fn of(stmt: &Statement) -> Self {
        match stmt {
            Statement::Query(_)
            | Statement::Explain { .. }
            | Statement::ExplainTable { .. }
            | Statement::Pragma { .. }
            | Statement::ShowTables { .. }
            | Statement::ShowColumns { .. }
            | Statement::ShowVariable { .. } => StatementKind::Query,
            _ => StatementKind::Update,
        }
    }
}

/// SQL parser that wraps sqlparser-rs with the DuckDB dialect
pub struct SqlParser {
    dialect: Box<dyn Dialect>,
}

impl SqlParser {
    /// Create a new parser with DuckDB dialect
    pub fn duckdb() -> Self {
        Self {
            dialect: Box::new(DuckDbDialect {}),
        }
    }

    /// Parse SQL into AST statements
    pub fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        let sql = sql.trim();
        if sql.is_empty() {
            return Err(SqlError::EmptySql);
        }

        Parser::parse_sql(self.dialect.as_ref(), sql).map_err(|e| {
            let message = e.to_string();
            let (line, column) = parse_location_from_error(&message);
            SqlError::ParseError {
                message,
                line,
                column,
            }
        })
    }

    /// Parse SQL that must hold exactly one statement
    pub fn parse_single(&self, sql: &str) -> SqlResult<Statement> {
        let mut stmts = self.parse(sql)?;
        match stmts.len() {
            0 => Err(SqlError::EmptySql),
            1 => Ok(stmts.remove(0)),
            n => Err(SqlError::MultipleStatements(n)),
        }
    }

    /// Classify a single statement as a query or an update
    pub fn classify(&self, sql: &str) -> SqlResult<StatementKind> {
        let stmt = self.parse_single(sql)?;
        Ok(StatementKind::of(&stmt))
    }
}

impl Default for SqlParser {
    fn default() -> Self {
        Self::duckdb()
    }
}

/// Parse line and column from a sqlparser error message.
///
/// `ParserError` carries no structured location, so "Line: N, Column: M"
/// is extracted from the message text. Returns `(0, 0)` when absent.
fn parse_location_from_error(msg: &str) -> (usize, usize) {
    let number_after = |label: &str| -> Option<usize> {
        let start = msg.find(label)? + label.len();
        let digits: String = msg[start..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    };
    match (number_after("Line: "), number_after("Column: ")) {
        (Some(line), Some(column)) => (line, column),
        _ => (0, 0),
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
