//! Exec command implementation

use anyhow::Result;
use rv_core::ViewerConfig;
use rv_db::ResultSetTableModel;
use rv_sql::{SqlParser, StatementKind};

use crate::cli::{ExecArgs, GlobalArgs};
use crate::commands::common::{bind_model, max_rows, open_connection};
use crate::commands::render::render_table;

/// Execute the exec command
pub(crate) fn execute(args: &ExecArgs, global: &GlobalArgs, config: &ViewerConfig) -> Result<()> {
    let kind = SqlParser::duckdb().classify(&args.sql)?;
    if global.verbose {
        eprintln!("[verbose] Statement classified as {kind:?}");
    }

    let conn = open_connection(config)?;
    let mut model = bind_model(conn, config, global)?;
    let output = run_statement(&mut model, kind, &args.sql, max_rows(args.max_rows, config))?;
    print!("{output}");

    model.disconnect();
    Ok(())
}

/// Route `sql` to the model by kind and return the text to print
fn run_statement(
    model: &mut ResultSetTableModel,
    kind: StatementKind,
    sql: &str,
    max_rows: usize,
) -> Result<String> {
    match kind {
        StatementKind::Query => {
            model.set_query(sql)?;
            Ok(render_table(&*model, max_rows))
        }
        StatementKind::Update => {
            let affected = model.set_update(sql)?;
            let noun = if affected == 1 { "row" } else { "rows" };
            Ok(format!("{affected} {noun} affected\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rv_db::{DuckDbConnection, ModelOptions, TableModel};

    fn model() -> ResultSetTableModel {
        let conn = DuckDbConnection::in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER); INSERT INTO t VALUES (1), (2), (3);")
            .unwrap();
        ResultSetTableModel::connect(Box::new(conn), ModelOptions::default()).unwrap()
    }

    #[test]
    fn test_query_is_rendered() {
        let mut model = model();
        let out = run_statement(&mut model, StatementKind::Query, "SELECT id FROM t", 10).unwrap();
        assert!(out.ends_with("(3 rows)\n"));
    }

    #[test]
    fn test_update_reports_affected_rows() {
        let mut model = model();
        let out = run_statement(
            &mut model,
            StatementKind::Update,
            "DELETE FROM t WHERE id > 1",
            10,
        )
        .unwrap();
        assert_eq!(out, "2 rows affected\n");
    }

    #[test]
    fn test_update_singular() {
        let mut model = model();
        let out = run_statement(
            &mut model,
            StatementKind::Update,
            "DELETE FROM t WHERE id = 1",
            10,
        )
        .unwrap();
        assert_eq!(out, "1 row affected\n");
        assert_eq!(model.row_count(), 0);
    }
}
