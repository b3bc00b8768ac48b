//! Shared setup for commands: configuration, connection and model binding

use anyhow::{Context, Result};
use rv_core::ViewerConfig;
use rv_db::{DuckDbConnection, ModelOptions, ResultSetTableModel};
use std::path::Path;

use crate::cli::GlobalArgs;

/// Load rv.yml (or `--config`) and apply command-line overrides
pub(crate) fn load_config(global: &GlobalArgs) -> Result<ViewerConfig> {
    let mut config = match &global.config {
        Some(path) => ViewerConfig::load(Path::new(path))?,
        None => ViewerConfig::load_from_dir(Path::new("."))?,
    };
    apply_overrides(&mut config, global)?;
    Ok(config)
}

fn apply_overrides(config: &mut ViewerConfig, global: &GlobalArgs) -> Result<()> {
    if let Some(database) = &global.database {
        config.database = database.clone();
    }
    config.validate()?;
    Ok(())
}

/// Open the configured database and run its `init_sql`
pub(crate) fn open_connection(config: &ViewerConfig) -> Result<DuckDbConnection> {
    let conn = DuckDbConnection::new(&config.database)
        .with_context(|| format!("Failed to open database '{}'", config.database))?;
    log::debug!(
        "Opened database '{}', running {} init statements",
        config.database,
        config.init_sql.len()
    );
    for sql in &config.init_sql {
        conn.execute_batch(sql)
            .with_context(|| format!("init_sql failed: {sql}"))?;
    }
    Ok(conn)
}

/// Bind a table model to `conn`, reporting structure changes when verbose
pub(crate) fn bind_model(
    conn: DuckDbConnection,
    config: &ViewerConfig,
    global: &GlobalArgs,
) -> Result<ResultSetTableModel> {
    let options = ModelOptions {
        advance_before_seek: config.advance_before_seek,
    };
    let mut model = ResultSetTableModel::connect(Box::new(conn), options)?;
    if global.verbose {
        model.add_listener(Box::new(|| {
            eprintln!("[verbose] table structure changed");
        }));
    }
    Ok(model)
}

/// Row limit: command flag, then config
pub(crate) fn max_rows(flag: Option<usize>, config: &ViewerConfig) -> usize {
    flag.unwrap_or(config.max_rows)
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
