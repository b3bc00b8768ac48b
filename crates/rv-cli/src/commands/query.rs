//! Query command implementation

use anyhow::Result;
use rv_core::ViewerConfig;

use crate::cli::{GlobalArgs, QueryArgs};
use crate::commands::common::{bind_model, max_rows, open_connection};
use crate::commands::render::render_table;

/// Execute the query command
pub(crate) fn execute(args: &QueryArgs, global: &GlobalArgs, config: &ViewerConfig) -> Result<()> {
    let conn = open_connection(config)?;
    let mut model = bind_model(conn, config, global)?;

    model.set_query(&args.sql)?;
    print!("{}", render_table(&model, max_rows(args.max_rows, config)));

    model.disconnect();
    Ok(())
}
