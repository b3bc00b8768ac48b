//! resultview CLI - run SQL against DuckDB and display the result table

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::Cli;
use commands::{books, common, exec, query};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = common::load_config(&cli.global)?;
    logging::init(cli.global.verbose, &config.log_level);

    match &cli.command {
        cli::Commands::Query(args) => query::execute(args, &cli.global, &config),
        cli::Commands::Exec(args) => exec::execute(args, &cli.global, &config),
        cli::Commands::Books(args) => books::execute(args, &cli.global, &config),
    }
}
