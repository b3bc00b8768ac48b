//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// resultview - run SQL against DuckDB and display the result as a table
#[derive(Parser, Debug)]
#[command(name = "rv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: rv.yml in the current directory)
    #[arg(short, long, global = true, env = "RV_CONFIG")]
    pub config: Option<String>,

    /// Override the database path (":memory:" for in-memory)
    #[arg(short, long, global = true, env = "RV_DATABASE")]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a read query and display its result
    Query(QueryArgs),

    /// Run any single statement; queries are displayed, writes report affected rows
    Exec(ExecArgs),

    /// Load books into a `books` table and display it
    Books(BooksArgs),
}

/// Arguments for the query command
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// SQL query text
    pub sql: String,

    /// Maximum number of rows to display
    #[arg(short, long)]
    pub max_rows: Option<usize>,
}

/// Arguments for the exec command
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// SQL statement text
    pub sql: String,

    /// Maximum number of rows to display for queries
    #[arg(short, long)]
    pub max_rows: Option<usize>,
}

/// Arguments for the books command
#[derive(Args, Debug)]
pub struct BooksArgs {
    /// YAML file with a list of books (id, title, price); built-in samples when omitted
    #[arg(short, long)]
    pub file: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
