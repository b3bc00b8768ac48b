use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_parse_query_with_globals() {
    let cli = Cli::try_parse_from([
        "rv",
        "--database",
        "shop.duckdb",
        "query",
        "SELECT 1",
        "--max-rows",
        "5",
        "-v",
    ])
    .unwrap();

    assert!(cli.global.verbose);
    assert_eq!(cli.global.database.as_deref(), Some("shop.duckdb"));
    match cli.command {
        Commands::Query(args) => {
            assert_eq!(args.sql, "SELECT 1");
            assert_eq!(args.max_rows, Some(5));
        }
        other => panic!("expected query command, got {other:?}"),
    }
}

#[test]
fn test_parse_books_file() {
    let cli = Cli::try_parse_from(["rv", "books", "--file", "books.yml"]).unwrap();
    match cli.command {
        Commands::Books(args) => assert_eq!(args.file.as_deref(), Some("books.yml")),
        other => panic!("expected books command, got {other:?}"),
    }
}

#[test]
fn test_exec_requires_sql() {
    assert!(Cli::try_parse_from(["rv", "exec"]).is_err());
}
