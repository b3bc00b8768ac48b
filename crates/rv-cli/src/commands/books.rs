//! Books command implementation

use anyhow::{Context, Result};
use rv_core::{Book, ViewerConfig};
use std::path::Path;

use crate::cli::{BooksArgs, GlobalArgs};
use crate::commands::common::{bind_model, open_connection};
use crate::commands::render::render_table;

const BOOKS_QUERY: &str = "SELECT id, title, price FROM books ORDER BY id";

/// Execute the books command
pub(crate) fn execute(args: &BooksArgs, global: &GlobalArgs, config: &ViewerConfig) -> Result<()> {
    let books = match &args.file {
        Some(path) => load_books(Path::new(path))?,
        None => sample_books(),
    };

    for book in &books {
        print!("{book}");
    }
    println!();

    let conn = open_connection(config)?;
    conn.execute_batch(&seed_sql(&books))
        .context("Failed to load books table")?;

    let mut model = bind_model(conn, config, global)?;
    model.set_query(BOOKS_QUERY)?;
    print!("{}", render_table(&model, config.max_rows));

    model.disconnect();
    Ok(())
}

fn sample_books() -> Vec<Book> {
    vec![
        Book::new(1, "Java", 49.99),
        Book::new(2, "Rust", 39.5),
        Book::new(3, "SQL", 25.0),
    ]
}

fn load_books(path: &Path) -> Result<Vec<Book>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let books: Vec<Book> = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse books from {}", path.display()))?;
    Ok(books)
}

/// SQL that (re)creates the `books` table holding `books`
fn seed_sql(books: &[Book]) -> String {
    let mut sql = String::from(
        "CREATE OR REPLACE TABLE books (id INTEGER, title VARCHAR, price DOUBLE);\n",
    );
    if !books.is_empty() {
        let values: Vec<String> = books
            .iter()
            .map(|b| {
                format!(
                    "({}, '{}', {:?})",
                    b.id(),
                    b.title().replace('\'', "''"),
                    b.price()
                )
            })
            .collect();
        sql.push_str(&format!("INSERT INTO books VALUES {};\n", values.join(", ")));
    }
    sql
}
