use super::*;

#[test]
fn test_classify_select() {
    let parser = SqlParser::duckdb();
    assert_eq!(
        parser.classify("SELECT id, title FROM books WHERE price > 10").unwrap(),
        StatementKind::Query
    );
}

#[test]
fn test_classify_cte_is_query() {
    let parser = SqlParser::duckdb();
    let sql = "WITH cheap AS (SELECT * FROM books WHERE price < 20) SELECT * FROM cheap";
    assert_eq!(parser.classify(sql).unwrap(), StatementKind::Query);
}

#[test]
fn test_classify_values_is_query() {
    let parser = SqlParser::duckdb();
    assert_eq!(
        parser.classify("VALUES (1, 'a'), (2, 'b')").unwrap(),
        StatementKind::Query
    );
}

#[test]
fn test_classify_explain_is_query() {
    let parser = SqlParser::duckdb();
    assert_eq!(
        parser.classify("EXPLAIN SELECT 1").unwrap(),
        StatementKind::Query
    );
}

#[test]
fn test_classify_insert_update_delete() {
    let parser = SqlParser::duckdb();
    for sql in [
        "INSERT INTO books VALUES (1, 'Java', 49.99)",
        "UPDATE books SET price = 10 WHERE id = 1",
        "DELETE FROM books WHERE id = 1",
    ] {
        assert_eq!(parser.classify(sql).unwrap(), StatementKind::Update, "{sql}");
    }
}

#[test]
fn test_classify_ddl_is_update() {
    let parser = SqlParser::duckdb();
    assert_eq!(
        parser
            .classify("CREATE TABLE books (id INTEGER, title VARCHAR, price DOUBLE)")
            .unwrap(),
        StatementKind::Update
    );
}

#[test]
fn test_trailing_semicolon_is_single_statement() {
    let parser = SqlParser::duckdb();
    assert_eq!(parser.classify("SELECT 1;").unwrap(), StatementKind::Query);
}

#[test]
fn test_multiple_statements_rejected() {
    let parser = SqlParser::duckdb();
    let result = parser.classify("SELECT 1; SELECT 2;");
    assert!(matches!(result, Err(SqlError::MultipleStatements(2))));
}

#[test]
fn test_empty_sql() {
    let parser = SqlParser::duckdb();
    assert!(matches!(parser.classify("   "), Err(SqlError::EmptySql)));
}

#[test]
fn test_parse_error() {
    let parser = SqlParser::duckdb();
    let result = parser.classify("SELEC id FROM books");
    assert!(matches!(result, Err(SqlError::ParseError { .. })));
}

#[test]
fn test_location_extraction() {
    assert_eq!(
        parse_location_from_error("Expected: expression, found: FROM at Line: 1, Column: 8"),
        (1, 8)
    );
    assert_eq!(parse_location_from_error("no location here"), (0, 0));
}
