//! Edge cases called out explicitly in §8: empty input, trailing-comma gating, recursion overflow,
//! and unterminated-string tokenize errors.

use flexsql::dialect::{AnsiDialect, GenericDialect};
use flexsql::error::ParserError;
use flexsql::{parse_sql, parse_sql_with_dialect, parse_sql_with_options, tokenize, ParseOptions};

#[test]
fn empty_input_is_an_empty_statement_list() {
    assert_eq!(parse_sql("").unwrap(), Vec::new());
}

#[test]
fn lone_semicolon_is_an_empty_statement_list() {
    assert_eq!(parse_sql(";").unwrap(), Vec::new());
    assert_eq!(parse_sql(";;;").unwrap(), Vec::new());
}

#[test]
fn trailing_comma_in_projection_is_rejected_by_default() {
    assert!(parse_sql("SELECT a, b, FROM t").is_err());
}

#[test]
fn trailing_comma_in_projection_is_accepted_when_the_option_is_set() {
    let dialect = GenericDialect {};
    let options = ParseOptions { trailing_commas: true, ..ParseOptions::default() };
    let statements = parse_sql_with_options(&dialect, "SELECT a, b, FROM t", options).unwrap();
    assert_eq!(statements.len(), 1);
}

#[test]
fn recursion_overflow_on_deeply_nested_parens_is_reported() {
    let dialect = AnsiDialect {};
    let options = ParseOptions { recursion_limit: 10, ..ParseOptions::default() };
    let nested = format!("SELECT {}1{}", "(".repeat(20), ")".repeat(20));
    let err = parse_sql_with_options(&dialect, &nested, options).unwrap_err();
    assert!(matches!(err, ParserError::RecursionLimitExceeded { limit: 10, .. }), "got {err:?}");
}

#[test]
fn recursion_within_the_default_limit_still_parses() {
    let nested = format!("SELECT {}1{}", "(".repeat(5), ")".repeat(5));
    assert!(parse_sql(&nested).is_ok());
}

/// Unterminated string literal: the tokenizer reports a location past the opening quote, not at
/// the start of the statement.
#[test]
fn unterminated_string_literal_is_a_tokenize_error_past_the_opening_quote() {
    let dialect = GenericDialect {};
    let err = tokenize(&dialect, "SELECT 'abc").unwrap_err();
    assert_eq!(err.message, "unterminated string literal");
    assert!(err.location.column > 8, "expected the error past the opening quote, got {:?}", err.location);

    let parse_err = parse_sql_with_dialect(&dialect, "SELECT 'abc").unwrap_err();
    assert!(matches!(parse_err, ParserError::Tokenize(_)), "got {parse_err:?}");
}
