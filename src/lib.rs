//! `flexsql`: a multi-dialect SQL tokenizer, Pratt parser, and canonicalizing serializer.
//!
//! The library is a pure, synchronous, I/O-free pipeline: source text → [`tokenize`] → tokens →
//! [`parse_sql`]/[`parse_sql_with_dialect`] → a strongly-typed [`ast::Statement`] tree → its own
//! [`std::fmt::Display`] impl renders canonical SQL text back out.
//!
//! ```
//! use flexsql::dialect::GenericDialect;
//! use flexsql::parse_sql_with_dialect;
//!
//! let dialect = GenericDialect {};
//! let statements = parse_sql_with_dialect(&dialect, "SELECT 1 + 2").unwrap();
//! assert_eq!(statements.len(), 1);
//! assert_eq!(statements[0].to_string(), "SELECT 1 + 2");
//! ```

pub mod ast;
pub mod dialect;
pub mod error;
pub mod keywords;
pub mod parser;
pub mod precedence;
pub mod tokenizer;

use dialect::{Dialect, DialectKind, GenericDialect};
use error::ParseResult;
use tokenizer::token::TokenWithLocation;

pub use ast::Statement;
pub use parser::{ParseOptions, Parser};

/// Parses `sql` under the permissive [`GenericDialect`] (§6 "External interfaces").
pub fn parse_sql(sql: &str) -> ParseResult<Vec<Statement>> {
    parse_sql_with_dialect(&GenericDialect {}, sql)
}

/// Parses `sql` under an explicit dialect.
pub fn parse_sql_with_dialect(dialect: &dyn Dialect, sql: &str) -> ParseResult<Vec<Statement>> {
    parser::parse_sql(dialect, sql)
}

/// Parses `sql` under an explicit dialect with explicit [`ParseOptions`].
pub fn parse_sql_with_options(
    dialect: &dyn Dialect,
    sql: &str,
    options: ParseOptions,
) -> ParseResult<Vec<Statement>> {
    parser::parse_sql_with_options(dialect, sql, options)
}

/// Parses `sql` under the dialect named by `kind` (the `--dialect` flag's resolution point).
pub fn parse_sql_with_dialect_kind(kind: DialectKind, sql: &str) -> ParseResult<Vec<Statement>> {
    parse_sql_with_dialect(kind.build().as_ref(), sql)
}

/// Tokenizes `sql` under `dialect` without parsing it (§6 "lower-level" entry point).
pub fn tokenize(dialect: &dyn Dialect, sql: &str) -> Result<Vec<TokenWithLocation>, error::TokenizeError> {
    tokenizer::Tokenizer::new(dialect, sql).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::SnowflakeDialect;

    #[test]
    fn parses_and_reserializes_a_simple_select() {
        let statements = parse_sql("SELECT a, b FROM t WHERE a = 1").unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].to_string(), "SELECT a, b FROM t WHERE a = 1");
    }

    #[test]
    fn parses_multiple_statements() {
        let statements = parse_sql("SELECT 1; SELECT 2").unwrap();
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn dialect_kind_selects_the_right_dialect() {
        let statements = parse_sql_with_dialect_kind(DialectKind::Snowflake, "SELECT 1").unwrap();
        assert_eq!(statements.len(), 1);

        let dialect = SnowflakeDialect {};
        let via_ref = parse_sql_with_dialect(&dialect, "SELECT 1").unwrap();
        assert_eq!(statements, via_ref);
    }

    #[test]
    fn tokenize_exposes_the_raw_token_stream() {
        let dialect = GenericDialect {};
        let tokens = tokenize(&dialect, "SELECT 1").unwrap();
        assert!(!tokens.is_empty());
    }

    #[test]
    fn invalid_sql_reports_a_parse_error() {
        assert!(parse_sql("SELECT FROM").is_err());
    }
}
