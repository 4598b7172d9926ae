//! Dialect registry (§4.1 "Dialect"). A [`Dialect`] is an object-safe trait so the parser holds
//! it as `&dyn Dialect`; each real SQL flavor is a zero-sized struct implementing it, and default
//! methods give every dialect ANSI-reasonable behavior for free.

mod ansi;
mod bigquery;
mod clickhouse;
mod databricks;
mod duckdb;
mod generic;
mod hive;
mod mssql;
mod mysql;
mod oracle;
mod postgresql;
mod redshift;
mod snowflake;
mod sqlite;

pub use ansi::AnsiDialect;
pub use bigquery::BigQueryDialect;
pub use clickhouse::ClickHouseDialect;
pub use databricks::DatabricksDialect;
pub use duckdb::DuckDbDialect;
pub use generic::GenericDialect;
pub use hive::HiveDialect;
pub use mssql::MsSqlDialect;
pub use mysql::MySqlDialect;
pub use oracle::OracleDialect;
pub use postgresql::PostgreSqlDialect;
pub use redshift::RedshiftDialect;
pub use snowflake::SnowflakeDialect;
pub use sqlite::SQLiteDialect;

use std::fmt;

use strum_macros::AsRefStr;

use crate::ast::Expression;
use crate::error::ParseResult;
use crate::parser::Parser;
use crate::precedence::Precedence;

/// Identifies the dialect a parser was built with without requiring downcasting, and drives the
/// CLI's `--dialect` flag (§4.1, §9 "CLI").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum DialectKind {
    Ansi,
    BigQuery,
    ClickHouse,
    Databricks,
    DuckDb,
    Generic,
    Hive,
    MsSql,
    MySql,
    Oracle,
    PostgreSql,
    Redshift,
    SQLite,
    Snowflake,
}

impl DialectKind {
    pub fn name(&self) -> &'static str {
        match self {
            DialectKind::Ansi => "ansi",
            DialectKind::BigQuery => "bigquery",
            DialectKind::ClickHouse => "clickhouse",
            DialectKind::Databricks => "databricks",
            DialectKind::DuckDb => "duckdb",
            DialectKind::Generic => "generic",
            DialectKind::Hive => "hive",
            DialectKind::MsSql => "mssql",
            DialectKind::MySql => "mysql",
            DialectKind::Oracle => "oracle",
            DialectKind::PostgreSql => "postgresql",
            DialectKind::Redshift => "redshift",
            DialectKind::SQLite => "sqlite",
            DialectKind::Snowflake => "snowflake",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DialectKind::Ansi => "ANSI SQL baseline, no vendor extensions",
            DialectKind::BigQuery => "Google BigQuery / GoogleSQL",
            DialectKind::ClickHouse => "ClickHouse",
            DialectKind::Databricks => "Databricks SQL",
            DialectKind::DuckDb => "DuckDB",
            DialectKind::Generic => "Permissive superset accepting most vendor extensions",
            DialectKind::Hive => "Apache Hive",
            DialectKind::MsSql => "Microsoft SQL Server (T-SQL)",
            DialectKind::MySql => "MySQL / MariaDB",
            DialectKind::Oracle => "Oracle Database",
            DialectKind::PostgreSql => "PostgreSQL",
            DialectKind::Redshift => "Amazon Redshift",
            DialectKind::SQLite => "SQLite",
            DialectKind::Snowflake => "Snowflake",
        }
    }

    pub fn doc_url(&self) -> &'static str {
        match self {
            DialectKind::Ansi => "https://www.iso.org/standard/76583.html",
            DialectKind::BigQuery => "https://cloud.google.com/bigquery/docs/reference/standard-sql/query-syntax",
            DialectKind::ClickHouse => "https://clickhouse.com/docs/en/sql-reference",
            DialectKind::Databricks => "https://docs.databricks.com/en/sql/language-manual/index.html",
            DialectKind::DuckDb => "https://duckdb.org/docs/sql/introduction",
            DialectKind::Generic => "",
            DialectKind::Hive => "https://cwiki.apache.org/confluence/display/Hive/LanguageManual",
            DialectKind::MsSql => "https://learn.microsoft.com/en-us/sql/t-sql/language-reference",
            DialectKind::MySql => "https://dev.mysql.com/doc/refman/8.0/en/sql-statements.html",
            DialectKind::Oracle => "https://docs.oracle.com/en/database/oracle/oracle-database/",
            DialectKind::PostgreSql => "https://www.postgresql.org/docs/current/sql-commands.html",
            DialectKind::Redshift => "https://docs.aws.amazon.com/redshift/latest/dg/cm_chap_SQLCommandRef.html",
            DialectKind::SQLite => "https://www.sqlite.org/lang.html",
            DialectKind::Snowflake => "https://docs.snowflake.com/en/sql-reference-commands",
        }
    }

    pub fn build(&self) -> Box<dyn Dialect> {
        match self {
            DialectKind::Ansi => Box::new(AnsiDialect {}),
            DialectKind::BigQuery => Box::new(BigQueryDialect {}),
            DialectKind::ClickHouse => Box::new(ClickHouseDialect {}),
            DialectKind::Databricks => Box::new(DatabricksDialect {}),
            DialectKind::DuckDb => Box::new(DuckDbDialect {}),
            DialectKind::Generic => Box::new(GenericDialect {}),
            DialectKind::Hive => Box::new(HiveDialect {}),
            DialectKind::MsSql => Box::new(MsSqlDialect {}),
            DialectKind::MySql => Box::new(MySqlDialect {}),
            DialectKind::Oracle => Box::new(OracleDialect {}),
            DialectKind::PostgreSql => Box::new(PostgreSqlDialect {}),
            DialectKind::Redshift => Box::new(RedshiftDialect {}),
            DialectKind::SQLite => Box::new(SQLiteDialect {}),
            DialectKind::Snowflake => Box::new(SnowflakeDialect {}),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DialectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: &[DialectKind] = &[
            DialectKind::Ansi,
            DialectKind::BigQuery,
            DialectKind::ClickHouse,
            DialectKind::Databricks,
            DialectKind::DuckDb,
            DialectKind::Generic,
            DialectKind::Hive,
            DialectKind::MsSql,
            DialectKind::MySql,
            DialectKind::Oracle,
            DialectKind::PostgreSql,
            DialectKind::Redshift,
            DialectKind::SQLite,
            DialectKind::Snowflake,
        ];
        ALL.iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unrecognized dialect {s:?}"))
    }
}

/// Behavior that varies across SQL flavors (§4.1). Every feature-flag method defaults to the
/// ANSI-reasonable answer; a dialect overrides only what it needs to change. The four `try_`
/// hooks let a dialect intercept parsing before the generic parser runs its own logic: `None`
/// means "I don't special-case this, fall through".
pub trait Dialect: fmt::Debug {
    fn kind(&self) -> DialectKind;

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$'
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"'
    }

    /// Characters that may begin a dialect's custom multi-char operator run (§3.1, §4.3).
    fn is_custom_operator_part(&self, _ch: char) -> bool {
        false
    }

    fn supports_string_literal_backslash_escape(&self) -> bool {
        false
    }

    fn supports_numeric_literal_underscores(&self) -> bool {
        false
    }

    fn supports_filter_during_aggregation(&self) -> bool {
        true
    }

    fn supports_within_after_array_aggregation(&self) -> bool {
        false
    }

    fn supports_group_by_expr(&self) -> bool {
        true
    }

    fn supports_group_by_all(&self) -> bool {
        false
    }

    fn supports_qualify(&self) -> bool {
        false
    }

    fn supports_limit_comma(&self) -> bool {
        false
    }

    fn supports_top_clause(&self) -> bool {
        false
    }

    fn supports_select_value_mode(&self) -> bool {
        false
    }

    fn supports_unnest_alias(&self) -> bool {
        false
    }

    fn supports_match_recognize(&self) -> bool {
        false
    }

    fn supports_connect_by(&self) -> bool {
        false
    }

    fn supports_pivot_unpivot(&self) -> bool {
        false
    }

    fn supports_create_table_select(&self) -> bool {
        false
    }

    fn supports_insert_set(&self) -> bool {
        false
    }

    fn supports_insert_overwrite(&self) -> bool {
        false
    }

    fn supports_user_host_grantee(&self) -> bool {
        false
    }

    fn supports_table_hints(&self) -> bool {
        false
    }

    fn requires_single_line_comment_whitespace(&self) -> bool {
        false
    }

    fn supports_match_against(&self) -> bool {
        false
    }

    fn supports_set_names(&self) -> bool {
        false
    }

    fn supports_comma_separated_set_assignments(&self) -> bool {
        false
    }

    fn supports_named_fn_args_with_colon(&self) -> bool {
        false
    }

    fn supports_dollar_placeholder(&self) -> bool {
        false
    }

    /// `:name`/`:1` scan as a single [`crate::tokenizer::token::Token::Placeholder`] rather than
    /// `Token::Colon` followed by an identifier. Snowflake turns this off: its bare `:` is the
    /// JSON path-access operator (§8 scenario 5), not a bind parameter.
    fn supports_colon_placeholder(&self) -> bool {
        true
    }

    /// `@name` scans as a [`crate::tokenizer::token::Token::Placeholder`] (§8 scenario 6). Off by
    /// default, where a bare `@` is instead the Postgres absolute-value prefix operator.
    fn supports_at_sign_placeholder(&self) -> bool {
        false
    }

    fn supports_triple_quoted_string(&self) -> bool {
        false
    }

    fn supports_struct_literal(&self) -> bool {
        false
    }

    fn supports_backslash_escape(&self) -> bool {
        self.supports_string_literal_backslash_escape()
    }

    fn identifier_quote_style(&self, _identifier: &str) -> Option<char> {
        None
    }

    /// First parse attempt for a whole statement; returning `Some` short-circuits the generic
    /// dispatcher in [`Parser::parse_statement`] (§4.8 extension point i).
    fn parse_statement(&self, _parser: &mut Parser) -> Option<ParseResult<crate::ast::Statement>> {
        None
    }

    /// First parse attempt for a prefix expression (§4.8 extension point ii).
    fn parse_prefix(&self, _parser: &mut Parser) -> Option<ParseResult<Expression>> {
        None
    }

    /// First parse attempt for an infix/postfix continuation given the already-parsed left-hand
    /// side and the minimum precedence in effect (§4.8 extension point iii).
    fn parse_infix(
        &self,
        _parser: &mut Parser,
        _expr: &Expression,
        _precedence: Precedence,
    ) -> Option<ParseResult<Expression>> {
        None
    }

    /// Overrides the precedence the Pratt loop uses for the next token (§4.8 extension point iv).
    fn get_next_precedence(&self, _parser: &Parser) -> Option<ParseResult<Precedence>> {
        None
    }
}
