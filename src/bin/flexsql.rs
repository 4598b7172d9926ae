//! A thin CLI demonstrator: tokenize/parse a SQL string and print the AST or the re-serialized
//! SQL (§9 "CLI"). Not part of the library's API — a convenience wrapper around it.

use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use flexsql::dialect::DialectKind;
use flexsql::{parse_sql_with_dialect_kind, tokenize};

#[derive(Debug, Parser)]
#[command(name = "flexsql")]
#[command(about = "Tokenize or parse a SQL string under a chosen dialect", long_about = None, version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// SQL to process; reads stdin if omitted.
    sql: Option<String>,

    /// Dialect to parse under.
    #[arg(long, value_enum, default_value_t = Dialect::Generic)]
    dialect: Dialect,

    /// Print the raw token stream instead of parsing.
    #[arg(long)]
    tokens: bool,

    /// Print the canonicalized SQL instead of the AST debug form.
    #[arg(long)]
    to_sql: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Dialect {
    Ansi,
    Bigquery,
    Clickhouse,
    Databricks,
    Duckdb,
    Generic,
    Hive,
    Mssql,
    Mysql,
    Oracle,
    Postgresql,
    Redshift,
    Sqlite,
    Snowflake,
}

impl From<Dialect> for DialectKind {
    fn from(value: Dialect) -> Self {
        match value {
            Dialect::Ansi => DialectKind::Ansi,
            Dialect::Bigquery => DialectKind::BigQuery,
            Dialect::Clickhouse => DialectKind::ClickHouse,
            Dialect::Databricks => DialectKind::Databricks,
            Dialect::Duckdb => DialectKind::DuckDb,
            Dialect::Generic => DialectKind::Generic,
            Dialect::Hive => DialectKind::Hive,
            Dialect::Mssql => DialectKind::MsSql,
            Dialect::Mysql => DialectKind::MySql,
            Dialect::Oracle => DialectKind::Oracle,
            Dialect::Postgresql => DialectKind::PostgreSql,
            Dialect::Redshift => DialectKind::Redshift,
            Dialect::Sqlite => DialectKind::SQLite,
            Dialect::Snowflake => DialectKind::Snowflake,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber_init();

    let cli = Cli::parse();
    let sql = match cli.sql {
        Some(sql) => sql,
        None => {
            let mut buf = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut buf) {
                eprintln!("error: failed to read stdin: {err}");
                return ExitCode::FAILURE;
            }
            buf
        }
    };

    let kind: DialectKind = cli.dialect.into();

    if cli.tokens {
        let dialect = kind.build();
        return match tokenize(dialect.as_ref(), &sql) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{:?}", token.token);
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    match parse_sql_with_dialect_kind(kind, &sql) {
        Ok(statements) => {
            for statement in statements {
                if cli.to_sql {
                    println!("{statement}");
                } else {
                    println!("{statement:#?}");
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Best-effort `tracing` subscriber so `--tokens`/parse diagnostics surface somewhere; a failed
/// install (a subscriber already set) is not fatal for a one-shot CLI run.
fn tracing_subscriber_init() {
    let _ = tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    );
}
