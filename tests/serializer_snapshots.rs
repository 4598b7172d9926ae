//! A handful of exact-string serializer snapshots, pinning down spacing/punctuation decisions that
//! the AST-equality round-trip tests elsewhere don't check directly.

use expect_test::expect;
use flexsql::dialect::AnsiDialect;
use flexsql::parse_sql_with_dialect;

fn render(sql: &str) -> String {
    parse_sql_with_dialect(&AnsiDialect {}, sql).unwrap()[0].to_string()
}

#[test]
fn simple_select_snapshot() {
    expect!["SELECT a, b FROM t WHERE a = 1"].assert_eq(&render("select a,b from t where a=1"));
}

#[test]
fn order_by_and_limit_snapshot() {
    expect!["SELECT a FROM t ORDER BY a DESC LIMIT 10"]
        .assert_eq(&render("SELECT a FROM t ORDER BY a DESC LIMIT 10"));
}

#[test]
fn create_table_snapshot() {
    expect!["CREATE TABLE t (a INT PRIMARY KEY, b TEXT NOT NULL)"]
        .assert_eq(&render("CREATE TABLE t (a INT PRIMARY KEY, b TEXT NOT NULL)"));
}
