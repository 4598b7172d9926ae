//! Round-trip and canonicalization-idempotence checks (§8): `parse(toSql(parse(s))) == parse(s)`,
//! and re-parsing `toSql(parse(s))` itself should be a no-op on the text.

use flexsql::dialect::{AnsiDialect, BigQueryDialect, MySqlDialect, PostgreSqlDialect, SnowflakeDialect};
use flexsql::parse_sql_with_dialect;
use pretty_assertions::assert_eq;

fn round_trips(dialect: &dyn flexsql::dialect::Dialect, sql: &str) {
    let first = parse_sql_with_dialect(dialect, sql).unwrap();
    let rendered = first.iter().map(|s| s.to_string()).collect::<Vec<_>>().join("; ") + ";";
    let second = parse_sql_with_dialect(dialect, &rendered).unwrap();
    assert_eq!(first, second, "reparsing {rendered:?} changed the AST");

    let rerendered = second.iter().map(|s| s.to_string()).collect::<Vec<_>>().join("; ") + ";";
    assert_eq!(rendered, rerendered, "canonicalization isn't idempotent");
}

#[test]
fn select_with_predicate_round_trips() {
    round_trips(&AnsiDialect {}, "SELECT a, b FROM t WHERE a = 1 AND b < 2");
}

#[test]
fn select_with_joins_and_order_by_round_trips() {
    round_trips(
        &AnsiDialect {},
        "SELECT t.a, u.b FROM t JOIN u ON t.id = u.id WHERE t.a > 0 ORDER BY t.a DESC LIMIT 10",
    );
}

#[test]
fn nested_subquery_round_trips() {
    round_trips(&AnsiDialect {}, "SELECT a FROM (SELECT a FROM t WHERE a > 0) AS sub WHERE sub.a < 100");
}

#[test]
fn create_table_round_trips() {
    round_trips(&AnsiDialect {}, "CREATE TABLE t (a INT PRIMARY KEY, b TEXT NOT NULL)");
}

#[test]
fn case_expression_round_trips() {
    round_trips(&AnsiDialect {}, "SELECT CASE WHEN a > 0 THEN 'pos' WHEN a < 0 THEN 'neg' ELSE 'zero' END FROM t");
}

#[test]
fn cte_round_trips() {
    round_trips(&AnsiDialect {}, "WITH cte AS (SELECT a FROM t) SELECT a FROM cte");
}

#[test]
fn union_round_trips() {
    round_trips(&AnsiDialect {}, "SELECT a FROM t UNION ALL SELECT b FROM u");
}

#[test]
fn insert_round_trips() {
    round_trips(&AnsiDialect {}, "INSERT INTO t (a, b) VALUES (1, 2), (3, 4)");
}

/// Same dialect-neutral SQL must produce an equal AST under every dialect (§8 "dialect
/// equivalence" property).
#[test]
fn dialect_neutral_input_parses_equally_across_dialects() {
    let sql = "SELECT a, b FROM t WHERE a = 1 AND b < 2 ORDER BY a";
    let ansi = parse_sql_with_dialect(&AnsiDialect {}, sql).unwrap();
    for dialect in [
        &BigQueryDialect {} as &dyn flexsql::dialect::Dialect,
        &MySqlDialect {},
        &PostgreSqlDialect {},
        &SnowflakeDialect {},
    ] {
        let other = parse_sql_with_dialect(dialect, sql).unwrap();
        assert_eq!(ansi, other, "{:?} disagreed with ANSI on dialect-neutral input", dialect);
    }
}

/// §8 scenario 2: `AND` binds tighter than nothing above it, `<`/`=` bind tighter than `AND`, so
/// `WHERE a = 1 AND b < 2` must group as `(a = 1) AND (b < 2)`, not `a = (1 AND b) < 2` or similar.
#[test]
fn and_groups_looser_than_comparison() {
    use flexsql::ast::{BinaryOperator, Expression};

    let stmt = &parse_sql_with_dialect(&AnsiDialect {}, "SELECT * FROM t WHERE a = 1 AND b < 2").unwrap()[0];
    let selection = selection_of(stmt);
    match selection {
        Expression::BinaryOp { left, op: BinaryOperator::And, right } => {
            assert!(matches!(*left, Expression::BinaryOp { op: BinaryOperator::Eq, .. }));
            assert!(matches!(*right, Expression::BinaryOp { op: BinaryOperator::Lt, .. }));
        }
        other => panic!("expected a top-level AND, got {other:?}"),
    }
}

fn selection_of(stmt: &flexsql::Statement) -> flexsql::ast::Expression {
    use flexsql::ast::SetExpression;
    let flexsql::Statement::Query(query) = stmt else {
        panic!("expected a query statement, got {stmt:?}");
    };
    let SetExpression::Select(select) = query.body.as_ref() else {
        panic!("expected a SELECT body, got {:?}", query.body);
    };
    select.selection.clone().expect("expected a WHERE clause")
}
