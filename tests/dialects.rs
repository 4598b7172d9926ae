//! Per-dialect behavior from §8's worked scenarios: vendor literal syntax, vendor-specific
//! operators, and the identifier quote-style-survives-the-pipeline property.

use flexsql::ast::{Expression, Ident, JsonPath, JsonPathElem, UnaryOperator, Value};
use flexsql::dialect::{BigQueryDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect, SnowflakeDialect};
use flexsql::parse_sql_with_dialect;
use pretty_assertions::assert_eq;

fn parse_expr(dialect: &dyn flexsql::dialect::Dialect, sql: &str) -> Expression {
    let select = format!("SELECT {sql}");
    let stmt = &parse_sql_with_dialect(dialect, &select).unwrap()[0];
    let flexsql::Statement::Query(query) = stmt else { panic!("not a query") };
    let flexsql::ast::SetExpression::Select(select) = query.body.as_ref() else { panic!("not a SELECT") };
    match &select.projection[0] {
        flexsql::ast::SelectItem::UnnamedExpr(e) => e.clone(),
        other => panic!("unexpected projection item {other:?}"),
    }
}

/// §8 scenario 3: BigQuery's `"..."` is a string literal, not a delimited identifier, and
/// `"""..."""` is its triple-quoted variant.
#[test]
fn bigquery_double_and_triple_quoted_strings() {
    let dialect = BigQueryDialect {};

    let double = parse_expr(&dialect, "\"hello\"");
    assert_eq!(double, Expression::LiteralValue(Value::DoubleQuotedString("hello".into())));

    let triple = parse_expr(&dialect, "\"\"\"hello \"embedded\" world\"\"\"");
    assert_eq!(
        triple,
        Expression::LiteralValue(Value::TripleDoubleQuotedString("hello \"embedded\" world".into()))
    );

    // Single-quoted triple strings already worked; keep both forms covered side by side.
    let triple_single = parse_expr(&dialect, "'''a''b'''");
    assert_eq!(triple_single, Expression::LiteralValue(Value::TripleSingleQuotedString("a''b".into())));
}

/// §8 scenario 4: `INSERT INTO tb VALUES (), ()` and `INSERT INTO tb () VALUES (), ()` must parse
/// to an equal AST — an explicit empty column list is a no-op next to an omitted one.
#[test]
fn mysql_empty_values_rows_are_equivalent_with_or_without_empty_column_list() {
    let dialect = MySqlDialect {};
    let implicit = parse_sql_with_dialect(&dialect, "INSERT INTO tb VALUES (), ()").unwrap();
    let explicit = parse_sql_with_dialect(&dialect, "INSERT INTO tb () VALUES (), ()").unwrap();
    assert_eq!(implicit, explicit);

    let flexsql::Statement::Insert { columns, source, .. } = &implicit[0] else { panic!("not an insert") };
    assert!(columns.is_empty());
    let source = source.as_ref().unwrap();
    let flexsql::ast::SetExpression::Values(values) = source.body.as_ref() else { panic!("not VALUES") };
    assert_eq!(values.rows, vec![Vec::<Expression>::new(), Vec::new()]);
}

/// §8 scenario 5: Snowflake's `a:foo[0].bar` path-access notation.
#[test]
fn snowflake_json_path_access() {
    let dialect = SnowflakeDialect {};
    let expr = parse_expr(&dialect, "a:foo[0].bar");
    assert_eq!(
        expr,
        Expression::JsonAccess {
            expr: Box::new(Expression::Identifier(Ident::new("a"))),
            path: JsonPath {
                path: vec![
                    JsonPathElem::Dot { key: Ident::new("foo"), quoted: false },
                    JsonPathElem::Bracket { key: Box::new(Expression::LiteralValue(Value::Number {
                        value: "0".into(),
                        long: false,
                    })) },
                    JsonPathElem::Dot { key: Ident::new("bar"), quoted: false },
                ],
            },
        }
    );
    assert_eq!(expr.to_string(), "a:foo[0].bar");
}

/// §8 scenario 6: SQLite's `@xxx` is a bind placeholder, not the Postgres absolute-value prefix
/// operator that `@` means everywhere else.
#[test]
fn sqlite_at_sign_is_a_placeholder_not_an_operator() {
    let sqlite_expr = parse_expr(&SQLiteDialect {}, "@xxx");
    assert_eq!(sqlite_expr, Expression::LiteralValue(Value::Placeholder("@xxx".into())));

    let postgres_expr = parse_expr(&PostgreSqlDialect {}, "@x");
    assert_eq!(
        postgres_expr,
        Expression::UnaryOp {
            op: UnaryOperator::PGAbs,
            expr: Box::new(Expression::Identifier(Ident::new("x"))),
        }
    );
}

/// Identifier quote style (`"..."`, `` `...` ``, `[...]`) must survive tokenize → parse →
/// serialize intact.
#[test]
fn identifier_quote_style_survives_the_pipeline() {
    let ansi = flexsql::dialect::AnsiDialect {};
    let expr = parse_expr(&ansi, "\"My Col\"");
    assert_eq!(expr, Expression::Identifier(Ident { value: "My Col".into(), quote_style: Some('"') }));
    assert_eq!(expr.to_string(), "\"My Col\"");

    let bq = BigQueryDialect {};
    let backtick = parse_expr(&bq, "`my col`");
    assert_eq!(backtick, Expression::Identifier(Ident { value: "my col".into(), quote_style: Some('`') }));
    assert_eq!(backtick.to_string(), "`my col`");
}
