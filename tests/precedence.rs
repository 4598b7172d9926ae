//! Operator-precedence grouping (§8: "for every operator pair `(a, b)` with `prec(a) < prec(b)`,
//! `x a y b z` groups as `x a (y b z)`") and the serializer's precedence-aware parenthesization
//! that keeps round-tripping sound when a source expression used explicit parens to override the
//! default grouping.

use flexsql::ast::{BinaryOperator, Expression};
use flexsql::dialect::AnsiDialect;
use flexsql::parse_sql_with_dialect;
use pretty_assertions::assert_eq;

fn parse_expr(sql: &str) -> Expression {
    let select = format!("SELECT {sql}");
    let stmt = &parse_sql_with_dialect(&AnsiDialect {}, &select).unwrap()[0];
    let flexsql::Statement::Query(query) = stmt else { panic!("not a query") };
    let flexsql::ast::SetExpression::Select(select) = query.body.as_ref() else { panic!("not a SELECT") };
    match &select.projection[0] {
        flexsql::ast::SelectItem::UnnamedExpr(e) => e.clone(),
        other => panic!("unexpected projection item {other:?}"),
    }
}

/// `*` binds tighter than `+`: `a + b * c` groups as `a + (b * c)`.
#[test]
fn multiplication_binds_tighter_than_addition() {
    let expr = parse_expr("a + b * c");
    match expr {
        Expression::BinaryOp { left, op: BinaryOperator::Plus, right } => {
            assert!(matches!(*left, Expression::Identifier(_)));
            assert!(matches!(*right, Expression::BinaryOp { op: BinaryOperator::Multiply, .. }));
        }
        other => panic!("expected a top-level +, got {other:?}"),
    }
}

/// `AND` binds tighter than `OR`: `a OR b AND c` groups as `a OR (b AND c)`.
#[test]
fn and_binds_tighter_than_or() {
    let expr = parse_expr("a OR b AND c");
    match expr {
        Expression::BinaryOp { left, op: BinaryOperator::Or, right } => {
            assert!(matches!(*left, Expression::Identifier(_)));
            assert!(matches!(*right, Expression::BinaryOp { op: BinaryOperator::And, .. }));
        }
        other => panic!("expected a top-level OR, got {other:?}"),
    }
}

/// Explicit parens that override the default grouping must survive a print/reparse cycle:
/// `(a + b) * c` is a different tree from `a + b * c` and must stay that way.
#[test]
fn explicit_parens_overriding_precedence_round_trip() {
    let expr = parse_expr("(a + b) * c");
    assert!(matches!(expr, Expression::BinaryOp { op: BinaryOperator::Multiply, .. }));

    let rendered = expr.to_string();
    assert_eq!(rendered, "(a + b) * c");

    let reparsed = parse_expr(&rendered);
    assert_eq!(expr, reparsed);
}

/// Same shape, subtraction: `a - (b - c)` is not associatively equal to `a - b - c` and must keep
/// its parens through serialization.
#[test]
fn explicit_parens_on_non_associative_operator_round_trip() {
    let expr = parse_expr("a - (b - c)");
    let rendered = expr.to_string();
    assert_eq!(rendered, "a - (b - c)");
    assert_eq!(parse_expr(&rendered), expr);
}

/// Left-associative chains of the same precedence need no parens at all: `a - b - c` prints bare
/// and still reparses to the same left-leaning tree.
#[test]
fn same_precedence_left_associative_chain_needs_no_parens() {
    let expr = parse_expr("a - b - c");
    let rendered = expr.to_string();
    assert_eq!(rendered, "a - b - c");
    assert_eq!(parse_expr(&rendered), expr);
}

/// `NOT (a AND b)` is not the same statement as `NOT a AND b` (`NOT` binds tighter than `AND`);
/// the parenthesized form must keep its parens when printed back out.
#[test]
fn not_over_an_and_keeps_its_parens() {
    let expr = parse_expr("NOT (a AND b)");
    let rendered = expr.to_string();
    assert_eq!(rendered, "NOT (a AND b)");
    assert_eq!(parse_expr(&rendered), expr);

    let bare = parse_expr("NOT a AND b");
    assert_ne!(expr, bare, "NOT(a AND b) must differ from (NOT a) AND b");
}
