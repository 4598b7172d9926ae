//! Expressions (§3.2 `Expression`). ~80 variants collapsed into a closed enum with one field
//! list each, per §4.5 ("each variant's fields are listed once... never duplicated").

use std::fmt;

use super::data_type::DataType;
use super::ident::{display_comma_separated, display_separated, Ident, ObjectName};
use super::operator::{BinaryOperator, UnaryOperator};
use super::query::Query;
use super::value::Value;
use crate::precedence::{self, Precedence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastKind {
    Cast,
    TryCast,
    SafeCast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimWhereField {
    Both,
    Leading,
    Trailing,
}

impl fmt::Display for TrimWhereField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrimWhereField::Both => "BOTH",
            TrimWhereField::Leading => "LEADING",
            TrimWhereField::Trailing => "TRAILING",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractSyntax {
    /// `EXTRACT(YEAR FROM x)`
    From,
    /// Dialect extensions allowing `EXTRACT(YEAR, x)` (`allowExtractCustom`) or single-quoted
    /// field names (`allowExtractSingleQuotes`).
    Comma,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullTreatment {
    RespectNulls,
    IgnoreNulls,
}

impl fmt::Display for NullTreatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NullTreatment::RespectNulls => write!(f, "RESPECT NULLS"),
            NullTreatment::IgnoreNulls => write!(f, "IGNORE NULLS"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFrameBound {
    pub kind: WindowFrameBoundKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowFrameBoundKind {
    CurrentRow,
    Preceding(Option<Box<Expression>>),
    Following(Option<Box<Expression>>),
}

impl fmt::Display for WindowFrameBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WindowFrameBoundKind::CurrentRow => write!(f, "CURRENT ROW"),
            WindowFrameBoundKind::Preceding(None) => write!(f, "UNBOUNDED PRECEDING"),
            WindowFrameBoundKind::Preceding(Some(e)) => write!(f, "{e} PRECEDING"),
            WindowFrameBoundKind::Following(None) => write!(f, "UNBOUNDED FOLLOWING"),
            WindowFrameBoundKind::Following(Some(e)) => write!(f, "{e} FOLLOWING"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFrameUnits {
    Rows,
    Range,
    Groups,
}

impl fmt::Display for WindowFrameUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WindowFrameUnits::Rows => "ROWS",
            WindowFrameUnits::Range => "RANGE",
            WindowFrameUnits::Groups => "GROUPS",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFrame {
    pub units: WindowFrameUnits,
    pub start_bound: WindowFrameBound,
    pub end_bound: Option<WindowFrameBound>,
}

impl fmt::Display for WindowFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.units)?;
        match &self.end_bound {
            Some(end) => write!(f, "BETWEEN {} AND {end}", self.start_bound),
            None => write!(f, "{}", self.start_bound),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowSpec {
    pub partition_by: Vec<Expression>,
    pub order_by: Vec<super::query::OrderByExpr>,
    pub window_frame: Option<WindowFrame>,
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if !self.partition_by.is_empty() {
            parts.push(format!("PARTITION BY {}", display_comma_separated(&self.partition_by)));
        }
        if !self.order_by.is_empty() {
            parts.push(format!("ORDER BY {}", display_comma_separated(&self.order_by)));
        }
        if let Some(frame) = &self.window_frame {
            parts.push(frame.to_string());
        }
        write!(f, "{}", parts.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowType {
    NamedWindow(Ident),
    Spec(WindowSpec),
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowType::NamedWindow(name) => write!(f, "{name}"),
            WindowType::Spec(spec) => write!(f, "({spec})"),
        }
    }
}

/// `name(args) [FILTER (WHERE ..)] [WITHIN GROUP (ORDER BY ..)] [OVER ..]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: ObjectName,
    pub args: Vec<FunctionArg>,
    pub distinct: bool,
    pub null_treatment: Option<NullTreatment>,
    pub filter: Option<Box<Expression>>,
    pub within_group: Vec<super::query::OrderByExpr>,
    pub over: Option<WindowType>,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        if self.distinct {
            write!(f, "DISTINCT ")?;
        }
        write!(f, "{}", display_comma_separated(&self.args))?;
        if let Some(nt) = self.null_treatment {
            write!(f, " {nt}")?;
        }
        write!(f, ")")?;
        if !self.within_group.is_empty() {
            write!(f, " WITHIN GROUP (ORDER BY {})", display_comma_separated(&self.within_group))?;
        }
        if let Some(filter) = &self.filter {
            write!(f, " FILTER (WHERE {filter})")?;
        }
        if let Some(over) = &self.over {
            write!(f, " OVER {over}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionArg {
    Unnamed(FunctionArgExpr),
    Named { name: Ident, arg: FunctionArgExpr },
}

impl fmt::Display for FunctionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionArg::Unnamed(e) => write!(f, "{e}"),
            FunctionArg::Named { name, arg } => write!(f, "{name} => {arg}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionArgExpr {
    Expr(Expression),
    Wildcard,
    QualifiedWildcard(ObjectName),
}

impl fmt::Display for FunctionArgExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionArgExpr::Expr(e) => write!(f, "{e}"),
            FunctionArgExpr::Wildcard => write!(f, "*"),
            FunctionArgExpr::QualifiedWildcard(name) => write!(f, "{name}.*"),
        }
    }
}

/// `INTERVAL 'value' leading [(leading_prec)] [TO last [(fractional_prec)]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub value: Box<Expression>,
    pub leading_field: Option<Ident>,
    pub leading_precision: Option<u64>,
    pub last_field: Option<Ident>,
    pub fractional_precision: Option<u64>,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INTERVAL {}", self.value)?;
        if let Some(leading) = &self.leading_field {
            write!(f, " {leading}")?;
        }
        if let Some(p) = self.leading_precision {
            write!(f, "({p})")?;
        }
        if let Some(last) = &self.last_field {
            write!(f, " TO {last}")?;
        }
        if let Some(p) = self.fractional_precision {
            write!(f, "({p})")?;
        }
        Ok(())
    }
}

/// The post-`*` modifiers §4.6 allows, applied in a fixed order (EXCLUDE before RENAME).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WildcardAdditionalOptions {
    pub opt_exclude: Vec<Ident>,
    pub opt_except: Vec<Ident>,
    pub opt_rename: Vec<(Ident, Ident)>,
    pub opt_replace: Vec<(Expression, Ident)>,
}

impl fmt::Display for WildcardAdditionalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.opt_exclude.is_empty() {
            write!(f, " EXCLUDE ({})", display_comma_separated(&self.opt_exclude))?;
        }
        if !self.opt_except.is_empty() {
            write!(f, " EXCEPT ({})", display_comma_separated(&self.opt_except))?;
        }
        if !self.opt_replace.is_empty() {
            let parts: Vec<String> = self
                .opt_replace
                .iter()
                .map(|(e, alias)| format!("{e} AS {alias}"))
                .collect();
            write!(f, " REPLACE ({})", parts.join(", "))?;
        }
        if !self.opt_rename.is_empty() {
            let parts: Vec<String> = self
                .opt_rename
                .iter()
                .map(|(from, to)| format!("{from} AS {to}"))
                .collect();
            write!(f, " RENAME ({})", parts.join(", "))?;
        }
        Ok(())
    }
}

/// `JsonAccess` path segment (§8 scenario 5): `a:foo[0].bar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonPathElem {
    Dot { key: Ident, quoted: bool },
    Bracket { key: Box<Expression> },
}

impl fmt::Display for JsonPathElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonPathElem::Dot { key, quoted } if *quoted => write!(f, ".\"{key}\""),
            JsonPathElem::Dot { key, .. } => write!(f, ".{key}"),
            JsonPathElem::Bracket { key } => write!(f, "[{key}]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    pub path: Vec<JsonPathElem>,
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.path.iter().enumerate() {
            if i == 0 {
                if let JsonPathElem::Dot { key, quoted } = elem {
                    if *quoted {
                        write!(f, ":\"{key}\"")?;
                    } else {
                        write!(f, ":{key}")?;
                    }
                    continue;
                }
            }
            write!(f, "{elem}")?;
        }
        Ok(())
    }
}

/// Closed sum of expressions (§3.2 `Expression`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(Ident),
    /// ≥2 parts (§3.2 invariant v); a single part uses [`Expression::Identifier`].
    CompoundIdentifier(Vec<Ident>),
    LiteralValue(Value),
    TypedString { value: String, data_type: DataType },
    BinaryOp { left: Box<Expression>, op: BinaryOperator, right: Box<Expression> },
    UnaryOp { op: UnaryOperator, expr: Box<Expression> },
    Cast { expr: Box<Expression>, data_type: DataType, kind: CastKind },
    Extract { field: Ident, syntax: ExtractSyntax, expr: Box<Expression> },
    Substring {
        expr: Box<Expression>,
        substring_from: Option<Box<Expression>>,
        substring_for: Option<Box<Expression>>,
    },
    Trim {
        expr: Box<Expression>,
        trim_where: Option<TrimWhereField>,
        trim_what: Option<Box<Expression>>,
    },
    Like { negated: bool, expr: Box<Expression>, pattern: Box<Expression>, escape_char: Option<char> },
    ILike { negated: bool, expr: Box<Expression>, pattern: Box<Expression>, escape_char: Option<char> },
    SimilarTo { negated: bool, expr: Box<Expression>, pattern: Box<Expression>, escape_char: Option<char> },
    /// `[NOT] REGEXP`/`[NOT] RLIKE`, MySQL's regex-match predicate. `RLIKE` is a synonym of
    /// `REGEXP` and canonicalizes to it on output.
    Regexp { negated: bool, expr: Box<Expression>, pattern: Box<Expression> },
    Between { negated: bool, expr: Box<Expression>, low: Box<Expression>, high: Box<Expression> },
    InList { negated: bool, expr: Box<Expression>, list: Vec<Expression> },
    InSubquery { negated: bool, expr: Box<Expression>, subquery: Box<Query> },
    InUnnest { negated: bool, expr: Box<Expression>, array_expr: Box<Expression> },
    Exists { negated: bool, subquery: Box<Query> },
    Subquery(Box<Query>),
    Case {
        operand: Option<Box<Expression>>,
        conditions: Vec<Expression>,
        results: Vec<Expression>,
        else_result: Option<Box<Expression>>,
    },
    Function(Function),
    MapAccess { expr: Box<Expression>, key: Box<Expression> },
    Subscript { expr: Box<Expression>, index: Box<Expression> },
    JsonAccess { expr: Box<Expression>, path: JsonPath },
    Tuple(Vec<Expression>),
    Array(Vec<Expression>),
    Struct(Vec<Expression>),
    Dictionary(Vec<(Ident, Box<Expression>)>),
    Interval(Interval),
    Wildcard,
    QualifiedWildcard(ObjectName, WildcardAdditionalOptions),
    Named { expr: Box<Expression>, alias: Ident },
    OuterJoin(Box<Expression>),
    Position { expr: Box<Expression>, r#in: Box<Expression> },
    Overlay {
        expr: Box<Expression>,
        overlay_what: Box<Expression>,
        overlay_from: Box<Expression>,
        overlay_for: Option<Box<Expression>>,
    },
    AtTimeZone { timestamp: Box<Expression>, time_zone: Box<Expression> },
    IsNull(Box<Expression>),
    IsNotNull(Box<Expression>),
    IsTrue(Box<Expression>),
    IsFalse(Box<Expression>),
    IsUnknown(Box<Expression>),
    IsDistinctFrom(Box<Expression>, Box<Expression>),
    IsNotDistinctFrom(Box<Expression>, Box<Expression>),
    Collate { expr: Box<Expression>, collation: ObjectName },
    IntroducedString { charset: String, value: Value },
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::CompoundIdentifier(parts) => write!(f, "{}", display_separated(parts, ".")),
            Expression::LiteralValue(v) => write!(f, "{v}"),
            Expression::TypedString { value, data_type } => write!(f, "{data_type} '{value}'"),
            Expression::BinaryOp { left, op, right } => {
                let prec = op.precedence();
                fmt_operand(f, left, prec, false)?;
                write!(f, " {op} ")?;
                fmt_operand(f, right, prec, true)
            }
            Expression::UnaryOp { op, expr } => {
                let prec = unary_precedence(op);
                match op {
                    UnaryOperator::Not => {
                        write!(f, "NOT ")?;
                        fmt_operand(f, expr, prec, true)
                    }
                    UnaryOperator::PGPostfixFactorial => {
                        fmt_operand(f, expr, prec, false)?;
                        write!(f, "{op}")
                    }
                    _ => {
                        write!(f, "{op}")?;
                        fmt_operand(f, expr, prec, true)
                    }
                }
            }
            Expression::Cast { expr, data_type, kind } => {
                let name = match kind {
                    CastKind::Cast => "CAST",
                    CastKind::TryCast => "TRY_CAST",
                    CastKind::SafeCast => "SAFE_CAST",
                };
                write!(f, "{name}({expr} AS {data_type})")
            }
            Expression::Extract { field, syntax, expr } => match syntax {
                ExtractSyntax::From => write!(f, "EXTRACT({field} FROM {expr})"),
                ExtractSyntax::Comma => write!(f, "EXTRACT({field}, {expr})"),
            },
            Expression::Substring { expr, substring_from, substring_for } => {
                write!(f, "SUBSTRING({expr}")?;
                if let Some(from) = substring_from {
                    write!(f, " FROM {from}")?;
                }
                if let Some(for_) = substring_for {
                    write!(f, " FOR {for_}")?;
                }
                write!(f, ")")
            }
            Expression::Trim { expr, trim_where, trim_what } => {
                write!(f, "TRIM(")?;
                if let Some(where_) = trim_where {
                    write!(f, "{where_} ")?;
                }
                if let Some(what) = trim_what {
                    write!(f, "{what} FROM ")?;
                }
                write!(f, "{expr})")
            }
            Expression::Like { negated, expr, pattern, escape_char } => {
                fmt_like(f, *negated, "LIKE", expr, pattern, *escape_char)
            }
            Expression::ILike { negated, expr, pattern, escape_char } => {
                fmt_like(f, *negated, "ILIKE", expr, pattern, *escape_char)
            }
            Expression::SimilarTo { negated, expr, pattern, escape_char } => {
                fmt_like(f, *negated, "SIMILAR TO", expr, pattern, *escape_char)
            }
            Expression::Regexp { negated, expr, pattern } => {
                fmt_like(f, *negated, "REGEXP", expr, pattern, None)
            }
            Expression::Between { negated, expr, low, high } => {
                let not = if *negated { "NOT " } else { "" };
                fmt_operand(f, expr, precedence::BETWEEN_LIKE, false)?;
                write!(f, " {not}BETWEEN ")?;
                fmt_operand(f, low, precedence::AND, true)?;
                write!(f, " AND ")?;
                fmt_operand(f, high, precedence::AND, true)
            }
            Expression::InList { negated, expr, list } => {
                let not = if *negated { "NOT " } else { "" };
                fmt_operand(f, expr, precedence::BETWEEN_LIKE, false)?;
                write!(f, " {not}IN ({})", display_comma_separated(list))
            }
            Expression::InSubquery { negated, expr, subquery } => {
                let not = if *negated { "NOT " } else { "" };
                fmt_operand(f, expr, precedence::BETWEEN_LIKE, false)?;
                write!(f, " {not}IN ({subquery})")
            }
            Expression::InUnnest { negated, expr, array_expr } => {
                let not = if *negated { "NOT " } else { "" };
                fmt_operand(f, expr, precedence::BETWEEN_LIKE, false)?;
                write!(f, " {not}IN UNNEST({array_expr})")
            }
            Expression::Exists { negated, subquery } => {
                let not = if *negated { "NOT " } else { "" };
                write!(f, "{not}EXISTS ({subquery})")
            }
            Expression::Subquery(q) => write!(f, "({q})"),
            Expression::Case { operand, conditions, results, else_result } => {
                write!(f, "CASE")?;
                if let Some(operand) = operand {
                    write!(f, " {operand}")?;
                }
                for (cond, res) in conditions.iter().zip(results) {
                    write!(f, " WHEN {cond} THEN {res}")?;
                }
                if let Some(else_result) = else_result {
                    write!(f, " ELSE {else_result}")?;
                }
                write!(f, " END")
            }
            Expression::Function(func) => write!(f, "{func}"),
            Expression::MapAccess { expr, key } => write!(f, "{expr}[{key}]"),
            Expression::Subscript { expr, index } => write!(f, "{expr}[{index}]"),
            Expression::JsonAccess { expr, path } => write!(f, "{expr}{path}"),
            Expression::Tuple(items) => write!(f, "({})", display_comma_separated(items)),
            Expression::Array(items) => write!(f, "[{}]", display_comma_separated(items)),
            Expression::Struct(items) => write!(f, "STRUCT({})", display_comma_separated(items)),
            Expression::Dictionary(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{k}': {v}")?;
                }
                write!(f, "}}")
            }
            Expression::Interval(interval) => write!(f, "{interval}"),
            Expression::Wildcard => write!(f, "*"),
            Expression::QualifiedWildcard(name, opts) => write!(f, "{name}.*{opts}"),
            Expression::Named { expr, alias } => write!(f, "{expr} AS {alias}"),
            Expression::OuterJoin(expr) => write!(f, "{expr} (+)"),
            Expression::Position { expr, r#in } => write!(f, "POSITION({expr} IN {in})"),
            Expression::Overlay { expr, overlay_what, overlay_from, overlay_for } => {
                write!(f, "OVERLAY({expr} PLACING {overlay_what} FROM {overlay_from}")?;
                if let Some(for_) = overlay_for {
                    write!(f, " FOR {for_}")?;
                }
                write!(f, ")")
            }
            Expression::AtTimeZone { timestamp, time_zone } => {
                fmt_operand(f, timestamp, precedence::AT_TIME_ZONE, false)?;
                write!(f, " AT TIME ZONE {time_zone}")
            }
            Expression::IsNull(e) => {
                fmt_operand(f, e, precedence::IS, false)?;
                write!(f, " IS NULL")
            }
            Expression::IsNotNull(e) => {
                fmt_operand(f, e, precedence::IS, false)?;
                write!(f, " IS NOT NULL")
            }
            Expression::IsTrue(e) => {
                fmt_operand(f, e, precedence::IS, false)?;
                write!(f, " IS TRUE")
            }
            Expression::IsFalse(e) => {
                fmt_operand(f, e, precedence::IS, false)?;
                write!(f, " IS FALSE")
            }
            Expression::IsUnknown(e) => {
                fmt_operand(f, e, precedence::IS, false)?;
                write!(f, " IS UNKNOWN")
            }
            Expression::IsDistinctFrom(l, r) => {
                fmt_operand(f, l, precedence::IS, false)?;
                write!(f, " IS DISTINCT FROM ")?;
                fmt_operand(f, r, precedence::IS, true)
            }
            Expression::IsNotDistinctFrom(l, r) => {
                fmt_operand(f, l, precedence::IS, false)?;
                write!(f, " IS NOT DISTINCT FROM ")?;
                fmt_operand(f, r, precedence::IS, true)
            }
            Expression::Collate { expr, collation } => {
                fmt_operand(f, expr, precedence::DOUBLE_COLON, false)?;
                write!(f, " COLLATE {collation}")
            }
            Expression::IntroducedString { charset, value } => write!(f, "{charset} {value}"),
        }
    }
}

fn fmt_like(
    f: &mut fmt::Formatter<'_>,
    negated: bool,
    op: &str,
    expr: &Expression,
    pattern: &Expression,
    escape_char: Option<char>,
) -> fmt::Result {
    let not = if negated { "NOT " } else { "" };
    fmt_operand(f, expr, precedence::LIKE, false)?;
    write!(f, " {not}{op} ")?;
    fmt_operand(f, pattern, precedence::LIKE, true)?;
    if let Some(escape) = escape_char {
        write!(f, " ESCAPE '{escape}'")?;
    }
    Ok(())
}

fn unary_precedence(op: &UnaryOperator) -> Precedence {
    match op {
        UnaryOperator::Not => precedence::UNARY_NOT,
        UnaryOperator::PGPostfixFactorial => precedence::MUL_DIV_MOD,
        UnaryOperator::Plus
        | UnaryOperator::Minus
        | UnaryOperator::PGBitwiseNot
        | UnaryOperator::PGSquareRoot
        | UnaryOperator::PGCubeRoot
        | UnaryOperator::PGAbs => precedence::PLUS_MINUS,
    }
}

/// The binding power `expr` holds as a displayed unit. `None` means it's already self-delimiting
/// (identifiers, literals, `func(...)`, `CASE...END`, bracketed subqueries, …) and never needs
/// parens no matter what it sits next to.
fn display_precedence(expr: &Expression) -> Option<Precedence> {
    match expr {
        Expression::BinaryOp { op, .. } => Some(op.precedence()),
        Expression::UnaryOp { op, .. } => Some(unary_precedence(op)),
        Expression::Like { .. } | Expression::ILike { .. } | Expression::SimilarTo { .. } | Expression::Regexp { .. } => {
            Some(precedence::LIKE)
        }
        Expression::Between { .. }
        | Expression::InList { .. }
        | Expression::InSubquery { .. }
        | Expression::InUnnest { .. } => Some(precedence::BETWEEN_LIKE),
        Expression::IsNull(_)
        | Expression::IsNotNull(_)
        | Expression::IsTrue(_)
        | Expression::IsFalse(_)
        | Expression::IsUnknown(_)
        | Expression::IsDistinctFrom(_, _)
        | Expression::IsNotDistinctFrom(_, _) => Some(precedence::IS),
        Expression::AtTimeZone { .. } => Some(precedence::AT_TIME_ZONE),
        Expression::Collate { .. } => Some(precedence::DOUBLE_COLON),
        _ => None,
    }
}

/// Writes `expr` as an operand of something binding at `parent` precedence, wrapping it in
/// parens when omitting them would let it re-associate differently on re-parse (§8 round-trip
/// law). `is_right` additionally parenthesizes an operand at exactly `parent`'s own precedence,
/// since the parser builds left-associative trees: the right child of `a - b - c` can't be
/// printed unparenthesized at the same precedence without changing its grouping.
fn fmt_operand(f: &mut fmt::Formatter<'_>, expr: &Expression, parent: Precedence, is_right: bool) -> fmt::Result {
    match display_precedence(expr) {
        Some(child) if child < parent || (is_right && child == parent) => write!(f, "({expr})"),
        _ => write!(f, "{expr}"),
    }
}
