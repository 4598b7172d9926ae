//! `Query` and `Select` (§3.3 "Query model").

use std::fmt;

use super::expr::Expression;
use super::ident::{display_comma_separated, Ident, ObjectName};
use super::statement::Statement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByExpr {
    pub expr: Expression,
    pub asc: Option<bool>,
    pub nulls_first: Option<bool>,
}

impl fmt::Display for OrderByExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        match self.asc {
            Some(true) => write!(f, " ASC")?,
            Some(false) => write!(f, " DESC")?,
            None => {}
        }
        match self.nulls_first {
            Some(true) => write!(f, " NULLS FIRST")?,
            Some(false) => write!(f, " NULLS LAST")?,
            None => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cte {
    pub alias: Ident,
    pub column_aliases: Vec<Ident>,
    pub query: Box<Query>,
    pub materialized: Option<bool>,
}

impl fmt::Display for Cte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alias)?;
        if !self.column_aliases.is_empty() {
            write!(f, " ({})", display_comma_separated(&self.column_aliases))?;
        }
        write!(f, " AS ")?;
        match self.materialized {
            Some(true) => write!(f, "MATERIALIZED ")?,
            Some(false) => write!(f, "NOT MATERIALIZED ")?,
            None => {}
        }
        write!(f, "({})", self.query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct With {
    pub recursive: bool,
    pub cte_tables: Vec<Cte>,
}

impl fmt::Display for With {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WITH ")?;
        if self.recursive {
            write!(f, "RECURSIVE ")?;
        }
        write!(f, "{}", display_comma_separated(&self.cte_tables))
    }
}

/// The top-level query wrapper: optional `WITH`, a body, then `ORDER BY`/`LIMIT`/`OFFSET`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub with: Option<With>,
    pub body: Box<SetExpression>,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<Expression>,
    pub offset: Option<Expression>,
    pub fetch: Option<Fetch>,
    pub locks: Vec<LockClause>,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(with) = &self.with {
            write!(f, "{with} ")?;
        }
        write!(f, "{}", self.body)?;
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY {}", display_comma_separated(&self.order_by))?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        if let Some(offset) = &self.offset {
            write!(f, " OFFSET {offset}")?;
        }
        if let Some(fetch) = &self.fetch {
            write!(f, " {fetch}")?;
        }
        for lock in &self.locks {
            write!(f, " {lock}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetch {
    pub with_ties: bool,
    pub percent: bool,
    pub quantity: Option<Expression>,
}

impl fmt::Display for Fetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FETCH FIRST")?;
        if let Some(q) = &self.quantity {
            write!(f, " {q}")?;
            if self.percent {
                write!(f, " PERCENT")?;
            }
        }
        if self.with_ties {
            write!(f, " ROWS WITH TIES")
        } else {
            write!(f, " ROWS ONLY")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockType {
    Share,
    Update,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockClause {
    pub lock_type: LockType,
    pub of: Option<ObjectName>,
    pub nonblocking: Option<NonBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonBlock {
    Nowait,
    SkipLocked,
}

impl fmt::Display for LockClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lock_type {
            LockType::Share => write!(f, "FOR SHARE")?,
            LockType::Update => write!(f, "FOR UPDATE")?,
        }
        if let Some(of) = &self.of {
            write!(f, " OF {of}")?;
        }
        match self.nonblocking {
            Some(NonBlock::Nowait) => write!(f, " NOWAIT")?,
            Some(NonBlock::SkipLocked) => write!(f, " SKIP LOCKED")?,
            None => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    Except,
    Intersect,
}

impl fmt::Display for SetOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SetOperator::Union => "UNION",
            SetOperator::Except => "EXCEPT",
            SetOperator::Intersect => "INTERSECT",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetQuantifier {
    All,
    Distinct,
    None,
}

impl fmt::Display for SetQuantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetQuantifier::All => write!(f, " ALL"),
            SetQuantifier::Distinct => write!(f, " DISTINCT"),
            SetQuantifier::None => Ok(()),
        }
    }
}

/// The body of a [`Query`]: either a single `SELECT`, a parenthesized sub-query, a set operation
/// combining two bodies, an explicit `VALUES` list, or (dialects that allow it) a bare `INSERT`,
/// `UPDATE`, or table reference used as a query (§3.3 invariant ii).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetExpression {
    Select(Box<Select>),
    Query(Box<Query>),
    SetOperation {
        left: Box<SetExpression>,
        op: SetOperator,
        set_quantifier: SetQuantifier,
        right: Box<SetExpression>,
    },
    Values(Values),
    Insert(Box<Statement>),
    Update(Box<Statement>),
    Table(TableFactor),
}

impl fmt::Display for SetExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetExpression::Select(select) => write!(f, "{select}"),
            SetExpression::Query(q) => write!(f, "({q})"),
            SetExpression::SetOperation { left, op, set_quantifier, right } => {
                write!(f, "{left} {op}{set_quantifier} {right}")
            }
            SetExpression::Values(values) => write!(f, "{values}"),
            SetExpression::Insert(stmt) => write!(f, "{stmt}"),
            SetExpression::Update(stmt) => write!(f, "{stmt}"),
            SetExpression::Table(table) => write!(f, "{table}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Values {
    pub explicit_row: bool,
    pub rows: Vec<Vec<Expression>>,
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VALUES ")?;
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                if self.explicit_row {
                    format!("ROW({})", display_comma_separated(row))
                } else {
                    format!("({})", display_comma_separated(row))
                }
            })
            .collect();
        write!(f, "{}", rows.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupByKind {
    /// Plain `GROUP BY a, b`.
    Plain,
    All,
    Cube,
    Rollup,
    GroupingSets,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupByClause {
    None,
    Expressions { kind: GroupByKind, exprs: Vec<Expression> },
}

impl fmt::Display for GroupByClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupByClause::None => Ok(()),
            GroupByClause::Expressions { kind: GroupByKind::All, .. } => {
                write!(f, " GROUP BY ALL")
            }
            GroupByClause::Expressions { kind: GroupByKind::Plain, exprs } => {
                write!(f, " GROUP BY {}", display_comma_separated(exprs))
            }
            GroupByClause::Expressions { kind: GroupByKind::Cube, exprs } => {
                write!(f, " GROUP BY CUBE ({})", display_comma_separated(exprs))
            }
            GroupByClause::Expressions { kind: GroupByKind::Rollup, exprs } => {
                write!(f, " GROUP BY ROLLUP ({})", display_comma_separated(exprs))
            }
            GroupByClause::Expressions { kind: GroupByKind::GroupingSets, exprs } => {
                write!(f, " GROUP BY GROUPING SETS ({})", display_comma_separated(exprs))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopQuantity {
    RowCount(u64),
    Percent(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Top {
    pub quantity: Option<Expression>,
    pub percent: bool,
    pub with_ties: bool,
}

impl fmt::Display for Top {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TOP")?;
        if let Some(q) = &self.quantity {
            write!(f, " {q}")?;
        }
        if self.percent {
            write!(f, " PERCENT")?;
        }
        if self.with_ties {
            write!(f, " WITH TIES")?;
        }
        Ok(())
    }
}

/// A `SELECT` body (§3.3). Field order in `Display` follows SQL clause order, not struct
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub distinct: Option<Distinct>,
    pub top: Option<Top>,
    pub projection: Vec<SelectItem>,
    pub value_table_mode: Option<ValueTableMode>,
    pub from: Vec<TableWithJoins>,
    pub selection: Option<Expression>,
    pub group_by: GroupByClause,
    pub having: Option<Expression>,
    pub qualify: Option<Expression>,
    pub named_window: Vec<(Ident, super::expr::WindowSpec)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTableMode {
    /// BigQuery `SELECT AS VALUE`.
    Value,
    /// BigQuery `SELECT AS STRUCT`.
    Struct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Distinct {
    Distinct,
    On(Vec<Expression>),
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT")?;
        match &self.distinct {
            Some(Distinct::Distinct) => write!(f, " DISTINCT")?,
            Some(Distinct::On(exprs)) => write!(f, " DISTINCT ON ({})", display_comma_separated(exprs))?,
            None => {}
        }
        if let Some(top) = &self.top {
            write!(f, " {top}")?;
        }
        match self.value_table_mode {
            Some(ValueTableMode::Value) => write!(f, " AS VALUE")?,
            Some(ValueTableMode::Struct) => write!(f, " AS STRUCT")?,
            None => {}
        }
        write!(f, " {}", display_comma_separated(&self.projection))?;
        if !self.from.is_empty() {
            write!(f, " FROM {}", display_comma_separated(&self.from))?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE {selection}")?;
        }
        write!(f, "{}", self.group_by)?;
        if let Some(having) = &self.having {
            write!(f, " HAVING {having}")?;
        }
        if let Some(qualify) = &self.qualify {
            write!(f, " QUALIFY {qualify}")?;
        }
        if !self.named_window.is_empty() {
            write!(f, " WINDOW ")?;
            let parts: Vec<String> =
                self.named_window.iter().map(|(name, spec)| format!("{name} AS ({spec})")).collect();
            write!(f, "{}", parts.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectItem {
    UnnamedExpr(Expression),
    ExprWithAlias { expr: Expression, alias: Ident },
    Wildcard(super::expr::WildcardAdditionalOptions),
    QualifiedWildcard(ObjectName, super::expr::WildcardAdditionalOptions),
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectItem::UnnamedExpr(e) => write!(f, "{e}"),
            SelectItem::ExprWithAlias { expr, alias } => write!(f, "{expr} AS {alias}"),
            SelectItem::Wildcard(opts) => write!(f, "*{opts}"),
            SelectItem::QualifiedWildcard(name, opts) => write!(f, "{name}.*{opts}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableWithJoins {
    pub relation: TableFactor,
    pub joins: Vec<Join>,
}

impl fmt::Display for TableWithJoins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relation)?;
        for join in &self.joins {
            write!(f, " {join}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAliasColumns {
    None,
    Columns(Vec<Ident>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAlias {
    pub name: Ident,
    pub columns: Vec<Ident>,
}

impl fmt::Display for TableAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.columns.is_empty() {
            write!(f, " ({})", display_comma_separated(&self.columns))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableFactor {
    Table {
        name: ObjectName,
        alias: Option<TableAlias>,
        args: Option<Vec<super::expr::FunctionArg>>,
    },
    Derived {
        lateral: bool,
        subquery: Box<Query>,
        alias: Option<TableAlias>,
    },
    Unnest {
        alias: Option<TableAlias>,
        array_exprs: Vec<Expression>,
        with_offset: bool,
        with_offset_alias: Option<Ident>,
    },
    NestedJoin {
        table_with_joins: Box<TableWithJoins>,
        alias: Option<TableAlias>,
    },
    Pivot {
        table: Box<TableFactor>,
        aggregate_functions: Vec<super::expr::Function>,
        value_column: Vec<Ident>,
        value_source: Vec<Expression>,
        alias: Option<TableAlias>,
    },
    Unpivot {
        table: Box<TableFactor>,
        value: Ident,
        name: Ident,
        columns: Vec<Ident>,
        alias: Option<TableAlias>,
    },
}

impl fmt::Display for TableFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFactor::Table { name, alias, args } => {
                write!(f, "{name}")?;
                if let Some(args) = args {
                    write!(f, "({})", display_comma_separated(args))?;
                }
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::Derived { lateral, subquery, alias } => {
                if *lateral {
                    write!(f, "LATERAL ")?;
                }
                write!(f, "({subquery})")?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::Unnest { alias, array_exprs, with_offset, with_offset_alias } => {
                write!(f, "UNNEST({})", display_comma_separated(array_exprs))?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                if *with_offset {
                    write!(f, " WITH OFFSET")?;
                    if let Some(alias) = with_offset_alias {
                        write!(f, " AS {alias}")?;
                    }
                }
                Ok(())
            }
            TableFactor::NestedJoin { table_with_joins, alias } => {
                write!(f, "({table_with_joins})")?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::Pivot { table, aggregate_functions, value_column, value_source, alias } => {
                write!(
                    f,
                    "{table} PIVOT({} FOR {} IN ({}))",
                    display_comma_separated(aggregate_functions),
                    display_comma_separated(value_column),
                    display_comma_separated(value_source)
                )?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            TableFactor::Unpivot { table, value, name, columns, alias } => {
                write!(
                    f,
                    "{table} UNPIVOT({value} FOR {name} IN ({}))",
                    display_comma_separated(columns)
                )?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOperator {
    Inner(JoinConstraint),
    LeftOuter(JoinConstraint),
    RightOuter(JoinConstraint),
    FullOuter(JoinConstraint),
    CrossJoin,
    CrossApply,
    OuterApply,
    LeftSemi(JoinConstraint),
    RightSemi(JoinConstraint),
    LeftAnti(JoinConstraint),
    RightAnti(JoinConstraint),
    AsOf { constraint: JoinConstraint, match_condition: Expression },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinConstraint {
    On(Expression),
    Using(Vec<Ident>),
    Natural,
    None,
}

impl fmt::Display for JoinConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinConstraint::On(expr) => write!(f, " ON {expr}"),
            JoinConstraint::Using(cols) => write!(f, " USING ({})", display_comma_separated(cols)),
            JoinConstraint::Natural | JoinConstraint::None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub relation: TableFactor,
    pub join_operator: JoinOperator,
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn natural_prefix(constraint: &JoinConstraint) -> &'static str {
            if matches!(constraint, JoinConstraint::Natural) {
                "NATURAL "
            } else {
                ""
            }
        }
        match &self.join_operator {
            JoinOperator::Inner(c) => write!(f, "{}JOIN {}{c}", natural_prefix(c), self.relation),
            JoinOperator::LeftOuter(c) => {
                write!(f, "{}LEFT JOIN {}{c}", natural_prefix(c), self.relation)
            }
            JoinOperator::RightOuter(c) => {
                write!(f, "{}RIGHT JOIN {}{c}", natural_prefix(c), self.relation)
            }
            JoinOperator::FullOuter(c) => {
                write!(f, "{}FULL JOIN {}{c}", natural_prefix(c), self.relation)
            }
            JoinOperator::CrossJoin => write!(f, "CROSS JOIN {}", self.relation),
            JoinOperator::CrossApply => write!(f, "CROSS APPLY {}", self.relation),
            JoinOperator::OuterApply => write!(f, "OUTER APPLY {}", self.relation),
            JoinOperator::LeftSemi(c) => write!(f, "LEFT SEMI JOIN {}{c}", self.relation),
            JoinOperator::RightSemi(c) => write!(f, "RIGHT SEMI JOIN {}{c}", self.relation),
            JoinOperator::LeftAnti(c) => write!(f, "LEFT ANTI JOIN {}{c}", self.relation),
            JoinOperator::RightAnti(c) => write!(f, "RIGHT ANTI JOIN {}{c}", self.relation),
            JoinOperator::AsOf { constraint, match_condition } => {
                write!(f, "ASOF JOIN {} MATCH_CONDITION({match_condition}){constraint}", self.relation)
            }
        }
    }
}
