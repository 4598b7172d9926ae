//! Abstract syntax tree (§3.2 `Expression`, §3.3 `Query`, §3.4 `Statement`).

pub mod data_type;
pub mod expr;
pub mod ident;
pub mod operator;
pub mod query;
pub mod statement;
pub mod value;

pub use data_type::{DataType, ExactNumberInfo, StructBracketKind, StructField, TimezoneInfo};
pub use expr::{
    CastKind, Expression, ExtractSyntax, Function, FunctionArg, FunctionArgExpr, Interval,
    JsonPath, JsonPathElem, NullTreatment, TrimWhereField, WildcardAdditionalOptions, WindowFrame,
    WindowFrameBound, WindowFrameBoundKind, WindowFrameUnits, WindowSpec, WindowType,
};
pub use ident::{display_comma_separated, display_separated, Ident, ObjectName};
pub use operator::{BinaryOperator, UnaryOperator};
pub use query::{
    Cte, Distinct, Fetch, GroupByClause, GroupByKind, Join, JoinConstraint, JoinOperator,
    LockClause, LockType, NonBlock, OrderByExpr, Query, Select, SelectItem, SetExpression,
    SetOperator, SetQuantifier, TableAlias, TableFactor, TableWithJoins, Top, TopQuantity,
    ValueTableMode, Values, With,
};
pub use statement::{
    AlterTableOperation, Assignment, ColumnDef, ColumnOption, Declare, DeclareKind, MergeClause,
    MergeClauseKind, ObjectType, OnConflict, OnConflictAction, Statement, TableConstraint,
};
pub use value::Value;
