//! Top-level statements (§3.4 "Statement").

use std::fmt;

use super::data_type::DataType;
use super::expr::Expression;
use super::ident::{display_comma_separated, Ident, ObjectName};
use super::query::{Query, TableAlias};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: Ident,
    pub data_type: DataType,
    pub collation: Option<ObjectName>,
    pub options: Vec<ColumnOption>,
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)?;
        if let Some(collation) = &self.collation {
            write!(f, " COLLATE {collation}")?;
        }
        for option in &self.options {
            write!(f, " {option}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnOption {
    Null,
    NotNull,
    Default(Expression),
    Unique { is_primary: bool },
    ForeignKey { foreign_table: ObjectName, referred_columns: Vec<Ident> },
    Check(Expression),
    Comment(String),
    AutoIncrement,
    Generated { expr: Expression, stored: bool },
}

impl fmt::Display for ColumnOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnOption::Null => write!(f, "NULL"),
            ColumnOption::NotNull => write!(f, "NOT NULL"),
            ColumnOption::Default(expr) => write!(f, "DEFAULT {expr}"),
            ColumnOption::Unique { is_primary: true } => write!(f, "PRIMARY KEY"),
            ColumnOption::Unique { is_primary: false } => write!(f, "UNIQUE"),
            ColumnOption::ForeignKey { foreign_table, referred_columns } => {
                write!(f, "REFERENCES {foreign_table}")?;
                if !referred_columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(referred_columns))?;
                }
                Ok(())
            }
            ColumnOption::Check(expr) => write!(f, "CHECK ({expr})"),
            ColumnOption::Comment(s) => write!(f, "COMMENT '{s}'"),
            ColumnOption::AutoIncrement => write!(f, "AUTO_INCREMENT"),
            ColumnOption::Generated { expr, stored } => {
                write!(f, "GENERATED ALWAYS AS ({expr})")?;
                if *stored {
                    write!(f, " STORED")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraint {
    Unique { name: Option<Ident>, columns: Vec<Ident>, is_primary: bool },
    ForeignKey {
        name: Option<Ident>,
        columns: Vec<Ident>,
        foreign_table: ObjectName,
        referred_columns: Vec<Ident>,
    },
    Check { name: Option<Ident>, expr: Expression },
}

impl fmt::Display for TableConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn fmt_name(f: &mut fmt::Formatter<'_>, name: &Option<Ident>) -> fmt::Result {
            if let Some(name) = name {
                write!(f, "CONSTRAINT {name} ")?;
            }
            Ok(())
        }
        match self {
            TableConstraint::Unique { name, columns, is_primary } => {
                fmt_name(f, name)?;
                let kw = if *is_primary { "PRIMARY KEY" } else { "UNIQUE" };
                write!(f, "{kw} ({})", display_comma_separated(columns))
            }
            TableConstraint::ForeignKey { name, columns, foreign_table, referred_columns } => {
                fmt_name(f, name)?;
                write!(
                    f,
                    "FOREIGN KEY ({}) REFERENCES {foreign_table} ({})",
                    display_comma_separated(columns),
                    display_comma_separated(referred_columns)
                )
            }
            TableConstraint::Check { name, expr } => {
                fmt_name(f, name)?;
                write!(f, "CHECK ({expr})")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlterTableOperationKind {
    AddColumn,
    DropColumn,
    RenameColumn,
    RenameTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterTableOperation {
    AddColumn { column_def: ColumnDef, if_not_exists: bool },
    DropColumn { column_name: Ident, if_exists: bool, cascade: bool },
    RenameColumn { old_column_name: Ident, new_column_name: Ident },
    RenameTable { table_name: ObjectName },
    AddConstraint(TableConstraint),
    DropConstraint { name: Ident, if_exists: bool },
}

impl fmt::Display for AlterTableOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlterTableOperation::AddColumn { column_def, if_not_exists } => {
                write!(f, "ADD COLUMN ")?;
                if *if_not_exists {
                    write!(f, "IF NOT EXISTS ")?;
                }
                write!(f, "{column_def}")
            }
            AlterTableOperation::DropColumn { column_name, if_exists, cascade } => {
                write!(f, "DROP COLUMN ")?;
                if *if_exists {
                    write!(f, "IF EXISTS ")?;
                }
                write!(f, "{column_name}")?;
                if *cascade {
                    write!(f, " CASCADE")?;
                }
                Ok(())
            }
            AlterTableOperation::RenameColumn { old_column_name, new_column_name } => {
                write!(f, "RENAME COLUMN {old_column_name} TO {new_column_name}")
            }
            AlterTableOperation::RenameTable { table_name } => write!(f, "RENAME TO {table_name}"),
            AlterTableOperation::AddConstraint(c) => write!(f, "ADD {c}"),
            AlterTableOperation::DropConstraint { name, if_exists } => {
                write!(f, "DROP CONSTRAINT ")?;
                if *if_exists {
                    write!(f, "IF EXISTS ")?;
                }
                write!(f, "{name}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Table,
    View,
    Index,
    Schema,
    Role,
    Sequence,
    Stage,
    Function,
    Procedure,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObjectType::Table => "TABLE",
            ObjectType::View => "VIEW",
            ObjectType::Index => "INDEX",
            ObjectType::Schema => "SCHEMA",
            ObjectType::Role => "ROLE",
            ObjectType::Sequence => "SEQUENCE",
            ObjectType::Stage => "STAGE",
            ObjectType::Function => "FUNCTION",
            ObjectType::Procedure => "PROCEDURE",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclareKind {
    /// BigQuery `DECLARE x, y INT64 DEFAULT 0`.
    BigQuery,
    /// Snowflake `DECLARE x INT DEFAULT 0` / `DECLARE c CURSOR FOR ...`.
    Snowflake,
    /// MsSql `DECLARE @x INT = 0`.
    MsSql,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declare {
    pub kind: DeclareKind,
    pub names: Vec<Ident>,
    pub data_type: Option<DataType>,
    pub assignment: Option<Expression>,
    pub for_query: Option<Box<Query>>,
}

impl fmt::Display for Declare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DECLARE {}", display_comma_separated(&self.names))?;
        if let Some(data_type) = &self.data_type {
            write!(f, " {data_type}")?;
        }
        if let Some(query) = &self.for_query {
            write!(f, " CURSOR FOR {query}")?;
        }
        match self.kind {
            DeclareKind::MsSql => {
                if let Some(expr) = &self.assignment {
                    write!(f, " = {expr}")?;
                }
            }
            DeclareKind::BigQuery | DeclareKind::Snowflake => {
                if let Some(expr) = &self.assignment {
                    write!(f, " DEFAULT {expr}")?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: Vec<Ident>,
    pub value: Expression,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", display_comma_separated(&self.id), self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnConflict {
    pub conflict_target: Vec<Ident>,
    pub action: OnConflictAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnConflictAction {
    DoNothing,
    DoUpdate(Vec<Assignment>),
}

impl fmt::Display for OnConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ON CONFLICT")?;
        if !self.conflict_target.is_empty() {
            write!(f, " ({})", display_comma_separated(&self.conflict_target))?;
        }
        match &self.action {
            OnConflictAction::DoNothing => write!(f, " DO NOTHING"),
            OnConflictAction::DoUpdate(assignments) => {
                write!(f, " DO UPDATE SET {}", display_comma_separated(assignments))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeClauseKind {
    MatchedUpdate(Vec<Assignment>),
    MatchedDelete,
    NotMatchedInsert { columns: Vec<Ident>, values: Vec<Expression> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeClause {
    pub predicate: Option<Expression>,
    pub kind: MergeClauseKind,
}

impl fmt::Display for MergeClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MergeClauseKind::MatchedUpdate(_) | MergeClauseKind::MatchedDelete => {
                write!(f, "WHEN MATCHED")?
            }
            MergeClauseKind::NotMatchedInsert { .. } => write!(f, "WHEN NOT MATCHED")?,
        }
        if let Some(pred) = &self.predicate {
            write!(f, " AND {pred}")?;
        }
        write!(f, " THEN ")?;
        match &self.kind {
            MergeClauseKind::MatchedUpdate(assignments) => {
                write!(f, "UPDATE SET {}", display_comma_separated(assignments))
            }
            MergeClauseKind::MatchedDelete => write!(f, "DELETE"),
            MergeClauseKind::NotMatchedInsert { columns, values } => {
                write!(
                    f,
                    "INSERT ({}) VALUES ({})",
                    display_comma_separated(columns),
                    display_comma_separated(values)
                )
            }
        }
    }
}

/// Closed sum of statements (§3.4). Each variant names one SQL statement kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Query(Box<Query>),
    Insert {
        table_name: ObjectName,
        columns: Vec<Ident>,
        source: Option<Box<Query>>,
        on_conflict: Option<OnConflict>,
        overwrite: bool,
    },
    Update {
        table: ObjectName,
        alias: Option<TableAlias>,
        assignments: Vec<Assignment>,
        from: Option<ObjectName>,
        selection: Option<Expression>,
    },
    Delete {
        table_name: ObjectName,
        using: Option<ObjectName>,
        selection: Option<Expression>,
    },
    CreateTable {
        or_replace: bool,
        temporary: bool,
        if_not_exists: bool,
        name: ObjectName,
        columns: Vec<ColumnDef>,
        constraints: Vec<TableConstraint>,
        like: Option<ObjectName>,
        query: Option<Box<Query>>,
        engine: Option<String>,
    },
    CreateView {
        or_replace: bool,
        materialized: bool,
        name: ObjectName,
        columns: Vec<Ident>,
        query: Box<Query>,
    },
    CreateIndex {
        name: Option<ObjectName>,
        table_name: ObjectName,
        columns: Vec<Ident>,
        unique: bool,
        if_not_exists: bool,
    },
    CreateStage {
        or_replace: bool,
        temporary: bool,
        if_not_exists: bool,
        name: ObjectName,
        url: Option<String>,
        file_format: Vec<(Ident, Expression)>,
    },
    CreateRole {
        names: Vec<ObjectName>,
        if_not_exists: bool,
    },
    CreateFunction {
        or_replace: bool,
        name: ObjectName,
        args: Vec<(Ident, DataType)>,
        return_type: Option<DataType>,
        language: Option<Ident>,
        body: Box<Expression>,
    },
    CreateMacro {
        or_replace: bool,
        name: ObjectName,
        args: Vec<Ident>,
        definition: Box<Expression>,
    },
    CreateSecret {
        or_replace: bool,
        temporary: bool,
        if_not_exists: bool,
        name: Option<Ident>,
        secret_type: Ident,
        options: Vec<(Ident, Expression)>,
    },
    CreateVirtualTable {
        name: ObjectName,
        if_not_exists: bool,
        module_name: Ident,
        module_args: Vec<Ident>,
    },
    AlterTable {
        name: ObjectName,
        if_exists: bool,
        operations: Vec<AlterTableOperation>,
    },
    AlterRole {
        name: Ident,
        operation: String,
    },
    Drop {
        object_type: ObjectType,
        if_exists: bool,
        names: Vec<ObjectName>,
        cascade: bool,
    },
    DropSecret {
        if_exists: bool,
        temporary: bool,
        name: Ident,
    },
    Truncate {
        table_name: ObjectName,
        cascade: bool,
    },
    ShowTables {
        full: bool,
        db_name: Option<Ident>,
        filter: Option<String>,
    },
    ShowColumns {
        table_name: ObjectName,
        filter: Option<String>,
    },
    ShowVariable {
        variable: Vec<Ident>,
    },
    ShowCreate {
        object_type: ObjectType,
        name: ObjectName,
    },
    Use {
        name: ObjectName,
    },
    Pragma {
        name: ObjectName,
        value: Option<Expression>,
        is_eq: bool,
    },
    Declare(Vec<Declare>),
    Flush {
        object_type: Option<Ident>,
        tables: Vec<ObjectName>,
    },
    Kill {
        modifier: Option<Ident>,
        id: u64,
    },
    Comment {
        object_type: ObjectType,
        name: ObjectName,
        comment: Option<String>,
    },
    Commit {
        chain: bool,
    },
    Rollback {
        chain: bool,
    },
    Merge {
        into: bool,
        table: ObjectName,
        source: Box<super::query::TableFactor>,
        on: Box<Expression>,
        clauses: Vec<MergeClause>,
    },
    CopyIntoSnowflake {
        into: ObjectName,
        from_stage: Ident,
        file_format: Vec<(Ident, Expression)>,
    },
    AttachDatabase {
        database: Ident,
        schema_name: Ident,
    },
    AttachDuckDbDatabase {
        if_not_exists: bool,
        database: Ident,
        path: Ident,
        alias: Option<Ident>,
    },
    DetachDuckDbDatabase {
        if_exists: bool,
        alias: Ident,
    },
    Install {
        extension_name: Ident,
    },
    Load {
        extension_name: Ident,
    },
    SetVariable {
        local: bool,
        variables: Vec<Ident>,
        value: Vec<Expression>,
    },
    SetNames {
        charset_name: Ident,
        collation_name: Option<Ident>,
    },
    Explain {
        analyze: bool,
        verbose: bool,
        statement: Box<Statement>,
    },
    ExplainTable {
        table_name: ObjectName,
    },
    If {
        condition: Box<Expression>,
        then_statements: Vec<Statement>,
        else_statements: Vec<Statement>,
    },
    CreateProcedure {
        or_replace: bool,
        name: ObjectName,
        params: Vec<(Ident, DataType)>,
        body: Vec<Statement>,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Query(q) => write!(f, "{q}"),
            Statement::Insert { table_name, columns, source, on_conflict, overwrite } => {
                write!(f, "INSERT ")?;
                if *overwrite {
                    write!(f, "OVERWRITE ")?;
                }
                write!(f, "INTO {table_name}")?;
                if !columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(columns))?;
                }
                match source {
                    Some(query) => write!(f, " {query}")?,
                    None => write!(f, " DEFAULT VALUES")?,
                }
                if let Some(on_conflict) = on_conflict {
                    write!(f, " {on_conflict}")?;
                }
                Ok(())
            }
            Statement::Update { table, alias, assignments, from, selection } => {
                write!(f, "UPDATE {table}")?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                write!(f, " SET {}", display_comma_separated(assignments))?;
                if let Some(from) = from {
                    write!(f, " FROM {from}")?;
                }
                if let Some(selection) = selection {
                    write!(f, " WHERE {selection}")?;
                }
                Ok(())
            }
            Statement::Delete { table_name, using, selection } => {
                write!(f, "DELETE FROM {table_name}")?;
                if let Some(using) = using {
                    write!(f, " USING {using}")?;
                }
                if let Some(selection) = selection {
                    write!(f, " WHERE {selection}")?;
                }
                Ok(())
            }
            Statement::CreateTable {
                or_replace,
                temporary,
                if_not_exists,
                name,
                columns,
                constraints,
                like,
                query,
                engine,
            } => {
                write!(f, "CREATE ")?;
                if *or_replace {
                    write!(f, "OR REPLACE ")?;
                }
                if *temporary {
                    write!(f, "TEMPORARY ")?;
                }
                write!(f, "TABLE ")?;
                if *if_not_exists {
                    write!(f, "IF NOT EXISTS ")?;
                }
                write!(f, "{name}")?;
                if let Some(like) = like {
                    write!(f, " LIKE {like}")?;
                }
                if !columns.is_empty() || !constraints.is_empty() {
                    write!(f, " (")?;
                    let cols: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
                    let cons: Vec<String> = constraints.iter().map(|c| c.to_string()).collect();
                    write!(f, "{}", cols.into_iter().chain(cons).collect::<Vec<_>>().join(", "))?;
                    write!(f, ")")?;
                }
                if let Some(query) = query {
                    write!(f, " AS {query}")?;
                }
                if let Some(engine) = engine {
                    write!(f, " ENGINE = {engine}")?;
                }
                Ok(())
            }
            Statement::CreateView { or_replace, materialized, name, columns, query } => {
                write!(f, "CREATE ")?;
                if *or_replace {
                    write!(f, "OR REPLACE ")?;
                }
                if *materialized {
                    write!(f, "MATERIALIZED ")?;
                }
                write!(f, "VIEW {name}")?;
                if !columns.is_empty() {
                    write!(f, " ({})", display_comma_separated(columns))?;
                }
                write!(f, " AS {query}")
            }
            Statement::CreateIndex { name, table_name, columns, unique, if_not_exists } => {
                write!(f, "CREATE ")?;
                if *unique {
                    write!(f, "UNIQUE ")?;
                }
                write!(f, "INDEX ")?;
                if *if_not_exists {
                    write!(f, "IF NOT EXISTS ")?;
                }
                if let Some(name) = name {
                    write!(f, "{name} ")?;
                }
                write!(f, "ON {table_name} ({})", display_comma_separated(columns))
            }
            Statement::CreateStage { or_replace, temporary, if_not_exists, name, url, file_format } => {
                write!(f, "CREATE ")?;
                if *or_replace {
                    write!(f, "OR REPLACE ")?;
                }
                if *temporary {
                    write!(f, "TEMPORARY ")?;
                }
                write!(f, "STAGE ")?;
                if *if_not_exists {
                    write!(f, "IF NOT EXISTS ")?;
                }
                write!(f, "{name}")?;
                if let Some(url) = url {
                    write!(f, " URL = '{url}'")?;
                }
                if !file_format.is_empty() {
                    write!(f, " FILE_FORMAT = (")?;
                    let parts: Vec<String> =
                        file_format.iter().map(|(k, v)| format!("{k} = {v}")).collect();
                    write!(f, "{})", parts.join(" "))?;
                }
                Ok(())
            }
            Statement::CreateRole { names, if_not_exists } => {
                write!(f, "CREATE ROLE ")?;
                if *if_not_exists {
                    write!(f, "IF NOT EXISTS ")?;
                }
                write!(f, "{}", display_comma_separated(names))
            }
            Statement::CreateFunction { or_replace, name, args, return_type, language, body } => {
                write!(f, "CREATE ")?;
                if *or_replace {
                    write!(f, "OR REPLACE ")?;
                }
                write!(f, "FUNCTION {name}(")?;
                let parts: Vec<String> = args.iter().map(|(n, t)| format!("{n} {t}")).collect();
                write!(f, "{})", parts.join(", "))?;
                if let Some(rt) = return_type {
                    write!(f, " RETURNS {rt}")?;
                }
                if let Some(lang) = language {
                    write!(f, " LANGUAGE {lang}")?;
                }
                write!(f, " AS {body}")
            }
            Statement::CreateMacro { or_replace, name, args, definition } => {
                write!(f, "CREATE ")?;
                if *or_replace {
                    write!(f, "OR REPLACE ")?;
                }
                write!(f, "MACRO {name}({}) AS {definition}", display_comma_separated(args))
            }
            Statement::CreateSecret { or_replace, temporary, if_not_exists, name, secret_type, options } => {
                write!(f, "CREATE ")?;
                if *or_replace {
                    write!(f, "OR REPLACE ")?;
                }
                if *temporary {
                    write!(f, "TEMPORARY ")?;
                }
                write!(f, "SECRET ")?;
                if *if_not_exists {
                    write!(f, "IF NOT EXISTS ")?;
                }
                if let Some(name) = name {
                    write!(f, "{name} ")?;
                }
                write!(f, "(TYPE {secret_type}")?;
                for (k, v) in options {
                    write!(f, ", {k} {v}")?;
                }
                write!(f, ")")
            }
            Statement::CreateVirtualTable { name, if_not_exists, module_name, module_args } => {
                write!(f, "CREATE VIRTUAL TABLE ")?;
                if *if_not_exists {
                    write!(f, "IF NOT EXISTS ")?;
                }
                write!(f, "{name} USING {module_name}")?;
                if !module_args.is_empty() {
                    write!(f, "({})", display_comma_separated(module_args))?;
                }
                Ok(())
            }
            Statement::AlterTable { name, if_exists, operations } => {
                write!(f, "ALTER TABLE ")?;
                if *if_exists {
                    write!(f, "IF EXISTS ")?;
                }
                write!(f, "{name} {}", display_comma_separated(operations))
            }
            Statement::AlterRole { name, operation } => write!(f, "ALTER ROLE {name} {operation}"),
            Statement::Drop { object_type, if_exists, names, cascade } => {
                write!(f, "DROP {object_type} ")?;
                if *if_exists {
                    write!(f, "IF EXISTS ")?;
                }
                write!(f, "{}", display_comma_separated(names))?;
                if *cascade {
                    write!(f, " CASCADE")?;
                }
                Ok(())
            }
            Statement::DropSecret { if_exists, temporary, name } => {
                write!(f, "DROP ")?;
                if *temporary {
                    write!(f, "TEMPORARY ")?;
                }
                write!(f, "SECRET ")?;
                if *if_exists {
                    write!(f, "IF EXISTS ")?;
                }
                write!(f, "{name}")
            }
            Statement::Truncate { table_name, cascade } => {
                write!(f, "TRUNCATE TABLE {table_name}")?;
                if *cascade {
                    write!(f, " CASCADE")?;
                }
                Ok(())
            }
            Statement::ShowTables { full, db_name, filter } => {
                write!(f, "SHOW ")?;
                if *full {
                    write!(f, "FULL ")?;
                }
                write!(f, "TABLES")?;
                if let Some(db) = db_name {
                    write!(f, " FROM {db}")?;
                }
                if let Some(filter) = filter {
                    write!(f, " LIKE '{filter}'")?;
                }
                Ok(())
            }
            Statement::ShowColumns { table_name, filter } => {
                write!(f, "SHOW COLUMNS FROM {table_name}")?;
                if let Some(filter) = filter {
                    write!(f, " LIKE '{filter}'")?;
                }
                Ok(())
            }
            Statement::ShowVariable { variable } => {
                write!(f, "SHOW {}", display_comma_separated(variable))
            }
            Statement::ShowCreate { object_type, name } => write!(f, "SHOW CREATE {object_type} {name}"),
            Statement::Use { name } => write!(f, "USE {name}"),
            Statement::Pragma { name, value, is_eq } => {
                write!(f, "PRAGMA {name}")?;
                if let Some(value) = value {
                    if *is_eq {
                        write!(f, " = {value}")?;
                    } else {
                        write!(f, "({value})")?;
                    }
                }
                Ok(())
            }
            Statement::Declare(decls) => write!(f, "{}", display_comma_separated(decls)),
            Statement::Flush { object_type, tables } => {
                write!(f, "FLUSH")?;
                if let Some(object_type) = object_type {
                    write!(f, " {object_type}")?;
                }
                if !tables.is_empty() {
                    write!(f, " {}", display_comma_separated(tables))?;
                }
                Ok(())
            }
            Statement::Kill { modifier, id } => {
                write!(f, "KILL ")?;
                if let Some(modifier) = modifier {
                    write!(f, "{modifier} ")?;
                }
                write!(f, "{id}")
            }
            Statement::Comment { object_type, name, comment } => {
                write!(f, "COMMENT ON {object_type} {name} IS ")?;
                match comment {
                    Some(c) => write!(f, "'{c}'"),
                    None => write!(f, "NULL"),
                }
            }
            Statement::Commit { chain } => {
                write!(f, "COMMIT")?;
                if *chain {
                    write!(f, " AND CHAIN")?;
                }
                Ok(())
            }
            Statement::Rollback { chain } => {
                write!(f, "ROLLBACK")?;
                if *chain {
                    write!(f, " AND CHAIN")?;
                }
                Ok(())
            }
            Statement::Merge { into, table, source, on, clauses } => {
                write!(f, "MERGE ")?;
                if *into {
                    write!(f, "INTO ")?;
                }
                write!(f, "{table} USING {source} ON {on}")?;
                for clause in clauses {
                    write!(f, " {clause}")?;
                }
                Ok(())
            }
            Statement::CopyIntoSnowflake { into, from_stage, file_format } => {
                write!(f, "COPY INTO {into} FROM {from_stage}")?;
                if !file_format.is_empty() {
                    write!(f, " FILE_FORMAT = (")?;
                    let parts: Vec<String> =
                        file_format.iter().map(|(k, v)| format!("{k} = {v}")).collect();
                    write!(f, "{})", parts.join(" "))?;
                }
                Ok(())
            }
            Statement::AttachDatabase { database, schema_name } => {
                write!(f, "ATTACH DATABASE {database} AS {schema_name}")
            }
            Statement::AttachDuckDbDatabase { if_not_exists, database, path, alias } => {
                write!(f, "ATTACH ")?;
                if *if_not_exists {
                    write!(f, "IF NOT EXISTS ")?;
                }
                write!(f, "DATABASE '{path}' AS {database}")?;
                if let Some(alias) = alias {
                    write!(f, " ({alias})")?;
                }
                Ok(())
            }
            Statement::DetachDuckDbDatabase { if_exists, alias } => {
                write!(f, "DETACH DATABASE ")?;
                if *if_exists {
                    write!(f, "IF EXISTS ")?;
                }
                write!(f, "{alias}")
            }
            Statement::Install { extension_name } => write!(f, "INSTALL {extension_name}"),
            Statement::Load { extension_name } => write!(f, "LOAD {extension_name}"),
            Statement::SetVariable { local, variables, value } => {
                write!(f, "SET ")?;
                if *local {
                    write!(f, "LOCAL ")?;
                }
                write!(
                    f,
                    "{} = {}",
                    display_comma_separated(variables),
                    display_comma_separated(value)
                )
            }
            Statement::SetNames { charset_name, collation_name } => {
                write!(f, "SET NAMES {charset_name}")?;
                if let Some(collation) = collation_name {
                    write!(f, " COLLATE {collation}")?;
                }
                Ok(())
            }
            Statement::Explain { analyze, verbose, statement } => {
                write!(f, "EXPLAIN ")?;
                if *analyze {
                    write!(f, "ANALYZE ")?;
                }
                if *verbose {
                    write!(f, "VERBOSE ")?;
                }
                write!(f, "{statement}")
            }
            Statement::ExplainTable { table_name } => write!(f, "EXPLAIN {table_name}"),
            Statement::If { condition, then_statements, else_statements } => {
                write!(f, "IF {condition} THEN ")?;
                for stmt in then_statements {
                    write!(f, "{stmt}; ")?;
                }
                if !else_statements.is_empty() {
                    write!(f, "ELSE ")?;
                    for stmt in else_statements {
                        write!(f, "{stmt}; ")?;
                    }
                }
                write!(f, "END IF")
            }
            Statement::CreateProcedure { or_replace, name, params, body } => {
                write!(f, "CREATE ")?;
                if *or_replace {
                    write!(f, "OR REPLACE ")?;
                }
                write!(f, "PROCEDURE {name}(")?;
                let parts: Vec<String> = params.iter().map(|(n, t)| format!("{n} {t}")).collect();
                write!(f, "{}) AS BEGIN ", parts.join(", "))?;
                for stmt in body {
                    write!(f, "{stmt}; ")?;
                }
                write!(f, "END")
            }
        }
    }
}
