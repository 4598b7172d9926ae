use super::{Dialect, DialectKind};

/// Microsoft SQL Server (T-SQL).
#[derive(Debug, Default)]
pub struct MsSqlDialect {}

impl Dialect for MsSqlDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::MsSql
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_' || ch == '#' || ch == '@'
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        matches!(ch, '"' | '[')
    }

    fn supports_top_clause(&self) -> bool {
        true
    }

    fn supports_table_hints(&self) -> bool {
        true
    }
}
