use super::{Dialect, DialectKind};

/// SQLite.
#[derive(Debug, Default)]
pub struct SQLiteDialect {}

impl Dialect for SQLiteDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::SQLite
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_' || ch == '$'
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        matches!(ch, '"' | '`' | '[')
    }

    fn supports_at_sign_placeholder(&self) -> bool {
        true
    }
}
