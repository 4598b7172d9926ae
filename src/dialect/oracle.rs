use super::{Dialect, DialectKind};

/// Oracle Database.
#[derive(Debug, Default)]
pub struct OracleDialect {}

impl Dialect for OracleDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Oracle
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic()
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$' || ch == '#'
    }

    fn supports_connect_by(&self) -> bool {
        true
    }
}
