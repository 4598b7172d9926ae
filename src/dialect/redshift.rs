use super::{Dialect, DialectKind};

/// Amazon Redshift, a Postgres-derived dialect with its own extensions.
#[derive(Debug, Default)]
pub struct RedshiftDialect {}

impl Dialect for RedshiftDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Redshift
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn supports_group_by_all(&self) -> bool {
        true
    }
}
