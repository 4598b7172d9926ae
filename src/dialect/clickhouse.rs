use super::{Dialect, DialectKind};

/// ClickHouse.
#[derive(Debug, Default)]
pub struct ClickHouseDialect {}

impl Dialect for ClickHouseDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::ClickHouse
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn supports_create_table_select(&self) -> bool {
        true
    }

    fn supports_group_by_all(&self) -> bool {
        true
    }
}
