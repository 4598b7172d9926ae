use super::{Dialect, DialectKind};

/// Apache Hive.
#[derive(Debug, Default)]
pub struct HiveDialect {}

impl Dialect for HiveDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Hive
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '`'
    }

    fn supports_create_table_select(&self) -> bool {
        true
    }

    fn supports_pivot_unpivot(&self) -> bool {
        true
    }
}
