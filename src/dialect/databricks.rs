use super::{Dialect, DialectKind};

/// Databricks SQL, layered on Spark SQL/Hive grammar.
#[derive(Debug, Default)]
pub struct DatabricksDialect {}

impl Dialect for DatabricksDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Databricks
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '`'
    }

    fn supports_group_by_all(&self) -> bool {
        true
    }

    fn supports_qualify(&self) -> bool {
        true
    }

    fn supports_pivot_unpivot(&self) -> bool {
        true
    }

    fn supports_create_table_select(&self) -> bool {
        true
    }
}
