use super::{Dialect, DialectKind};

/// Google BigQuery / GoogleSQL.
#[derive(Debug, Default)]
pub struct BigQueryDialect {}

impl Dialect for BigQueryDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::BigQuery
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
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

    fn supports_select_value_mode(&self) -> bool {
        true
    }

    fn supports_unnest_alias(&self) -> bool {
        true
    }

    fn supports_struct_literal(&self) -> bool {
        true
    }

    fn supports_triple_quoted_string(&self) -> bool {
        true
    }
}
