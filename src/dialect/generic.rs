use super::{Dialect, DialectKind};

/// A permissive superset dialect that turns on most vendor extensions at once, for parsing SQL
/// of unknown or mixed provenance.
#[derive(Debug, Default)]
pub struct GenericDialect {}

impl Dialect for GenericDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Generic
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_' || ch == '#' || ch == '@'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '#' || ch == '@' || ch == '$'
    }

    fn supports_string_literal_backslash_escape(&self) -> bool {
        true
    }

    fn supports_numeric_literal_underscores(&self) -> bool {
        true
    }

    fn supports_group_by_all(&self) -> bool {
        true
    }

    fn supports_qualify(&self) -> bool {
        true
    }

    fn supports_limit_comma(&self) -> bool {
        true
    }

    fn supports_top_clause(&self) -> bool {
        true
    }

    fn supports_select_value_mode(&self) -> bool {
        true
    }

    fn supports_unnest_alias(&self) -> bool {
        true
    }

    fn supports_pivot_unpivot(&self) -> bool {
        true
    }

    fn supports_create_table_select(&self) -> bool {
        true
    }

    fn supports_insert_set(&self) -> bool {
        true
    }

    fn supports_table_hints(&self) -> bool {
        true
    }
}
