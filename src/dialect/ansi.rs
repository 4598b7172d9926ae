use super::{Dialect, DialectKind};

/// Plain ANSI SQL; every [`Dialect`] default already matches this, so the impl is empty.
#[derive(Debug, Default)]
pub struct AnsiDialect {}

impl Dialect for AnsiDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Ansi
    }
}
