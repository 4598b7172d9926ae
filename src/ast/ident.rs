//! Identifiers (§3.2 invariant ii, v).

use std::fmt;

use smol_str::SmolStr;

/// A single identifier, preserving its original quote style exactly so re-serialization emits
/// the identical surface form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub value: SmolStr,
    pub quote_style: Option<char>,
}

impl Ident {
    pub fn new(value: impl Into<SmolStr>) -> Self {
        Self {
            value: value.into(),
            quote_style: None,
        }
    }

    pub fn quoted(value: impl Into<SmolStr>, quote: char) -> Self {
        Self {
            value: value.into(),
            quote_style: Some(quote),
        }
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident::new(value)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quote_style {
            Some(quote) => {
                let close = closing_quote(quote);
                write!(f, "{quote}{}{close}", self.value)
            }
            None => write!(f, "{}", self.value),
        }
    }
}

fn closing_quote(open: char) -> char {
    match open {
        '[' => ']',
        other => other,
    }
}

/// A (possibly multi-part) `a.b.c`-style name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName(pub Vec<Ident>);

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_separated(&self.0, "."))
    }
}

/// Joins `items` with `sep` via `Display`, the one helper every serializer in this crate goes
/// through so list rendering stays consistent (§4.7 "consistent whitespace").
pub fn display_separated<'a, T: fmt::Display>(items: &'a [T], sep: &'a str) -> impl fmt::Display + 'a {
    struct Separated<'a, T> {
        items: &'a [T],
        sep: &'a str,
    }
    impl<'a, T: fmt::Display> fmt::Display for Separated<'a, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for (i, item) in self.items.iter().enumerate() {
                if i > 0 {
                    write!(f, "{}", self.sep)?;
                }
                write!(f, "{item}")?;
            }
            Ok(())
        }
    }
    Separated { items, sep }
}

pub fn display_comma_separated<T: fmt::Display>(items: &[T]) -> impl fmt::Display + '_ {
    display_separated(items, ", ")
}
