//! Literal values (§3.1 string-family tokens, §3.2 invariant iii).

use std::fmt;

use smol_str::SmolStr;

/// A literal value. `Number` and every string variant keep their original source text verbatim
/// (§3.2 invariant iii: never parsed to a numeric type, to preserve precision).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number { value: SmolStr, long: bool },
    SingleQuotedString(SmolStr),
    DoubleQuotedString(SmolStr),
    TripleSingleQuotedString(SmolStr),
    TripleDoubleQuotedString(SmolStr),
    NationalStringLiteral(SmolStr),
    EscapedStringLiteral(SmolStr),
    RawStringLiteral(SmolStr),
    UnicodeStringLiteral(SmolStr),
    HexStringLiteral(SmolStr),
    ByteStringLiteral(SmolStr),
    DollarQuotedString { value: SmolStr, tag: SmolStr },
    Boolean(bool),
    Null,
    Placeholder(SmolStr),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number { value, long } => {
                write!(f, "{value}")?;
                if *long {
                    write!(f, "L")?;
                }
                Ok(())
            }
            Value::SingleQuotedString(v) => write!(f, "'{v}'"),
            Value::DoubleQuotedString(v) => write!(f, "\"{v}\""),
            Value::TripleSingleQuotedString(v) => write!(f, "'''{v}'''"),
            Value::TripleDoubleQuotedString(v) => write!(f, "\"\"\"{v}\"\"\""),
            Value::NationalStringLiteral(v) => write!(f, "N'{v}'"),
            Value::EscapedStringLiteral(v) => write!(f, "E'{v}'"),
            Value::RawStringLiteral(v) => write!(f, "R'{v}'"),
            Value::UnicodeStringLiteral(v) => write!(f, "U&'{v}'"),
            Value::HexStringLiteral(v) => write!(f, "X'{v}'"),
            Value::ByteStringLiteral(v) => write!(f, "B'{v}'"),
            Value::DollarQuotedString { value, tag } => write!(f, "${tag}${value}${tag}$"),
            Value::Boolean(true) => write!(f, "TRUE"),
            Value::Boolean(false) => write!(f, "FALSE"),
            Value::Null => write!(f, "NULL"),
            Value::Placeholder(v) => write!(f, "{v}"),
        }
    }
}
