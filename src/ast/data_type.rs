//! SQL data types (§4.6 "Data types").

use std::fmt;

use super::ident::{display_comma_separated, ObjectName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructBracketKind {
    AngleBrackets,
    Parentheses,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub name: Option<super::ident::Ident>,
    pub data_type: DataType,
}

impl fmt::Display for StructField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name} ")?;
        }
        write!(f, "{}", self.data_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExactNumberInfo {
    None,
    Precision(u64),
    PrecisionAndScale(u64, u64),
}

impl fmt::Display for ExactNumberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExactNumberInfo::None => Ok(()),
            ExactNumberInfo::Precision(p) => write!(f, "({p})"),
            ExactNumberInfo::PrecisionAndScale(p, s) => write!(f, "({p}, {s})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimezoneInfo {
    None,
    WithTimeZone,
    WithoutTimeZone,
}

impl fmt::Display for TimezoneInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimezoneInfo::None => Ok(()),
            TimezoneInfo::WithTimeZone => write!(f, " WITH TIME ZONE"),
            TimezoneInfo::WithoutTimeZone => write!(f, " WITHOUT TIME ZONE"),
        }
    }
}

/// Closed sum of SQL types (§4.6 "Data types"). Parameterized variants keep the exact precision
/// given so `CREATE TABLE` definitions round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Char(Option<u64>),
    Varchar(Option<u64>),
    Nvarchar(Option<u64>),
    Text,
    Clob(Option<u64>),
    Binary(Option<u64>),
    Varbinary(Option<u64>),
    Blob(Option<u64>),
    Bytes(Option<u64>),
    Numeric(ExactNumberInfo),
    Decimal(ExactNumberInfo),
    BigNumeric(ExactNumberInfo),
    Float(Option<u64>),
    TinyInt(bool),
    SmallInt(bool),
    MediumInt(bool),
    Int(bool),
    BigInt(bool),
    Real,
    Double,
    DoublePrecision,
    Boolean,
    Date,
    Time(TimezoneInfo),
    Timestamp(TimezoneInfo),
    Datetime,
    Interval,
    JSON,
    JSONB,
    Uuid,
    Array(Option<Box<DataType>>),
    Map(Box<DataType>, Box<DataType>),
    Struct(Vec<StructField>, StructBracketKind),
    Union(Vec<DataType>),
    Enum(Vec<String>),
    Set(Vec<String>),
    Custom(ObjectName, Vec<String>),
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn fmt_len(f: &mut fmt::Formatter<'_>, name: &str, len: Option<u64>) -> fmt::Result {
            write!(f, "{name}")?;
            if let Some(len) = len {
                write!(f, "({len})")?;
            }
            Ok(())
        }
        fn fmt_unsigned(f: &mut fmt::Formatter<'_>, name: &str, unsigned: bool) -> fmt::Result {
            write!(f, "{name}")?;
            if unsigned {
                write!(f, " UNSIGNED")?;
            }
            Ok(())
        }

        match self {
            DataType::Char(n) => fmt_len(f, "CHAR", *n),
            DataType::Varchar(n) => fmt_len(f, "VARCHAR", *n),
            DataType::Nvarchar(n) => fmt_len(f, "NVARCHAR", *n),
            DataType::Text => write!(f, "TEXT"),
            DataType::Clob(n) => fmt_len(f, "CLOB", *n),
            DataType::Binary(n) => fmt_len(f, "BINARY", *n),
            DataType::Varbinary(n) => fmt_len(f, "VARBINARY", *n),
            DataType::Blob(n) => fmt_len(f, "BLOB", *n),
            DataType::Bytes(n) => fmt_len(f, "BYTES", *n),
            DataType::Numeric(info) => write!(f, "NUMERIC{info}"),
            DataType::Decimal(info) => write!(f, "DECIMAL{info}"),
            DataType::BigNumeric(info) => write!(f, "BIGNUMERIC{info}"),
            DataType::Float(n) => fmt_len(f, "FLOAT", *n),
            DataType::TinyInt(u) => fmt_unsigned(f, "TINYINT", *u),
            DataType::SmallInt(u) => fmt_unsigned(f, "SMALLINT", *u),
            DataType::MediumInt(u) => fmt_unsigned(f, "MEDIUMINT", *u),
            DataType::Int(u) => fmt_unsigned(f, "INT", *u),
            DataType::BigInt(u) => fmt_unsigned(f, "BIGINT", *u),
            DataType::Real => write!(f, "REAL"),
            DataType::Double => write!(f, "DOUBLE"),
            DataType::DoublePrecision => write!(f, "DOUBLE PRECISION"),
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::Date => write!(f, "DATE"),
            DataType::Time(tz) => write!(f, "TIME{tz}"),
            DataType::Timestamp(tz) => write!(f, "TIMESTAMP{tz}"),
            DataType::Datetime => write!(f, "DATETIME"),
            DataType::Interval => write!(f, "INTERVAL"),
            DataType::JSON => write!(f, "JSON"),
            DataType::JSONB => write!(f, "JSONB"),
            DataType::Uuid => write!(f, "UUID"),
            DataType::Array(inner) => match inner {
                Some(ty) => write!(f, "ARRAY<{ty}>"),
                None => write!(f, "ARRAY"),
            },
            DataType::Map(key, value) => write!(f, "MAP<{key}, {value}>"),
            DataType::Struct(fields, kind) => match kind {
                StructBracketKind::AngleBrackets => {
                    write!(f, "STRUCT<{}>", display_comma_separated(fields))
                }
                StructBracketKind::Parentheses => {
                    write!(f, "STRUCT({})", display_comma_separated(fields))
                }
            },
            DataType::Union(types) => write!(f, "UNION({})", display_comma_separated(types)),
            DataType::Enum(values) => {
                write!(f, "ENUM(")?;
                write!(f, "{}", values.iter().map(|v| format!("'{v}'")).collect::<Vec<_>>().join(", "))?;
                write!(f, ")")
            }
            DataType::Set(values) => {
                write!(f, "SET(")?;
                write!(f, "{}", values.iter().map(|v| format!("'{v}'")).collect::<Vec<_>>().join(", "))?;
                write!(f, ")")
            }
            DataType::Custom(name, modifiers) => {
                write!(f, "{name}")?;
                if !modifiers.is_empty() {
                    write!(f, "({})", modifiers.join(", "))?;
                }
                Ok(())
            }
        }
    }
}
