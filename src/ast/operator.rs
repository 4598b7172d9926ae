//! Binary/unary operator sum types consulted by the Pratt parser and serializer.

use std::fmt;

use smol_str::SmolStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    StringConcat,
    Gt,
    Lt,
    GtEq,
    LtEq,
    Spaceship,
    Eq,
    NotEq,
    And,
    Or,
    Xor,
    BitwiseOr,
    BitwiseAnd,
    BitwiseXor,
    PGBitwiseXor,
    PGBitwiseShiftLeft,
    PGBitwiseShiftRight,
    PGExp,
    PGRegexMatch,
    PGRegexIMatch,
    PGRegexNotMatch,
    PGRegexNotIMatch,
    PGLikeMatch,
    PGILikeMatch,
    PGNotLikeMatch,
    PGNotILikeMatch,
    /// `->` JSON field access.
    Arrow,
    /// `->>` JSON field access as text.
    LongArrow,
    /// `#>` JSON path access.
    HashArrow,
    /// `#>>` JSON path access as text.
    HashLongArrow,
    /// `@>` JSON/array "contains".
    AtArrow,
    /// `<@` JSON/array "contained by".
    ArrowAt,
    /// `?` JSON key existence.
    QuestionMark,
    /// `?|` JSON any key existence.
    QuestionPipe,
    /// `?&` JSON all keys existence.
    QuestionAmpersand,
    /// `MySQL`'s integer `DIV`.
    MyIntegerDivide,
    /// A run of dialect-custom operator characters not in the known table (§4.3 "Operators").
    Custom(SmolStr),
}

impl BinaryOperator {
    /// Binding power used by the serializer to decide when an operand needs parens around it
    /// (§4.4, §8 round-trip law). Mirrors [`crate::precedence`]'s ANSI ladder; dialect-specific
    /// lifts (Postgres `BETWEEN`/`LIKE`, `::`, …) aren't representable here since `Display` has no
    /// dialect in scope, so this intentionally stays conservative — it can only add parens a
    /// dialect's real grammar would have tolerated omitting, never drop ones it needs.
    pub(crate) fn precedence(&self) -> crate::precedence::Precedence {
        use crate::precedence::*;
        match self {
            BinaryOperator::Or => OR,
            BinaryOperator::And => AND,
            BinaryOperator::Xor => XOR,
            BinaryOperator::Gt
            | BinaryOperator::Lt
            | BinaryOperator::GtEq
            | BinaryOperator::LtEq
            | BinaryOperator::Spaceship
            | BinaryOperator::Eq
            | BinaryOperator::NotEq => BETWEEN_LIKE,
            BinaryOperator::StringConcat
            | BinaryOperator::BitwiseOr
            | BinaryOperator::Arrow
            | BinaryOperator::LongArrow
            | BinaryOperator::HashArrow
            | BinaryOperator::HashLongArrow
            | BinaryOperator::AtArrow
            | BinaryOperator::ArrowAt
            | BinaryOperator::QuestionMark
            | BinaryOperator::QuestionPipe
            | BinaryOperator::QuestionAmpersand
            | BinaryOperator::PGRegexMatch
            | BinaryOperator::PGRegexIMatch
            | BinaryOperator::PGRegexNotMatch
            | BinaryOperator::PGRegexNotIMatch
            | BinaryOperator::PGLikeMatch
            | BinaryOperator::PGILikeMatch
            | BinaryOperator::PGNotLikeMatch
            | BinaryOperator::PGNotILikeMatch => PIPE,
            BinaryOperator::BitwiseXor | BinaryOperator::PGBitwiseXor | BinaryOperator::PGExp => CARET,
            BinaryOperator::BitwiseAnd
            | BinaryOperator::PGBitwiseShiftLeft
            | BinaryOperator::PGBitwiseShiftRight => AMPERSAND,
            BinaryOperator::Plus | BinaryOperator::Minus => PLUS_MINUS,
            BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Modulo
            | BinaryOperator::MyIntegerDivide => MUL_DIV_MOD,
            BinaryOperator::Custom(_) => PG_OTHER,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::StringConcat => "||",
            BinaryOperator::Gt => ">",
            BinaryOperator::Lt => "<",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Spaceship => "<=>",
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "<>",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
            BinaryOperator::Xor => "XOR",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::PGBitwiseXor => "#",
            BinaryOperator::PGBitwiseShiftLeft => "<<",
            BinaryOperator::PGBitwiseShiftRight => ">>",
            BinaryOperator::PGExp => "^",
            BinaryOperator::PGRegexMatch => "~",
            BinaryOperator::PGRegexIMatch => "~*",
            BinaryOperator::PGRegexNotMatch => "!~",
            BinaryOperator::PGRegexNotIMatch => "!~*",
            BinaryOperator::PGLikeMatch => "~~",
            BinaryOperator::PGILikeMatch => "~~*",
            BinaryOperator::PGNotLikeMatch => "!~~",
            BinaryOperator::PGNotILikeMatch => "!~~*",
            BinaryOperator::Arrow => "->",
            BinaryOperator::LongArrow => "->>",
            BinaryOperator::HashArrow => "#>",
            BinaryOperator::HashLongArrow => "#>>",
            BinaryOperator::AtArrow => "@>",
            BinaryOperator::ArrowAt => "<@",
            BinaryOperator::QuestionMark => "?",
            BinaryOperator::QuestionPipe => "?|",
            BinaryOperator::QuestionAmpersand => "?&",
            BinaryOperator::MyIntegerDivide => "DIV",
            BinaryOperator::Custom(op) => return write!(f, "{op}"),
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
    PGBitwiseNot,
    PGSquareRoot,
    PGCubeRoot,
    PGPostfixFactorial,
    PGAbs,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Not => "NOT",
            UnaryOperator::PGBitwiseNot => "~",
            UnaryOperator::PGSquareRoot => "|/",
            UnaryOperator::PGCubeRoot => "||/",
            UnaryOperator::PGPostfixFactorial => "!",
            UnaryOperator::PGAbs => "@",
        };
        write!(f, "{s}")
    }
}
