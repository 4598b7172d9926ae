//! Error types crossing the library boundary: [`TokenizeError`] for lexical failures and
//! [`ParserError`] for grammar mismatches and recursion overflow (§7).

use std::fmt;

/// A 1-based line/column position into the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub line: u64,
    pub column: u64,
}

impl Location {
    pub fn new(line: u64, column: u64) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: {}, Col: {}", self.line, self.column)
    }
}

/// A lexical failure: unterminated string/comment/dollar-quote, invalid escape, or a stray
/// character that starts no valid token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {location}")]
pub struct TokenizeError {
    pub message: String,
    pub location: Location,
}

impl TokenizeError {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// A grammar mismatch or recursion-depth overflow raised by the parser or a dialect hook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    #[error("Expected {expected}, found {found}, {location}")]
    ParseError {
        expected: String,
        found: String,
        location: Location,
    },
    #[error("Recursion limit exceeded ({limit}) at {location}")]
    RecursionLimitExceeded { limit: usize, location: Location },
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

impl ParserError {
    pub fn expected(expected: impl Into<String>, found: impl fmt::Display, location: Location) -> Self {
        ParserError::ParseError {
            expected: expected.into(),
            found: found.to_string(),
            location,
        }
    }
}

pub type TokenizeResult<T> = Result<T, TokenizeError>;
pub type ParseResult<T> = Result<T, ParserError>;
