//! The parser (§4.4 "Parser"): a hand-written recursive-descent/Pratt parser over a flat token
//! stream, consulting `&dyn Dialect` at statement/prefix/infix/precedence extension points.
//!
//! Grounded on `other_examples/79e7835d_SatoriCyber-datafusion-sqlparser-rs__src-dialect-mysql.rs.rs`
//! for the `Parser`-consults-`Dialect` hook shape, and on
//! `crates/lib-core/src/parser/parser.rs` for the token-index/backtracking idiom (`checkpoint`/
//! `restore` here instead of sqruff's segment cursor).

mod data_type;
mod ddl;
mod dml;
mod expr;
mod query;
mod select;

use crate::ast::{Ident, ObjectName, Statement};
use crate::dialect::Dialect;
use crate::error::{Location, ParseResult, ParserError};
use crate::keywords::Keyword;
use crate::tokenizer::token::{Token, TokenWithLocation, Word};
use crate::tokenizer::Tokenizer;

/// How deep `parse_expr`/`parse_prefix` may recurse before giving up (§3.2 invariant vi, §7).
pub const DEFAULT_RECURSION_LIMIT: usize = 50;

/// Opaque token-stream position, returned by [`Parser::checkpoint`] and consumed by
/// [`Parser::restore`] to backtrack a failed speculative parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Tunables accepted by [`Parser::new_with_options`] (§6 "Options").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Max parser recursion depth; exceeding it raises [`ParserError::RecursionLimitExceeded`].
    pub recursion_limit: usize,
    /// Allow one trailing comma before a list's closing token.
    pub trailing_commas: bool,
    /// Interpret backslash escapes in string/identifier literals during tokenization.
    pub unescape: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            trailing_commas: false,
            unescape: true,
        }
    }
}

pub struct Parser<'a> {
    dialect: &'a dyn Dialect,
    tokens: Vec<TokenWithLocation>,
    index: usize,
    recursion_depth: usize,
    recursion_limit: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(dialect: &'a dyn Dialect, sql: &str) -> ParseResult<Self> {
        Self::new_with_options(dialect, sql, ParseOptions::default())
    }

    pub fn new_with_options(dialect: &'a dyn Dialect, sql: &str, options: ParseOptions) -> ParseResult<Self> {
        let tokens = Tokenizer::new(dialect, sql)
            .with_unescape(options.unescape)
            .tokenize()?
            .into_iter()
            .filter(|t| !t.token.is_whitespace_or_comment())
            .collect();
        Ok(Self {
            dialect,
            tokens,
            index: 0,
            recursion_depth: 0,
            recursion_limit: options.recursion_limit,
            options,
        })
    }

    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self.options.recursion_limit = limit;
        self
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect
    }

    /// Parses every statement in the stream, separated by `;` (§4.4).
    pub fn parse_statements(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        let mut expecting_statement = true;
        loop {
            while self.consume_token(&Token::SemiColon) {
                expecting_statement = true;
            }
            if self.peek_token() == Token::Eof {
                break;
            }
            if !expecting_statement {
                return Err(self.expected("end of statement", self.peek_token()));
            }
            statements.push(self.parse_statement()?);
            expecting_statement = false;
        }
        Ok(statements)
    }

    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        if let Some(result) = self.dialect.parse_statement(self) {
            tracing::trace!(dialect = %self.dialect.kind(), "dialect hook handled parse_statement");
            return result;
        }
        self.enter_recursion()?;
        let result = (|| {
            let word = match self.peek_token() {
                Token::Word(w) => w,
                _ => return self.parse_query_statement(),
            };
            tracing::debug!(keyword = ?word.keyword, dialect = %self.dialect.kind(), "dispatching statement");
            match word.keyword {
                Keyword::SELECT | Keyword::WITH | Keyword::VALUES => self.parse_query_statement(),
                Keyword::INSERT | Keyword::REPLACE => self.parse_insert(),
                Keyword::UPDATE => self.parse_update(),
                Keyword::DELETE => self.parse_delete(),
                Keyword::CREATE => self.parse_create(),
                Keyword::ALTER => self.parse_alter(),
                Keyword::DROP => self.parse_drop(),
                Keyword::TRUNCATE => self.parse_truncate(),
                Keyword::SHOW => self.parse_show(),
                Keyword::USE => self.parse_use(),
                Keyword::SET => self.parse_set(),
                Keyword::DECLARE => self.parse_declare_statement(),
                Keyword::EXPLAIN | Keyword::DESCRIBE => self.parse_explain(),
                Keyword::COMMIT => self.parse_commit(),
                Keyword::ROLLBACK => self.parse_rollback(),
                Keyword::MERGE => self.parse_merge(),
                Keyword::PRAGMA => self.parse_pragma(),
                Keyword::FLUSH => self.parse_flush(),
                Keyword::KILL => self.parse_kill(),
                Keyword::COMMENT => self.parse_comment_on(),
                Keyword::COPY => self.parse_copy(),
                Keyword::ATTACH => self.parse_attach(),
                Keyword::DETACH => self.parse_detach(),
                Keyword::INSTALL => self.parse_install_load(true),
                Keyword::LOAD => self.parse_install_load(false),
                Keyword::IF => self.parse_if_statement(),
                _ => self.parse_query_statement(),
            }
        })();
        self.exit_recursion();
        result
    }

    fn parse_query_statement(&mut self) -> ParseResult<Statement> {
        Ok(Statement::Query(Box::new(self.parse_query()?)))
    }

    // --- token-stream primitives -------------------------------------------------------------

    pub(crate) fn peek_token(&self) -> Token {
        self.tokens
            .get(self.index)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof)
    }

    pub(crate) fn peek_nth_token(&self, n: usize) -> Token {
        self.tokens
            .get(self.index + n)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof)
    }

    pub(crate) fn current_location(&self) -> Location {
        self.tokens
            .get(self.index)
            .map(|t| t.location)
            .unwrap_or_default()
    }

    pub(crate) fn next_token(&mut self) -> Token {
        let token = self.peek_token();
        if self.index < self.tokens.len() {
            self.index += 1;
        }
        token
    }

    pub(crate) fn prev_token(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Saves the current position so a speculative parse can be undone (§4.4 extension hooks).
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.index)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.index = checkpoint.0;
    }

    pub(crate) fn consume_token(&mut self, expected: &Token) -> bool {
        if &self.peek_token() == expected {
            self.next_token();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_token(&mut self, expected: &Token) -> ParseResult<()> {
        if self.consume_token(expected) {
            Ok(())
        } else {
            Err(self.expected(&format!("{expected:?}"), self.peek_token()))
        }
    }

    pub(crate) fn peek_keyword(&self, kw: Keyword) -> bool {
        matches!(self.peek_token(), Token::Word(w) if w.is_keyword(kw))
    }

    pub(crate) fn peek_nth_keyword(&self, n: usize, kw: Keyword) -> bool {
        matches!(self.peek_nth_token(n), Token::Word(w) if w.is_keyword(kw))
    }

    pub(crate) fn consume_keyword(&mut self, kw: Keyword) -> bool {
        if self.peek_keyword(kw) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consumes every keyword in `kws` in order, or consumes none and returns `false`.
    pub(crate) fn consume_keywords(&mut self, kws: &[Keyword]) -> bool {
        let checkpoint = self.checkpoint();
        for kw in kws {
            if !self.consume_keyword(*kw) {
                self.restore(checkpoint);
                return false;
            }
        }
        true
    }

    pub(crate) fn expect_keyword(&mut self, kw: Keyword) -> ParseResult<()> {
        if self.consume_keyword(kw) {
            Ok(())
        } else {
            Err(self.expected(kw.as_ref(), self.peek_token()))
        }
    }

    pub(crate) fn expect_keywords(&mut self, kws: &[Keyword]) -> ParseResult<()> {
        for kw in kws {
            self.expect_keyword(*kw)?;
        }
        Ok(())
    }

    /// Tries each keyword in order and returns the first that matched, without consuming on
    /// failure.
    pub(crate) fn parse_one_of_keywords(&mut self, kws: &[Keyword]) -> Option<Keyword> {
        for kw in kws {
            if self.consume_keyword(*kw) {
                return Some(*kw);
            }
        }
        None
    }

    pub(crate) fn expect_one_of_keywords(&mut self, kws: &[Keyword]) -> ParseResult<Keyword> {
        self.parse_one_of_keywords(kws)
            .ok_or_else(|| self.expected(&format!("one of {kws:?}"), self.peek_token()))
    }

    pub(crate) fn expected<T>(&self, expected: &str, found: Token) -> ParserError {
        ParserError::expected(expected, found, self.current_location())
    }

    pub(crate) fn enter_recursion(&mut self) -> ParseResult<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > self.recursion_limit {
            return Err(ParserError::RecursionLimitExceeded {
                limit: self.recursion_limit,
                location: self.current_location(),
            });
        }
        Ok(())
    }

    pub(crate) fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }

    pub(crate) fn parse_identifier(&mut self) -> ParseResult<Ident> {
        match self.next_token() {
            Token::Word(w) => Ok(Ident { value: w.value, quote_style: w.quote_style }),
            other => Err(self.expected("identifier", other)),
        }
    }

    pub(crate) fn parse_object_name(&mut self) -> ParseResult<ObjectName> {
        let mut parts = vec![self.parse_identifier()?];
        while self.consume_token(&Token::Period) {
            parts.push(self.parse_identifier()?);
        }
        Ok(ObjectName(parts))
    }

    /// Parses a parenthesized, comma-separated list of identifiers: `(a, b, c)`.
    pub(crate) fn parse_parenthesized_idents(&mut self) -> ParseResult<Vec<Ident>> {
        self.expect_token(&Token::LParen)?;
        let mut idents = Vec::new();
        if self.peek_token() != Token::RParen {
            loop {
                idents.push(self.parse_identifier()?);
                if !self.consume_token(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect_token(&Token::RParen)?;
        Ok(idents)
    }

    pub(crate) fn parse_comma_separated<T>(
        &mut self,
        mut parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let mut items = vec![parse_one(self)?];
        while self.consume_token(&Token::Comma) {
            if self.options.trailing_commas && self.is_list_terminator() {
                break;
            }
            items.push(parse_one(self)?);
        }
        Ok(items)
    }

    fn is_list_terminator(&self) -> bool {
        matches!(
            self.peek_token(),
            Token::RParen | Token::RBracket | Token::SemiColon | Token::Eof
        )
    }
}

/// Tokenizes and parses `sql` under `dialect` (§9 "Top-level API").
pub fn parse_sql(dialect: &dyn Dialect, sql: &str) -> ParseResult<Vec<Statement>> {
    Parser::new(dialect, sql)?.parse_statements()
}

/// Tokenizes and parses `sql` under `dialect` with explicit [`ParseOptions`] (§6 "Options").
pub fn parse_sql_with_options(
    dialect: &dyn Dialect,
    sql: &str,
    options: ParseOptions,
) -> ParseResult<Vec<Statement>> {
    Parser::new_with_options(dialect, sql, options)?.parse_statements()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    #[test]
    fn parses_trivial_select() {
        let dialect = GenericDialect {};
        let stmts = parse_sql(&dialect, "SELECT 1").unwrap();
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn parses_multiple_statements() {
        let dialect = GenericDialect {};
        let stmts = parse_sql(&dialect, "SELECT 1; SELECT 2;").unwrap();
        assert_eq!(stmts.len(), 2);
    }

    #[test]
    fn rejects_trailing_garbage_without_semicolon() {
        let dialect = GenericDialect {};
        let err = parse_sql(&dialect, "SELECT 1 SELECT 2").unwrap_err();
        assert!(matches!(err, ParserError::ParseError { .. }));
    }
}
