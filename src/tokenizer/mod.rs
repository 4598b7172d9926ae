//! The tokenizer (§4.2 "Tokenizer"). Scans UTF-8 source text into a flat `Vec<TokenWithLocation>`
//! ending in [`Token::Eof`], delegating identifier-char classification and custom-operator
//! recognition to the active [`Dialect`].
//!
//! Grounded on `other_examples/42ef883d_MaterializeInc-sqlparser__src-tokenizer.rs.rs`'s
//! `Tokenizer` (peekable `Chars` cursor, `tokenize_with_location`, per-char `next_token` dispatch)
//! and `crates/parser-core/src/parser/token.rs` for the location-bookkeeping idiom.

pub mod token;

use std::iter::Peekable;
use std::str::Chars;

use smol_str::SmolStr;

use crate::dialect::Dialect;
use crate::error::{Location, TokenizeError, TokenizeResult};
use crate::tokenizer::token::{CommentStyle, StringStyle, Token, TokenWithLocation, Whitespace, Word};

pub struct Tokenizer<'a> {
    dialect: &'a dyn Dialect,
    query: &'a str,
    unescape: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(dialect: &'a dyn Dialect, query: &'a str) -> Self {
        Self { dialect, query, unescape: true }
    }

    /// Controls whether backslash escapes inside string/identifier literals are interpreted
    /// during scanning (§9 "Options" — `unescape`, default `true`). When `false`, a dialect's
    /// `supports_backslash_escape` is ignored and `\` is scanned as a plain character.
    pub fn with_unescape(mut self, unescape: bool) -> Self {
        self.unescape = unescape;
        self
    }

    pub fn tokenize(&self) -> TokenizeResult<Vec<TokenWithLocation>> {
        let mut state = State {
            dialect: self.dialect,
            chars: self.query.chars().peekable(),
            line: 1,
            column: 1,
            unescape: self.unescape,
        };
        let mut tokens = Vec::new();
        loop {
            let loc = state.location();
            match state.next_token()? {
                Token::Eof => {
                    tokens.push(TokenWithLocation::new(Token::Eof, loc));
                    break;
                }
                token => tokens.push(TokenWithLocation::new(token, loc)),
            }
        }
        Ok(tokens)
    }
}

struct State<'a> {
    dialect: &'a dyn Dialect,
    chars: Peekable<Chars<'a>>,
    line: u64,
    column: u64,
    unescape: bool,
}

impl<'a> State<'a> {
    fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn consume_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> TokenizeError {
        let err = TokenizeError::new(message, self.location());
        tracing::warn!(%err, "tokenizer error");
        err
    }

    fn next_token(&mut self) -> TokenizeResult<Token> {
        let Some(ch) = self.peek() else {
            return Ok(Token::Eof);
        };

        match ch {
            ' ' => {
                self.advance();
                Ok(Token::Whitespace(Whitespace::Space))
            }
            '\t' => {
                self.advance();
                Ok(Token::Whitespace(Whitespace::Tab))
            }
            '\n' | '\r' => {
                self.advance();
                Ok(Token::Whitespace(Whitespace::Newline))
            }
            '-' if self.peek_nth(1) == Some('-') => self.scan_line_comment(),
            '/' if self.peek_nth(1) == Some('*') => self.scan_block_comment(),
            '\'' => self.scan_string(StringStyle::Single, '\''),
            '"' if self.dialect.is_delimited_identifier_start('"') => self.scan_delimited_identifier('"'),
            '"' => self.scan_string(StringStyle::Double, '"'),
            '`' if self.dialect.is_delimited_identifier_start('`') => self.scan_delimited_identifier('`'),
            '[' if self.dialect.is_delimited_identifier_start('[') => self.scan_bracket_identifier(),
            'x' | 'X' if self.peek_nth(1) == Some('\'') => self.scan_prefixed_string('X', StringStyle::Byte),
            'b' | 'B' if self.peek_nth(1) == Some('\'') => self.scan_prefixed_string('B', StringStyle::Byte),
            'n' | 'N' if self.peek_nth(1) == Some('\'') => {
                self.scan_prefixed_string('N', StringStyle::National)
            }
            'e' | 'E' if self.peek_nth(1) == Some('\'') && self.dialect.supports_backslash_escape() => {
                self.scan_prefixed_string('E', StringStyle::Escaped)
            }
            'r' | 'R' if self.peek_nth(1) == Some('\'') => self.scan_prefixed_string('R', StringStyle::Raw),
            'u' | 'U' if self.peek_nth(1) == Some('&') && self.peek_nth(2) == Some('\'') => {
                self.advance();
                self.advance();
                self.scan_string(StringStyle::Unicode, '\'')
            }
            '$' if self.peek_nth(1).map(is_dollar_tag_char).unwrap_or(false) || self.peek_nth(1) == Some('$') => {
                self.scan_dollar_quoted_string()
            }
            '$' => self.scan_placeholder_dollar(),
            c if c.is_ascii_digit() => self.scan_number(),
            '.' if self.peek_nth(1).map(|c| c.is_ascii_digit()).unwrap_or(false) => self.scan_number(),
            c if self.dialect.is_identifier_start(c) => self.scan_word(),
            ',' => self.single(Token::Comma),
            ';' => self.single(Token::SemiColon),
            '(' => self.single(Token::LParen),
            ')' => self.single(Token::RParen),
            '[' => self.single(Token::LBracket),
            ']' => self.single(Token::RBracket),
            '{' => self.single(Token::LBrace),
            '}' => self.single(Token::RBrace),
            '.' => self.single(Token::Period),
            '?' => self.scan_question(),
            ':' => self.scan_colon(),
            '\\' => self.single(Token::Backslash),
            '=' => self.scan_eq(),
            '<' => self.scan_lt(),
            '>' => self.scan_gt(),
            '!' => self.scan_bang(),
            '+' => self.single(Token::Plus),
            '-' => self.scan_minus(),
            '*' => self.single(Token::Mul),
            '/' => self.scan_slash(),
            '%' => self.single(Token::Modulo),
            '|' => self.scan_pipe(),
            '^' => self.scan_caret(),
            '&' => self.single(Token::Ampersand),
            '~' => self.scan_tilde(),
            '@' => self.scan_at(),
            '#' => self.scan_hash(),
            c if self.dialect.is_custom_operator_part(c) => self.scan_custom_operator(),
            c => Err(self.error(format!("unexpected character {c:?}"))),
        }
    }

    fn single(&mut self, token: Token) -> TokenizeResult<Token> {
        self.advance();
        Ok(token)
    }

    fn scan_line_comment(&mut self) -> TokenizeResult<Token> {
        self.advance();
        self.advance();
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.advance();
        }
        Ok(Token::Comment {
            style: CommentStyle::Inline,
            prefix: SmolStr::new("--"),
            text: SmolStr::new(text),
        })
    }

    fn scan_block_comment(&mut self) -> TokenizeResult<Token> {
        self.advance();
        self.advance();
        let mut text = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated block comment")),
                Some('*') if self.peek_nth(1) == Some('/') => {
                    self.advance();
                    self.advance();
                    break;
                }
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }
        Ok(Token::Comment {
            style: CommentStyle::Multiline,
            prefix: SmolStr::new("/*"),
            text: SmolStr::new(text),
        })
    }

    fn scan_string(&mut self, style: StringStyle, quote: char) -> TokenizeResult<Token> {
        let triple = matches!(style, StringStyle::TripleSingle | StringStyle::TripleDouble)
            || (self.peek() == Some(quote)
                && self.peek_nth(1) == Some(quote)
                && self.peek_nth(2) == Some(quote)
                && self.dialect.supports_triple_quoted_string());
        if triple {
            return self.scan_triple_quoted_string(quote);
        }
        self.advance();
        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated string literal")),
                Some(c) if c == quote => {
                    self.advance();
                    if self.peek() == Some(quote) {
                        value.push(quote);
                        self.advance();
                        continue;
                    }
                    break;
                }
                Some('\\') if self.unescape && self.dialect.supports_backslash_escape() => {
                    self.advance();
                    value.push(self.scan_escape()?);
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
        Ok(Token::StringLiteral { value: SmolStr::new(value), style })
    }

    /// Decodes one backslash escape for `E'...'` strings (§4.3 "Strings"): `\n`, `\t`, `\xHH`,
    /// `\uHHHH`, `\'`, `\\`. The leading backslash has already been consumed; this consumes the
    /// escape char and, for `\x`/`\u`, its hex digits.
    fn scan_escape(&mut self) -> TokenizeResult<char> {
        match self.advance() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('\'') => Ok('\''),
            Some('\\') => Ok('\\'),
            Some('x') => self.scan_hex_escape(2),
            Some('u') => self.scan_hex_escape(4),
            Some(other) => Err(self.error(format!("invalid escape sequence \\{other}"))),
            None => Err(self.error("unterminated string literal")),
        }
    }

    fn scan_hex_escape(&mut self, digits: usize) -> TokenizeResult<char> {
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.peek() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(self.advance().unwrap()),
                _ => return Err(self.error(format!("invalid escape sequence: expected {digits} hex digits"))),
            }
        }
        let code = u32::from_str_radix(&hex, 16).expect("validated hex digits");
        char::from_u32(code).ok_or_else(|| self.error(format!("invalid escape sequence: \\u{hex} is not a valid char")))
    }

    fn scan_triple_quoted_string(&mut self, quote: char) -> TokenizeResult<Token> {
        self.advance();
        self.advance();
        self.advance();
        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated triple-quoted string")),
                Some(c) if c == quote && self.peek_nth(1) == Some(quote) && self.peek_nth(2) == Some(quote) => {
                    self.advance();
                    self.advance();
                    self.advance();
                    break;
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
        let style = if quote == '\'' {
            StringStyle::TripleSingle
        } else {
            StringStyle::TripleDouble
        };
        Ok(Token::StringLiteral { value: SmolStr::new(value), style })
    }

    fn scan_prefixed_string(&mut self, _prefix: char, style: StringStyle) -> TokenizeResult<Token> {
        self.advance();
        self.scan_string(style, '\'')
    }

    fn scan_delimited_identifier(&mut self, quote: char) -> TokenizeResult<Token> {
        self.advance();
        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated quoted identifier")),
                Some(c) if c == quote => {
                    self.advance();
                    if self.unescape && self.peek() == Some(quote) {
                        value.push(quote);
                        self.advance();
                        continue;
                    }
                    break;
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
        Ok(Token::Word(Word::quoted(value, quote)))
    }

    fn scan_bracket_identifier(&mut self) -> TokenizeResult<Token> {
        self.advance();
        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated bracketed identifier")),
                Some(']') => {
                    self.advance();
                    break;
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
        Ok(Token::Word(Word::quoted(value, '[')))
    }

    fn scan_dollar_quoted_string(&mut self) -> TokenizeResult<Token> {
        self.advance();
        let mut tag = String::new();
        while self.peek().map(is_dollar_tag_char).unwrap_or(false) {
            tag.push(self.advance().unwrap());
        }
        if self.peek() != Some('$') {
            return Err(self.error("expected '$' to close dollar-quote tag"));
        }
        self.advance();
        let closing = format!("${tag}$");
        let mut value = String::new();
        loop {
            if self.rest_starts_with(&closing) {
                for _ in 0..closing.chars().count() {
                    self.advance();
                }
                break;
            }
            match self.advance() {
                None => return Err(self.error("unterminated dollar-quoted string")),
                Some(c) => value.push(c),
            }
        }
        Ok(Token::DollarQuotedString { value: SmolStr::new(value), tag: SmolStr::new(tag) })
    }

    fn rest_starts_with(&self, needle: &str) -> bool {
        let mut iter = self.chars.clone();
        for expected in needle.chars() {
            match iter.next() {
                Some(c) if c == expected => continue,
                _ => return false,
            }
        }
        true
    }

    fn scan_placeholder_dollar(&mut self) -> TokenizeResult<Token> {
        self.advance();
        let mut digits = String::new();
        while self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
            digits.push(self.advance().unwrap());
        }
        Ok(Token::Placeholder(SmolStr::new(format!("${digits}"))))
    }

    fn scan_question(&mut self) -> TokenizeResult<Token> {
        self.advance();
        match self.peek() {
            Some('|') => {
                self.advance();
                Ok(Token::QuestionPipe)
            }
            Some('&') => {
                self.advance();
                Ok(Token::QuestionAmpersand)
            }
            _ => Ok(Token::Question),
        }
    }

    fn scan_colon(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.consume_if(':') {
            return Ok(Token::DoubleColon);
        }
        if self.consume_if('=') {
            return Ok(Token::Walrus);
        }
        if self.dialect.supports_colon_placeholder() {
            if self.peek().map(|c| self.dialect.is_identifier_start(c)).unwrap_or(false) {
                let mut name = String::new();
                while self.peek().map(|c| self.dialect.is_identifier_part(c)).unwrap_or(false) {
                    name.push(self.advance().unwrap());
                }
                return Ok(Token::Placeholder(SmolStr::new(format!(":{name}"))));
            }
            if self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                let mut digits = String::new();
                while self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                    digits.push(self.advance().unwrap());
                }
                return Ok(Token::Placeholder(SmolStr::new(format!(":{digits}"))));
            }
        }
        Ok(Token::Colon)
    }

    fn scan_eq(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.consume_if('>') {
            return Ok(Token::Arrow);
        }
        Ok(Token::Eq)
    }

    fn scan_lt(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.consume_if('=') {
            if self.consume_if('>') {
                return Ok(Token::Spaceship);
            }
            return Ok(Token::LtEq);
        }
        if self.consume_if('>') {
            return Ok(Token::Neq);
        }
        if self.consume_if('<') {
            return Ok(Token::LShift);
        }
        if self.consume_if('@') {
            return Ok(Token::ArrowAt);
        }
        Ok(Token::Lt)
    }

    fn scan_gt(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.consume_if('=') {
            return Ok(Token::GtEq);
        }
        if self.consume_if('>') {
            return Ok(Token::RShift);
        }
        Ok(Token::Gt)
    }

    fn scan_bang(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.consume_if('=') {
            return Ok(Token::Neq);
        }
        if self.peek() == Some('~') {
            self.advance();
            if self.peek() == Some('~') {
                self.advance();
                if self.consume_if('*') {
                    return Ok(Token::NotDoubleTildeAsterisk);
                }
                return Ok(Token::NotDoubleTilde);
            }
            if self.consume_if('*') {
                return Ok(Token::NotTildeAsterisk);
            }
            return Ok(Token::NotTilde);
        }
        Ok(Token::ExclamationMark)
    }

    fn scan_minus(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.consume_if('>') {
            if self.consume_if('>') {
                return Ok(Token::LongArrow);
            }
            return Ok(Token::ShortArrow);
        }
        Ok(Token::Minus)
    }

    fn scan_slash(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.consume_if('/') {
            return Ok(Token::IntDiv);
        }
        Ok(Token::Div)
    }

    fn scan_pipe(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.consume_if('|') {
            if self.consume_if('/') {
                return Ok(Token::DoublePipeSlash);
            }
            return Ok(Token::StringConcat);
        }
        if self.consume_if('/') {
            return Ok(Token::PipeSlash);
        }
        Ok(Token::Pipe)
    }

    fn scan_caret(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.consume_if('@') {
            return Ok(Token::CaretAt);
        }
        Ok(Token::Caret)
    }

    fn scan_tilde(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.peek() == Some('~') {
            self.advance();
            if self.consume_if('*') {
                return Ok(Token::DoubleTildeAsterisk);
            }
            return Ok(Token::DoubleTilde);
        }
        if self.consume_if('*') {
            return Ok(Token::TildeAsterisk);
        }
        Ok(Token::Tilde)
    }

    fn scan_at(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.dialect.supports_at_sign_placeholder()
            && self.peek().map(|c| self.dialect.is_identifier_start(c)).unwrap_or(false)
        {
            let mut name = String::new();
            while self.peek().map(|c| self.dialect.is_identifier_part(c)).unwrap_or(false) {
                name.push(self.advance().unwrap());
            }
            return Ok(Token::Placeholder(SmolStr::new(format!("@{name}"))));
        }
        if self.consume_if('>') {
            return Ok(Token::AtArrow);
        }
        if self.consume_if('@') {
            return Ok(Token::AtAt);
        }
        if self.consume_if('?') {
            return Ok(Token::AtQuestion);
        }
        Ok(Token::AtSign)
    }

    fn scan_hash(&mut self) -> TokenizeResult<Token> {
        self.advance();
        if self.consume_if('>') {
            if self.consume_if('>') {
                return Ok(Token::HashLongArrow);
            }
            return Ok(Token::HashArrow);
        }
        if self.consume_if('-') {
            return Ok(Token::HashMinus);
        }
        Ok(Token::Hash)
    }

    fn scan_custom_operator(&mut self) -> TokenizeResult<Token> {
        let mut text = String::new();
        while self.peek().map(|c| self.dialect.is_custom_operator_part(c)).unwrap_or(false) {
            text.push(self.advance().unwrap());
        }
        Ok(Token::CustomBinaryOperator(SmolStr::new(text)))
    }

    fn scan_number(&mut self) -> TokenizeResult<Token> {
        let mut value = String::new();
        while self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
            value.push(self.advance().unwrap());
        }
        if self.peek() == Some('.') {
            value.push(self.advance().unwrap());
            while self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                value.push(self.advance().unwrap());
            }
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            let save_point = self.chars.clone();
            let (save_line, save_col) = (self.line, self.column);
            let mut exp = String::new();
            exp.push(self.advance().unwrap());
            if matches!(self.peek(), Some('+') | Some('-')) {
                exp.push(self.advance().unwrap());
            }
            if self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                while self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                    exp.push(self.advance().unwrap());
                }
                value.push_str(&exp);
            } else {
                self.chars = save_point;
                self.line = save_line;
                self.column = save_col;
            }
        }
        let long = matches!(self.peek(), Some('L'));
        if long {
            self.advance();
        }
        Ok(Token::Number { value: SmolStr::new(value), long })
    }

    fn scan_word(&mut self) -> TokenizeResult<Token> {
        let mut value = String::new();
        while self.peek().map(|c| self.dialect.is_identifier_part(c)).unwrap_or(false) {
            value.push(self.advance().unwrap());
        }
        Ok(Token::Word(Word::identifier(value)))
    }
}

fn is_dollar_tag_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    fn tokens(sql: &str) -> Vec<Token> {
        let dialect = GenericDialect {};
        Tokenizer::new(&dialect, sql)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .filter(|t| !t.is_whitespace_or_comment())
            .collect()
    }

    #[test]
    fn tokenizes_simple_select() {
        let got = tokens("SELECT 1");
        assert_eq!(
            got,
            vec![
                Token::Word(Word::identifier("SELECT")),
                Token::Number { value: "1".into(), long: false },
                Token::Eof,
            ]
        );
    }

    #[test]
    fn tokenizes_quoted_identifier() {
        let got = tokens("\"my col\"");
        assert_eq!(got, vec![Token::Word(Word::quoted("my col", '"')), Token::Eof]);
    }

    #[test]
    fn tokenizes_string_with_doubled_quote_escape() {
        let got = tokens("'it''s'");
        assert_eq!(
            got,
            vec![
                Token::StringLiteral { value: "it's".into(), style: StringStyle::Single },
                Token::Eof,
            ]
        );
    }

    #[test]
    fn tokenizes_json_operators() {
        let got = tokens("a -> b ->> c");
        assert_eq!(
            got,
            vec![
                Token::Word(Word::identifier("a")),
                Token::ShortArrow,
                Token::Word(Word::identifier("b")),
                Token::LongArrow,
                Token::Word(Word::identifier("c")),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn tokenizes_line_comment() {
        let dialect = GenericDialect {};
        let out = Tokenizer::new(&dialect, "-- hi\nSELECT 1").tokenize().unwrap();
        assert!(matches!(out[0].token, Token::Comment { .. }));
    }

    #[test]
    fn rejects_unterminated_string() {
        let dialect = GenericDialect {};
        let err = Tokenizer::new(&dialect, "'abc").tokenize().unwrap_err();
        assert!(err.message.contains("unterminated"));
    }
}
