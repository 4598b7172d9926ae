//! Closed token sum type (§3.1, §4.2).
//!
//! Grounded on `crates/parser-core/src/parser/token.rs` (a span-carrying `Token` wrapper) for
//! the "every token carries its source location" idiom, and on
//! `other_examples/42ef883d_MaterializeInc-sqlparser__src-tokenizer.rs.rs`'s `Token` enum for the
//! closed variant set itself (word/number/string-family/operator punctuation).

use smol_str::SmolStr;

use crate::error::Location;
use crate::keywords::Keyword;

/// A keyword-or-identifier word. Quote style is preserved exactly so the serializer can emit the
/// identical surface form (§3.2 invariant ii).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word's text with quotes, if any, already stripped.
    pub value: SmolStr,
    /// `Some('"')`, `Some('`')`, `Some('[')`, ... when the word was delimited; `None` for a bare
    /// word, in which case `keyword` may be meaningful.
    pub quote_style: Option<char>,
    /// Resolved keyword id; `Keyword::NoKeyword` for quoted words and unrecognized bare words.
    pub keyword: Keyword,
}

impl Word {
    pub fn identifier(value: impl Into<SmolStr>) -> Self {
        let value = value.into();
        let keyword = Keyword::lookup(&value);
        Self {
            value,
            quote_style: None,
            keyword,
        }
    }

    pub fn quoted(value: impl Into<SmolStr>, quote: char) -> Self {
        Self {
            value: value.into(),
            quote_style: Some(quote),
            keyword: Keyword::NoKeyword,
        }
    }

    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.quote_style.is_none() && self.keyword == kw
    }
}

/// The quoting/escaping variant of a scanned string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringStyle {
    Single,
    Double,
    TripleSingle,
    TripleDouble,
    National,
    Escaped,
    Raw,
    Unicode,
    Byte,
}

/// A comment's lexical shape, kept only so the tokenizer can reconstruct a comment verbatim;
/// comments never survive into the AST (§3.2 invariant iv).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    Inline,
    Multiline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whitespace {
    Space,
    Tab,
    Newline,
}

/// Closed sum type of lexical tokens (§3.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(Word),
    /// Numeric literal preserved as its source text (§3.2 invariant iii); `long` records a
    /// trailing MySQL `L` suffix.
    Number { value: SmolStr, long: bool },
    /// A quoted string literal; `style` records which quoting/escaping family produced it.
    StringLiteral { value: SmolStr, style: StringStyle },
    HexStringLiteral(SmolStr),
    /// `$tag$...$tag$`; `tag` is empty for the bare `$$...$$` form.
    DollarQuotedString { value: SmolStr, tag: SmolStr },
    /// `?`, `$1`, `@name`, `:1`, `:name`.
    Placeholder(SmolStr),
    Whitespace(Whitespace),
    Comment { style: CommentStyle, prefix: SmolStr, text: SmolStr },

    Comma,
    SemiColon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Period,
    Colon,
    DoubleColon,
    Walrus,  // :=
    Arrow,   // =>
    Backslash,

    Eq,
    Neq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Spaceship, // <=>
    Plus,
    Minus,
    Mul,
    Div,
    IntDiv, // //
    Modulo,
    StringConcat, // ||
    Tilde,        // ~
    TildeAsterisk, // ~*
    NotTilde,      // !~
    NotTildeAsterisk, // !~*
    DoubleTilde, // ~~
    DoubleTildeAsterisk, // ~~*
    NotDoubleTilde, // !~~
    NotDoubleTildeAsterisk, // !~~*
    Caret,
    CaretAt, // ^@
    Ampersand,
    Pipe,
    PipeSlash,       // |/
    DoublePipeSlash, // ||/
    ExclamationMark, // !
    Question,
    QuestionPipe,     // ?|
    QuestionAmpersand,// ?&
    AtSign,
    AtQuestion, // @?
    AtAt,       // @@
    AtArrow,    // @>
    ArrowAt,    // <@
    HashArrow,    // #>
    HashLongArrow,// #>>
    LongArrow,    // ->>
    ShortArrow,   // ->
    HashMinus,    // #-
    Hash,         // #
    LShift,       // <<
    RShift,       // >>

    /// A maximal run of custom-operator characters not matching any known operator (§4.3
    /// "Operators"), tagged with the dialect-defined operator class.
    CustomBinaryOperator(SmolStr),

    Eof,
}

impl Token {
    pub fn is_whitespace_or_comment(&self) -> bool {
        matches!(self, Token::Whitespace(_) | Token::Comment { .. })
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word(w) => write!(f, "{}", w.value),
            Token::Number { value, .. } => write!(f, "{value}"),
            Token::StringLiteral { value, .. } => write!(f, "'{value}'"),
            Token::HexStringLiteral(v) => write!(f, "X'{v}'"),
            Token::DollarQuotedString { value, tag } => write!(f, "${tag}${value}${tag}$"),
            Token::Placeholder(v) => write!(f, "{v}"),
            Token::Eof => write!(f, "EOF"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// A [`Token`] annotated with the line/column it started at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWithLocation {
    pub token: Token,
    pub location: Location,
}

impl TokenWithLocation {
    pub fn new(token: Token, location: Location) -> Self {
        Self { token, location }
    }
}
