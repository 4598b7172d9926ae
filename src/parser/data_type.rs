//! Data type parsing (§4.6).

use crate::ast::*;
use crate::error::ParseResult;
use crate::keywords::Keyword;
use crate::tokenizer::token::Token;

use super::Parser;

impl<'a> Parser<'a> {
    pub fn parse_data_type(&mut self) -> ParseResult<DataType> {
        let word = match self.next_token() {
            Token::Word(w) => w,
            other => return Err(self.expected("a data type", other)),
        };
        match word.keyword {
            Keyword::CHAR | Keyword::CHARACTER => Ok(DataType::Char(self.maybe_parse_parenthesized_u64()?)),
            Keyword::VARCHAR => Ok(DataType::Varchar(self.maybe_parse_parenthesized_u64()?)),
            Keyword::NVARCHAR => Ok(DataType::Nvarchar(self.maybe_parse_parenthesized_u64()?)),
            Keyword::TEXT | Keyword::STRING => Ok(DataType::Text),
            Keyword::CLOB => Ok(DataType::Clob(self.maybe_parse_parenthesized_u64()?)),
            Keyword::BINARY => Ok(DataType::Binary(self.maybe_parse_parenthesized_u64()?)),
            Keyword::VARBINARY => Ok(DataType::Varbinary(self.maybe_parse_parenthesized_u64()?)),
            Keyword::BLOB => Ok(DataType::Blob(self.maybe_parse_parenthesized_u64()?)),
            Keyword::BYTES => Ok(DataType::Bytes(self.maybe_parse_parenthesized_u64()?)),
            Keyword::NUMERIC => Ok(DataType::Numeric(self.parse_exact_number_info()?)),
            Keyword::DECIMAL | Keyword::DEC => Ok(DataType::Decimal(self.parse_exact_number_info()?)),
            Keyword::BIGNUMERIC | Keyword::BIGDECIMAL => Ok(DataType::BigNumeric(self.parse_exact_number_info()?)),
            Keyword::FLOAT => Ok(DataType::Float(self.maybe_parse_parenthesized_u64()?)),
            Keyword::TINYINT => Ok(DataType::TinyInt(self.consume_keyword(Keyword::UNSIGNED))),
            Keyword::SMALLINT => Ok(DataType::SmallInt(self.consume_keyword(Keyword::UNSIGNED))),
            Keyword::MEDIUMINT => Ok(DataType::MediumInt(self.consume_keyword(Keyword::UNSIGNED))),
            Keyword::INT | Keyword::INTEGER => Ok(DataType::Int(self.consume_keyword(Keyword::UNSIGNED))),
            Keyword::BIGINT => Ok(DataType::BigInt(self.consume_keyword(Keyword::UNSIGNED))),
            Keyword::REAL => Ok(DataType::Real),
            Keyword::DOUBLE if self.consume_keyword(Keyword::PRECISION) => Ok(DataType::DoublePrecision),
            Keyword::DOUBLE => Ok(DataType::Double),
            Keyword::BOOLEAN | Keyword::BOOL => Ok(DataType::Boolean),
            Keyword::DATE => Ok(DataType::Date),
            Keyword::TIME => Ok(DataType::Time(self.parse_timezone_info()?)),
            Keyword::TIMESTAMP => Ok(DataType::Timestamp(self.parse_timezone_info()?)),
            Keyword::DATETIME => Ok(DataType::Datetime),
            Keyword::INTERVAL => Ok(DataType::Interval),
            Keyword::JSON => Ok(DataType::JSON),
            Keyword::JSONB => Ok(DataType::JSONB),
            Keyword::UUID => Ok(DataType::Uuid),
            Keyword::ARRAY => self.parse_array_type(),
            Keyword::MAP => self.parse_map_type(),
            Keyword::STRUCT => self.parse_struct_type(),
            Keyword::UNION => self.parse_union_type(),
            Keyword::ENUM => Ok(DataType::Enum(self.parse_string_value_list()?)),
            Keyword::SET => Ok(DataType::Set(self.parse_string_value_list()?)),
            _ => {
                self.prev_token();
                let name = self.parse_object_name()?;
                let modifiers = if self.peek_token() == Token::LParen {
                    self.next_token();
                    let mods = self.parse_comma_separated(|p| match p.next_token() {
                        Token::Number { value, .. } => Ok(value.to_string()),
                        Token::Word(w) => Ok(w.value.to_string()),
                        other => Err(p.expected("a type modifier", other)),
                    })?;
                    self.expect_token(&Token::RParen)?;
                    mods
                } else {
                    Vec::new()
                };
                Ok(DataType::Custom(name, modifiers))
            }
        }
    }

    fn parse_exact_number_info(&mut self) -> ParseResult<ExactNumberInfo> {
        if self.peek_token() != Token::LParen {
            return Ok(ExactNumberInfo::None);
        }
        self.next_token();
        let precision = self.parse_u64_literal()?;
        let info = if self.consume_token(&Token::Comma) {
            let scale = self.parse_u64_literal()?;
            ExactNumberInfo::PrecisionAndScale(precision, scale)
        } else {
            ExactNumberInfo::Precision(precision)
        };
        self.expect_token(&Token::RParen)?;
        Ok(info)
    }

    fn parse_timezone_info(&mut self) -> ParseResult<TimezoneInfo> {
        if self.consume_keywords(&[Keyword::WITH, Keyword::TIME, Keyword::ZONE]) {
            Ok(TimezoneInfo::WithTimeZone)
        } else if self.consume_keywords(&[Keyword::WITHOUT, Keyword::TIME, Keyword::ZONE]) {
            Ok(TimezoneInfo::WithoutTimeZone)
        } else {
            Ok(TimezoneInfo::None)
        }
    }

    fn parse_array_type(&mut self) -> ParseResult<DataType> {
        if self.consume_token(&Token::Lt) {
            let inner = self.parse_data_type()?;
            self.expect_token(&Token::Gt)?;
            Ok(DataType::Array(Some(Box::new(inner))))
        } else if self.peek_token() == Token::LParen {
            self.next_token();
            let inner = self.parse_data_type()?;
            self.expect_token(&Token::RParen)?;
            Ok(DataType::Array(Some(Box::new(inner))))
        } else {
            Ok(DataType::Array(None))
        }
    }

    fn parse_map_type(&mut self) -> ParseResult<DataType> {
        self.expect_token(&Token::Lt)?;
        let key = self.parse_data_type()?;
        self.expect_token(&Token::Comma)?;
        let value = self.parse_data_type()?;
        self.expect_token(&Token::Gt)?;
        Ok(DataType::Map(Box::new(key), Box::new(value)))
    }

    fn parse_struct_type(&mut self) -> ParseResult<DataType> {
        let (open, close, kind) = if self.peek_token() == Token::Lt {
            (Token::Lt, Token::Gt, StructBracketKind::AngleBrackets)
        } else {
            (Token::LParen, Token::RParen, StructBracketKind::Parentheses)
        };
        self.expect_token(&open)?;
        let mut fields = Vec::new();
        if self.peek_token() != close {
            loop {
                let checkpoint = self.checkpoint();
                let name = match self.peek_token() {
                    Token::Word(w) if w.keyword == Keyword::NoKeyword || w.quote_style.is_some() => {
                        let ident = self.parse_identifier()?;
                        Some(ident)
                    }
                    _ => None,
                };
                let data_type = match self.parse_data_type() {
                    Ok(dt) => dt,
                    Err(e) => {
                        self.restore(checkpoint);
                        if name.is_some() {
                            return Err(e);
                        }
                        self.parse_data_type()?
                    }
                };
                fields.push(StructField { name, data_type });
                if !self.consume_token(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect_token(&close)?;
        Ok(DataType::Struct(fields, kind))
    }

    fn parse_union_type(&mut self) -> ParseResult<DataType> {
        self.expect_token(&Token::LParen)?;
        let types = self.parse_comma_separated(Self::parse_data_type)?;
        self.expect_token(&Token::RParen)?;
        Ok(DataType::Union(types))
    }

    fn parse_string_value_list(&mut self) -> ParseResult<Vec<String>> {
        self.expect_token(&Token::LParen)?;
        let values = self.parse_comma_separated(|p| match p.parse_value()? {
            Value::SingleQuotedString(s) => Ok(s.to_string()),
            other => Err(p.expected("a string literal", Token::StringLiteral { value: other.to_string().into(), style: crate::tokenizer::token::StringStyle::Single })),
        })?;
        self.expect_token(&Token::RParen)?;
        Ok(values)
    }
}
