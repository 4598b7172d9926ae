use crate::ast::Expression;
use crate::error::ParseResult;
use crate::parser::Parser;
use crate::precedence::Precedence;
use crate::tokenizer::token::Token;

use super::{Dialect, DialectKind};

/// Snowflake.
#[derive(Debug, Default)]
pub struct SnowflakeDialect {}

impl Dialect for SnowflakeDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Snowflake
    }

    fn supports_qualify(&self) -> bool {
        true
    }

    fn supports_group_by_all(&self) -> bool {
        true
    }

    fn supports_dollar_placeholder(&self) -> bool {
        true
    }

    fn supports_connect_by(&self) -> bool {
        true
    }

    fn supports_named_fn_args_with_colon(&self) -> bool {
        true
    }

    fn supports_colon_placeholder(&self) -> bool {
        false
    }

    /// `a:foo[0].bar` JSON path access (§8 scenario 5).
    fn parse_infix(
        &self,
        parser: &mut Parser,
        expr: &Expression,
        _precedence: Precedence,
    ) -> Option<ParseResult<Expression>> {
        if parser.peek_token() == Token::Colon {
            Some(parser.parse_json_access(expr.clone()))
        } else {
            None
        }
    }
}
