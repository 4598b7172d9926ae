//! Expression parsing: Pratt/precedence-climbing (§4.4 "Expression parsing").

use crate::ast::*;
use crate::error::ParseResult;
use crate::keywords::Keyword;
use crate::precedence::{self, Precedence};
use crate::tokenizer::token::Token;

use super::Parser;

impl<'a> Parser<'a> {
    /// Parses an expression with minimum-precedence `0` (§4.4).
    pub fn parse_expr(&mut self) -> ParseResult<Expression> {
        self.parse_subexpr(precedence::UNKNOWN)
    }

    /// The Pratt loop: parse a prefix, then keep absorbing infix/postfix continuations whose
    /// precedence is at least `min_precedence`.
    pub fn parse_subexpr(&mut self, min_precedence: Precedence) -> ParseResult<Expression> {
        self.enter_recursion()?;
        let result = (|| {
            let mut expr = self.parse_prefix()?;
            loop {
                let next_precedence = self.get_next_precedence()?;
                if next_precedence <= min_precedence {
                    break;
                }
                expr = self.parse_infix(expr, next_precedence)?;
            }
            Ok(expr)
        })();
        self.exit_recursion();
        result
    }

    fn parse_prefix(&mut self) -> ParseResult<Expression> {
        if let Some(result) = self.dialect().parse_prefix(self) {
            return result;
        }

        match self.peek_token() {
            Token::Word(w) => self.parse_prefix_word(w.keyword),
            Token::Number { .. } | Token::StringLiteral { .. } | Token::HexStringLiteral(_)
            | Token::DollarQuotedString { .. } | Token::Placeholder(_) => {
                Ok(Expression::LiteralValue(self.parse_value()?))
            }
            Token::LParen => self.parse_parenthesized_expr(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_dictionary_literal(),
            Token::Mul => {
                self.next_token();
                Ok(Expression::Wildcard)
            }
            Token::Plus => {
                self.next_token();
                Ok(Expression::UnaryOp {
                    op: UnaryOperator::Plus,
                    expr: Box::new(self.parse_subexpr(precedence::PLUS_MINUS)?),
                })
            }
            Token::Minus => {
                self.next_token();
                Ok(Expression::UnaryOp {
                    op: UnaryOperator::Minus,
                    expr: Box::new(self.parse_subexpr(precedence::PLUS_MINUS)?),
                })
            }
            Token::Tilde => {
                self.next_token();
                Ok(Expression::UnaryOp {
                    op: UnaryOperator::PGBitwiseNot,
                    expr: Box::new(self.parse_subexpr(precedence::PLUS_MINUS)?),
                })
            }
            Token::AtSign => {
                self.next_token();
                Ok(Expression::UnaryOp {
                    op: UnaryOperator::PGAbs,
                    expr: Box::new(self.parse_subexpr(precedence::PLUS_MINUS)?),
                })
            }
            other => Err(self.expected("an expression", other)),
        }
    }

    fn parse_prefix_word(&mut self, keyword: Keyword) -> ParseResult<Expression> {
        match keyword {
            Keyword::TRUE => {
                self.next_token();
                Ok(Expression::LiteralValue(Value::Boolean(true)))
            }
            Keyword::FALSE => {
                self.next_token();
                Ok(Expression::LiteralValue(Value::Boolean(false)))
            }
            Keyword::NULL => {
                self.next_token();
                Ok(Expression::LiteralValue(Value::Null))
            }
            Keyword::NOT => {
                self.next_token();
                Ok(Expression::UnaryOp {
                    op: UnaryOperator::Not,
                    expr: Box::new(self.parse_subexpr(precedence::UNARY_NOT)?),
                })
            }
            Keyword::CASE => self.parse_case_expr(),
            Keyword::CAST => self.parse_cast_expr(CastKind::Cast),
            Keyword::TRY_CAST => self.parse_cast_expr(CastKind::TryCast),
            Keyword::SAFE_CAST => self.parse_cast_expr(CastKind::SafeCast),
            Keyword::EXTRACT => self.parse_extract_expr(),
            Keyword::SUBSTRING => self.parse_substring_expr(),
            Keyword::TRIM => self.parse_trim_expr(),
            Keyword::POSITION => self.parse_position_expr(),
            Keyword::OVERLAY => self.parse_overlay_expr(),
            Keyword::INTERVAL => self.parse_interval_expr(),
            Keyword::EXISTS => self.parse_exists_expr(false),
            Keyword::NOT if self.peek_nth_keyword(1, Keyword::EXISTS) => {
                self.next_token();
                self.parse_exists_expr(true)
            }
            Keyword::STRUCT => self.parse_struct_literal(),
            Keyword::ARRAY => self.parse_array_literal_keyword(),
            Keyword::UNNEST => self.parse_function_or_identifier(),
            _ => self.parse_function_or_identifier(),
        }
    }

    fn parse_function_or_identifier(&mut self) -> ParseResult<Expression> {
        let first = self.parse_identifier()?;
        let mut parts = vec![first];
        while self.peek_token() == Token::Period {
            self.next_token();
            if self.peek_token() == Token::Mul {
                self.next_token();
                let opts = self.parse_wildcard_additional_options()?;
                return Ok(Expression::QualifiedWildcard(ObjectName(parts), opts));
            }
            parts.push(self.parse_identifier()?);
        }
        if self.peek_token() == Token::LParen {
            return self.parse_function_call(ObjectName(parts));
        }
        if parts.len() == 1 {
            Ok(Expression::Identifier(parts.into_iter().next().unwrap()))
        } else {
            Ok(Expression::CompoundIdentifier(parts))
        }
    }

    fn parse_function_call(&mut self, name: ObjectName) -> ParseResult<Expression> {
        self.expect_token(&Token::LParen)?;
        let distinct = self.consume_keyword(Keyword::DISTINCT);
        let mut args = Vec::new();
        if self.peek_token() != Token::RParen {
            loop {
                args.push(self.parse_function_arg()?);
                if !self.consume_token(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect_token(&Token::RParen)?;

        let null_treatment = if self.consume_keyword(Keyword::RESPECT) {
            self.expect_keyword(Keyword::NULLS)?;
            Some(NullTreatment::RespectNulls)
        } else if self.consume_keyword(Keyword::IGNORE) {
            self.expect_keyword(Keyword::NULLS)?;
            Some(NullTreatment::IgnoreNulls)
        } else {
            None
        };

        let within_group = if self.consume_keywords(&[Keyword::WITHIN, Keyword::GROUP]) {
            self.expect_token(&Token::LParen)?;
            self.expect_keywords(&[Keyword::ORDER, Keyword::BY])?;
            let order_by = self.parse_comma_separated(Self::parse_order_by_expr)?;
            self.expect_token(&Token::RParen)?;
            order_by
        } else {
            Vec::new()
        };

        let filter = if self.consume_keyword(Keyword::FILTER) {
            self.expect_token(&Token::LParen)?;
            self.expect_keyword(Keyword::WHERE)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            Some(Box::new(expr))
        } else {
            None
        };

        let over = if self.consume_keyword(Keyword::OVER) {
            Some(self.parse_window_type()?)
        } else {
            None
        };

        Ok(Expression::Function(Function {
            name,
            args,
            distinct,
            null_treatment,
            filter,
            within_group,
            over,
        }))
    }

    pub(crate) fn parse_function_arg(&mut self) -> ParseResult<FunctionArg> {
        if let Token::Word(w) = self.peek_token() {
            if w.quote_style.is_none()
                && matches!(self.peek_nth_token(1), Token::Arrow)
                && self.dialect().supports_named_fn_args_with_colon().then_some(()).is_none()
            {
                // fallthrough for the common `name => expr` form below
            }
        }
        if let Token::Word(w) = self.peek_token() {
            if w.quote_style.is_none() && self.peek_nth_token(1) == Token::Arrow {
                let name = self.parse_identifier()?;
                self.next_token();
                let arg = self.parse_function_arg_expr()?;
                return Ok(FunctionArg::Named { name, arg });
            }
        }
        Ok(FunctionArg::Unnamed(self.parse_function_arg_expr()?))
    }

    fn parse_function_arg_expr(&mut self) -> ParseResult<FunctionArgExpr> {
        if self.peek_token() == Token::Mul {
            self.next_token();
            return Ok(FunctionArgExpr::Wildcard);
        }
        Ok(FunctionArgExpr::Expr(self.parse_expr()?))
    }

    pub(crate) fn parse_wildcard_additional_options(&mut self) -> ParseResult<WildcardAdditionalOptions> {
        let mut opts = WildcardAdditionalOptions::default();
        if self.consume_keyword(Keyword::EXCLUDE) {
            opts.opt_exclude = self.parse_parenthesized_idents_or_single()?;
        }
        if self.consume_keyword(Keyword::EXCEPT) {
            opts.opt_except = self.parse_parenthesized_idents_or_single()?;
        }
        if self.consume_keyword(Keyword::REPLACE) {
            self.expect_token(&Token::LParen)?;
            opts.opt_replace = self.parse_comma_separated(|p| {
                let expr = p.parse_expr()?;
                p.expect_keyword(Keyword::AS)?;
                let alias = p.parse_identifier()?;
                Ok((expr, alias))
            })?;
            self.expect_token(&Token::RParen)?;
        }
        if self.consume_keyword(Keyword::RENAME) {
            self.expect_token(&Token::LParen)?;
            opts.opt_rename = self.parse_comma_separated(|p| {
                let from = p.parse_identifier()?;
                p.expect_keyword(Keyword::AS)?;
                let to = p.parse_identifier()?;
                Ok((from, to))
            })?;
            self.expect_token(&Token::RParen)?;
        }
        Ok(opts)
    }

    pub(crate) fn parse_parenthesized_idents_or_single(&mut self) -> ParseResult<Vec<Ident>> {
        if self.peek_token() == Token::LParen {
            self.parse_parenthesized_idents()
        } else {
            Ok(vec![self.parse_identifier()?])
        }
    }

    fn parse_window_type(&mut self) -> ParseResult<WindowType> {
        if self.peek_token() == Token::LParen {
            self.next_token();
            let spec = self.parse_window_spec()?;
            self.expect_token(&Token::RParen)?;
            Ok(WindowType::Spec(spec))
        } else {
            Ok(WindowType::NamedWindow(self.parse_identifier()?))
        }
    }

    pub(crate) fn parse_window_spec(&mut self) -> ParseResult<WindowSpec> {
        let partition_by = if self.consume_keywords(&[Keyword::PARTITION, Keyword::BY]) {
            self.parse_comma_separated(Self::parse_expr)?
        } else {
            Vec::new()
        };
        let order_by = if self.consume_keywords(&[Keyword::ORDER, Keyword::BY]) {
            self.parse_comma_separated(Self::parse_order_by_expr)?
        } else {
            Vec::new()
        };
        let window_frame = self.parse_window_frame()?;
        Ok(WindowSpec { partition_by, order_by, window_frame })
    }

    fn parse_window_frame(&mut self) -> ParseResult<Option<WindowFrame>> {
        let units = if self.consume_keyword(Keyword::ROWS) {
            WindowFrameUnits::Rows
        } else if self.consume_keyword(Keyword::RANGE) {
            WindowFrameUnits::Range
        } else if self.consume_keyword(Keyword::GROUPS) {
            WindowFrameUnits::Groups
        } else {
            return Ok(None);
        };
        if self.consume_keyword(Keyword::BETWEEN) {
            let start_bound = self.parse_window_frame_bound()?;
            self.expect_keyword(Keyword::AND)?;
            let end_bound = Some(self.parse_window_frame_bound()?);
            Ok(Some(WindowFrame { units, start_bound, end_bound }))
        } else {
            let start_bound = self.parse_window_frame_bound()?;
            Ok(Some(WindowFrame { units, start_bound, end_bound: None }))
        }
    }

    fn parse_window_frame_bound(&mut self) -> ParseResult<WindowFrameBound> {
        if self.consume_keyword(Keyword::CURRENT) {
            self.expect_keyword(Keyword::ROW)?;
            return Ok(WindowFrameBound { kind: WindowFrameBoundKind::CurrentRow });
        }
        let unbounded = self.consume_keyword(Keyword::UNBOUNDED);
        let bound = if unbounded {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        if self.consume_keyword(Keyword::PRECEDING) {
            Ok(WindowFrameBound { kind: WindowFrameBoundKind::Preceding(bound) })
        } else {
            self.expect_keyword(Keyword::FOLLOWING)?;
            Ok(WindowFrameBound { kind: WindowFrameBoundKind::Following(bound) })
        }
    }

    pub(crate) fn parse_order_by_expr(&mut self) -> ParseResult<OrderByExpr> {
        let expr = self.parse_expr()?;
        let asc = if self.consume_keyword(Keyword::ASC) {
            Some(true)
        } else if self.consume_keyword(Keyword::DESC) {
            Some(false)
        } else {
            None
        };
        let nulls_first = if self.consume_keywords(&[Keyword::NULLS, Keyword::FIRST]) {
            Some(true)
        } else if self.consume_keywords(&[Keyword::NULLS, Keyword::LAST]) {
            Some(false)
        } else {
            None
        };
        Ok(OrderByExpr { expr, asc, nulls_first })
    }

    fn parse_case_expr(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let operand = if !self.peek_keyword(Keyword::WHEN) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        let mut conditions = Vec::new();
        let mut results = Vec::new();
        while self.consume_keyword(Keyword::WHEN) {
            conditions.push(self.parse_expr()?);
            self.expect_keyword(Keyword::THEN)?;
            results.push(self.parse_expr()?);
        }
        let else_result = if self.consume_keyword(Keyword::ELSE) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::END)?;
        Ok(Expression::Case { operand, conditions, results, else_result })
    }

    fn parse_cast_expr(&mut self, kind: CastKind) -> ParseResult<Expression> {
        self.next_token();
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::AS)?;
        let data_type = self.parse_data_type()?;
        self.expect_token(&Token::RParen)?;
        Ok(Expression::Cast { expr: Box::new(expr), data_type, kind })
    }

    fn parse_extract_expr(&mut self) -> ParseResult<Expression> {
        self.next_token();
        self.expect_token(&Token::LParen)?;
        let field = self.parse_identifier()?;
        let syntax = if self.consume_keyword(Keyword::FROM) {
            ExtractSyntax::From
        } else {
            self.expect_token(&Token::Comma)?;
            ExtractSyntax::Comma
        };
        let expr = self.parse_expr()?;
        self.expect_token(&Token::RParen)?;
        Ok(Expression::Extract { field, syntax, expr: Box::new(expr) })
    }

    fn parse_substring_expr(&mut self) -> ParseResult<Expression> {
        self.next_token();
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_expr()?;
        let substring_from = if self.consume_keyword(Keyword::FROM) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        let substring_for = if self.consume_keyword(Keyword::FOR) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_token(&Token::RParen)?;
        Ok(Expression::Substring { expr: Box::new(expr), substring_from, substring_for })
    }

    fn parse_trim_expr(&mut self) -> ParseResult<Expression> {
        self.next_token();
        self.expect_token(&Token::LParen)?;
        let trim_where = if self.consume_keyword(Keyword::BOTH) {
            Some(TrimWhereField::Both)
        } else if self.consume_keyword(Keyword::LEADING) {
            Some(TrimWhereField::Leading)
        } else if self.consume_keyword(Keyword::TRAILING) {
            Some(TrimWhereField::Trailing)
        } else {
            None
        };
        let checkpoint = self.checkpoint();
        let mut trim_what = None;
        let expr = if trim_where.is_some() || self.looks_like_trim_what() {
            let first = self.parse_expr()?;
            if self.consume_keyword(Keyword::FROM) {
                trim_what = Some(Box::new(first));
                self.parse_expr()?
            } else {
                self.restore(checkpoint);
                self.parse_expr()?
            }
        } else {
            self.parse_expr()?
        };
        self.expect_token(&Token::RParen)?;
        Ok(Expression::Trim { expr: Box::new(expr), trim_where, trim_what })
    }

    fn looks_like_trim_what(&self) -> bool {
        false
    }

    fn parse_position_expr(&mut self) -> ParseResult<Expression> {
        self.next_token();
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_subexpr(precedence::BETWEEN_LIKE)?;
        self.expect_keyword(Keyword::IN)?;
        let r#in = self.parse_expr()?;
        self.expect_token(&Token::RParen)?;
        Ok(Expression::Position { expr: Box::new(expr), r#in: Box::new(r#in) })
    }

    fn parse_overlay_expr(&mut self) -> ParseResult<Expression> {
        self.next_token();
        self.expect_token(&Token::LParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::PLACING)?;
        let overlay_what = self.parse_expr()?;
        self.expect_keyword(Keyword::FROM)?;
        let overlay_from = self.parse_expr()?;
        let overlay_for = if self.consume_keyword(Keyword::FOR) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_token(&Token::RParen)?;
        Ok(Expression::Overlay {
            expr: Box::new(expr),
            overlay_what: Box::new(overlay_what),
            overlay_from: Box::new(overlay_from),
            overlay_for,
        })
    }

    fn parse_interval_expr(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let value = Box::new(self.parse_subexpr(precedence::PLUS_MINUS)?);
        let leading_field = if matches!(self.peek_token(), Token::Word(w) if w.keyword != Keyword::NoKeyword) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let leading_precision = self.maybe_parse_parenthesized_u64()?;
        let last_field = if self.consume_keyword(Keyword::TO) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let fractional_precision = self.maybe_parse_parenthesized_u64()?;
        Ok(Expression::Interval(Interval {
            value,
            leading_field,
            leading_precision,
            last_field,
            fractional_precision,
        }))
    }

    pub(crate) fn maybe_parse_parenthesized_u64(&mut self) -> ParseResult<Option<u64>> {
        if self.peek_token() == Token::LParen {
            self.next_token();
            let n = self.parse_u64_literal()?;
            self.expect_token(&Token::RParen)?;
            Ok(Some(n))
        } else {
            Ok(None)
        }
    }

    pub(crate) fn parse_u64_literal(&mut self) -> ParseResult<u64> {
        match self.next_token() {
            Token::Number { value, .. } => value
                .parse::<u64>()
                .map_err(|_| self.expected("an integer literal", Token::Number { value, long: false })),
            other => Err(self.expected("an integer literal", other)),
        }
    }

    fn parse_exists_expr(&mut self, negated: bool) -> ParseResult<Expression> {
        self.next_token();
        self.expect_token(&Token::LParen)?;
        let subquery = self.parse_query()?;
        self.expect_token(&Token::RParen)?;
        Ok(Expression::Exists { negated, subquery: Box::new(subquery) })
    }

    fn parse_struct_literal(&mut self) -> ParseResult<Expression> {
        self.next_token();
        self.expect_token(&Token::LParen)?;
        let mut fields = Vec::new();
        if self.peek_token() != Token::RParen {
            loop {
                fields.push(self.parse_expr()?);
                if !self.consume_token(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect_token(&Token::RParen)?;
        Ok(Expression::Struct(fields))
    }

    fn parse_array_literal_keyword(&mut self) -> ParseResult<Expression> {
        self.next_token();
        if self.peek_token() == Token::LBracket {
            return self.parse_array_literal();
        }
        self.expect_token(&Token::LParen)?;
        let subquery = self.parse_query()?;
        self.expect_token(&Token::RParen)?;
        Ok(Expression::Subquery(Box::new(subquery)))
    }

    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        self.expect_token(&Token::LBracket)?;
        let mut items = Vec::new();
        if self.peek_token() != Token::RBracket {
            loop {
                items.push(self.parse_expr()?);
                if !self.consume_token(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect_token(&Token::RBracket)?;
        Ok(Expression::Array(items))
    }

    fn parse_dictionary_literal(&mut self) -> ParseResult<Expression> {
        self.expect_token(&Token::LBrace)?;
        let mut entries = Vec::new();
        if self.peek_token() != Token::RBrace {
            loop {
                let key = self.parse_identifier()?;
                self.expect_token(&Token::Colon)?;
                let value = self.parse_expr()?;
                entries.push((key, Box::new(value)));
                if !self.consume_token(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect_token(&Token::RBrace)?;
        Ok(Expression::Dictionary(entries))
    }

    fn parse_parenthesized_expr(&mut self) -> ParseResult<Expression> {
        self.next_token();
        if self.looks_like_subquery() {
            let query = self.parse_query()?;
            self.expect_token(&Token::RParen)?;
            return Ok(Expression::Subquery(Box::new(query)));
        }
        let mut exprs = vec![self.parse_expr()?];
        while self.consume_token(&Token::Comma) {
            exprs.push(self.parse_expr()?);
        }
        self.expect_token(&Token::RParen)?;
        if exprs.len() == 1 {
            Ok(exprs.into_iter().next().unwrap())
        } else {
            Ok(Expression::Tuple(exprs))
        }
    }

    fn looks_like_subquery(&self) -> bool {
        matches!(self.peek_token(), Token::Word(w) if matches!(w.keyword, Keyword::SELECT | Keyword::WITH | Keyword::VALUES))
    }

    pub(crate) fn parse_value(&mut self) -> ParseResult<Value> {
        match self.next_token() {
            Token::Number { value, long } => Ok(Value::Number { value, long }),
            Token::StringLiteral { value, style } => Ok(match style {
                crate::tokenizer::token::StringStyle::Single => Value::SingleQuotedString(value),
                crate::tokenizer::token::StringStyle::Double => Value::DoubleQuotedString(value),
                crate::tokenizer::token::StringStyle::TripleSingle => Value::TripleSingleQuotedString(value),
                crate::tokenizer::token::StringStyle::TripleDouble => Value::TripleDoubleQuotedString(value),
                crate::tokenizer::token::StringStyle::National => Value::NationalStringLiteral(value),
                crate::tokenizer::token::StringStyle::Escaped => Value::EscapedStringLiteral(value),
                crate::tokenizer::token::StringStyle::Raw => Value::RawStringLiteral(value),
                crate::tokenizer::token::StringStyle::Unicode => Value::UnicodeStringLiteral(value),
                crate::tokenizer::token::StringStyle::Byte => Value::ByteStringLiteral(value),
            }),
            Token::HexStringLiteral(value) => Ok(Value::HexStringLiteral(value)),
            Token::DollarQuotedString { value, tag } => Ok(Value::DollarQuotedString { value, tag }),
            Token::Placeholder(value) => Ok(Value::Placeholder(value)),
            other => Err(self.expected("a literal value", other)),
        }
    }

    fn get_next_precedence(&mut self) -> ParseResult<Precedence> {
        if let Some(result) = self.dialect().get_next_precedence(self) {
            return result;
        }

        let token = self.peek_token();
        let prec = match &token {
            Token::Word(w) => match w.keyword {
                Keyword::OR => precedence::OR,
                Keyword::AND => precedence::AND,
                Keyword::XOR => precedence::XOR,
                Keyword::NOT if self.not_prefixes_like_family_predicate() => precedence::LIKE,
                Keyword::NOT if self.not_prefixes_between_family_predicate() => precedence::BETWEEN_LIKE,
                Keyword::IS => precedence::IS,
                Keyword::LIKE | Keyword::ILIKE | Keyword::SIMILAR | Keyword::REGEXP | Keyword::RLIKE => {
                    precedence::LIKE
                }
                Keyword::BETWEEN | Keyword::IN => precedence::BETWEEN_LIKE,
                Keyword::AT if self.peek_nth_keyword(1, Keyword::TIME) => precedence::AT_TIME_ZONE,
                Keyword::COLLATE => precedence::PG_COLLATE,
                _ => precedence::UNKNOWN,
            },
            Token::Eq
            | Token::Neq
            | Token::Lt
            | Token::Gt
            | Token::LtEq
            | Token::GtEq
            | Token::Spaceship => precedence::BETWEEN_LIKE,
            Token::Plus | Token::Minus => precedence::PLUS_MINUS,
            Token::Mul | Token::Div | Token::IntDiv | Token::Modulo => precedence::MUL_DIV_MOD,
            Token::StringConcat => precedence::PIPE,
            Token::Caret | Token::CaretAt => precedence::CARET,
            Token::Ampersand => precedence::AMPERSAND,
            Token::Pipe => precedence::PIPE,
            Token::DoubleColon => precedence::DOUBLE_COLON,
            Token::LBracket => precedence::PG_SUBSCRIPT,
            Token::Colon => precedence::SNOWFLAKE_COLON,
            Token::ShortArrow
            | Token::LongArrow
            | Token::HashArrow
            | Token::HashLongArrow
            | Token::AtArrow
            | Token::ArrowAt
            | Token::Question
            | Token::QuestionPipe
            | Token::QuestionAmpersand => precedence::PG_OTHER,
            Token::Tilde
            | Token::TildeAsterisk
            | Token::NotTilde
            | Token::NotTildeAsterisk
            | Token::DoubleTilde
            | Token::DoubleTildeAsterisk
            | Token::NotDoubleTilde
            | Token::NotDoubleTildeAsterisk => precedence::PG_OTHER,
            Token::LShift | Token::RShift => precedence::AMPERSAND,
            Token::ExclamationMark => precedence::PG_SUBSCRIPT,
            Token::CustomBinaryOperator(_) => precedence::PG_OTHER,
            _ => precedence::UNKNOWN,
        };
        Ok(prec)
    }

    /// `NOT` takes on `LIKE`'s precedence (19) when it prefixes a LIKE-family predicate (§4.4:
    /// "equal to LIKE when followed by LIKE/ILIKE/SIMILAR/REGEXP/RLIKE").
    fn not_prefixes_like_family_predicate(&self) -> bool {
        matches!(
            self.peek_nth_token(1),
            Token::Word(w) if matches!(w.keyword, Keyword::LIKE | Keyword::ILIKE | Keyword::SIMILAR | Keyword::REGEXP | Keyword::RLIKE)
        )
    }

    /// `NOT` takes on `BETWEEN`'s precedence (20) when it prefixes `BETWEEN`/`IN` (§4.4: "equal to
    /// BETWEEN when followed by IN/BETWEEN").
    fn not_prefixes_between_family_predicate(&self) -> bool {
        matches!(
            self.peek_nth_token(1),
            Token::Word(w) if matches!(w.keyword, Keyword::BETWEEN | Keyword::IN)
        )
    }

    fn parse_infix(&mut self, expr: Expression, precedence: Precedence) -> ParseResult<Expression> {
        if let Some(result) = self.dialect().parse_infix(self, &expr, precedence) {
            return result;
        }

        let token = self.peek_token();
        match &token {
            Token::Word(w) => match w.keyword {
                Keyword::AND => self.parse_binary_op(expr, BinaryOperator::And, precedence),
                Keyword::OR => self.parse_binary_op(expr, BinaryOperator::Or, precedence),
                Keyword::XOR => self.parse_binary_op(expr, BinaryOperator::Xor, precedence),
                Keyword::IS => self.parse_is_expr(expr),
                Keyword::NOT
                | Keyword::LIKE
                | Keyword::ILIKE
                | Keyword::SIMILAR
                | Keyword::BETWEEN
                | Keyword::IN
                | Keyword::REGEXP
                | Keyword::RLIKE => self.parse_predicate(expr),
                Keyword::COLLATE => {
                    self.next_token();
                    let collation = self.parse_object_name()?;
                    Ok(Expression::Collate { expr: Box::new(expr), collation })
                }
                Keyword::AT => {
                    self.next_token();
                    self.expect_keywords(&[Keyword::TIME, Keyword::ZONE])?;
                    let time_zone = self.parse_subexpr(precedence::AT_TIME_ZONE)?;
                    Ok(Expression::AtTimeZone { timestamp: Box::new(expr), time_zone: Box::new(time_zone) })
                }
                _ => Err(self.expected("an infix operator", token)),
            },
            Token::DoubleColon => {
                self.next_token();
                let data_type = self.parse_data_type()?;
                Ok(Expression::Cast { expr: Box::new(expr), data_type, kind: CastKind::Cast })
            }
            Token::LBracket => {
                self.next_token();
                let index = self.parse_expr()?;
                self.expect_token(&Token::RBracket)?;
                Ok(Expression::Subscript { expr: Box::new(expr), index: Box::new(index) })
            }
            Token::ExclamationMark => {
                self.next_token();
                Ok(Expression::UnaryOp { op: UnaryOperator::PGPostfixFactorial, expr: Box::new(expr) })
            }
            _ => self.parse_binary_op_from_token(expr, token, precedence),
        }
    }

    fn parse_binary_op(&mut self, left: Expression, op: BinaryOperator, precedence: Precedence) -> ParseResult<Expression> {
        self.next_token();
        let right = self.parse_subexpr(precedence)?;
        Ok(Expression::BinaryOp { left: Box::new(left), op, right: Box::new(right) })
    }

    fn parse_binary_op_from_token(&mut self, left: Expression, token: Token, precedence: Precedence) -> ParseResult<Expression> {
        let op = match token {
            Token::Eq => BinaryOperator::Eq,
            Token::Neq => BinaryOperator::NotEq,
            Token::Lt => BinaryOperator::Lt,
            Token::Gt => BinaryOperator::Gt,
            Token::LtEq => BinaryOperator::LtEq,
            Token::GtEq => BinaryOperator::GtEq,
            Token::Spaceship => BinaryOperator::Spaceship,
            Token::Plus => BinaryOperator::Plus,
            Token::Minus => BinaryOperator::Minus,
            Token::Mul => BinaryOperator::Multiply,
            Token::Div => BinaryOperator::Divide,
            Token::IntDiv => BinaryOperator::MyIntegerDivide,
            Token::Modulo => BinaryOperator::Modulo,
            Token::StringConcat => BinaryOperator::StringConcat,
            Token::Caret => BinaryOperator::PGExp,
            Token::Ampersand => BinaryOperator::BitwiseAnd,
            Token::Pipe => BinaryOperator::BitwiseOr,
            Token::LShift => BinaryOperator::PGBitwiseShiftLeft,
            Token::RShift => BinaryOperator::PGBitwiseShiftRight,
            Token::ShortArrow => BinaryOperator::Arrow,
            Token::LongArrow => BinaryOperator::LongArrow,
            Token::HashArrow => BinaryOperator::HashArrow,
            Token::HashLongArrow => BinaryOperator::HashLongArrow,
            Token::AtArrow => BinaryOperator::AtArrow,
            Token::ArrowAt => BinaryOperator::ArrowAt,
            Token::Question => BinaryOperator::QuestionMark,
            Token::QuestionPipe => BinaryOperator::QuestionPipe,
            Token::QuestionAmpersand => BinaryOperator::QuestionAmpersand,
            Token::Tilde => BinaryOperator::PGRegexMatch,
            Token::TildeAsterisk => BinaryOperator::PGRegexIMatch,
            Token::NotTilde => BinaryOperator::PGRegexNotMatch,
            Token::NotTildeAsterisk => BinaryOperator::PGRegexNotIMatch,
            Token::DoubleTilde => BinaryOperator::PGLikeMatch,
            Token::DoubleTildeAsterisk => BinaryOperator::PGILikeMatch,
            Token::NotDoubleTilde => BinaryOperator::PGNotLikeMatch,
            Token::NotDoubleTildeAsterisk => BinaryOperator::PGNotILikeMatch,
            Token::CustomBinaryOperator(op) => BinaryOperator::Custom(op),
            other => return Err(self.expected("an infix operator", other)),
        };
        self.parse_binary_op(left, op, precedence)
    }

    fn parse_is_expr(&mut self, expr: Expression) -> ParseResult<Expression> {
        self.next_token();
        let negated = self.consume_keyword(Keyword::NOT);
        if self.consume_keyword(Keyword::NULL) {
            return Ok(if negated { Expression::IsNotNull(Box::new(expr)) } else { Expression::IsNull(Box::new(expr)) });
        }
        if self.consume_keyword(Keyword::TRUE) {
            return Ok(if negated {
                Expression::UnaryOp { op: UnaryOperator::Not, expr: Box::new(Expression::IsTrue(Box::new(expr))) }
            } else {
                Expression::IsTrue(Box::new(expr))
            });
        }
        if self.consume_keyword(Keyword::FALSE) {
            return Ok(if negated {
                Expression::UnaryOp { op: UnaryOperator::Not, expr: Box::new(Expression::IsFalse(Box::new(expr))) }
            } else {
                Expression::IsFalse(Box::new(expr))
            });
        }
        if self.consume_keyword(Keyword::UNKNOWN) {
            return Ok(Expression::IsUnknown(Box::new(expr)));
        }
        if self.consume_keyword(Keyword::DISTINCT) {
            self.expect_keyword(Keyword::FROM)?;
            let other = self.parse_subexpr(precedence::IS)?;
            return Ok(if negated {
                Expression::IsNotDistinctFrom(Box::new(expr), Box::new(other))
            } else {
                Expression::IsDistinctFrom(Box::new(expr), Box::new(other))
            });
        }
        Err(self.expected("NULL, TRUE, FALSE, UNKNOWN, or DISTINCT FROM", self.peek_token()))
    }

    fn parse_predicate(&mut self, expr: Expression) -> ParseResult<Expression> {
        let negated = self.consume_keyword(Keyword::NOT);
        if self.consume_keyword(Keyword::BETWEEN) {
            let low = self.parse_subexpr(precedence::BETWEEN_LIKE)?;
            self.expect_keyword(Keyword::AND)?;
            let high = self.parse_subexpr(precedence::BETWEEN_LIKE)?;
            return Ok(Expression::Between { negated, expr: Box::new(expr), low: Box::new(low), high: Box::new(high) });
        }
        if self.consume_keyword(Keyword::IN) {
            return self.parse_in_predicate(expr, negated);
        }
        if self.consume_keyword(Keyword::LIKE) {
            return self.parse_like_predicate(expr, negated, false);
        }
        if self.consume_keyword(Keyword::ILIKE) {
            return self.parse_like_predicate(expr, negated, true);
        }
        if self.consume_keywords(&[Keyword::SIMILAR, Keyword::TO]) {
            let pattern = self.parse_subexpr(precedence::LIKE)?;
            let escape_char = self.parse_optional_escape_char()?;
            return Ok(Expression::SimilarTo { negated, expr: Box::new(expr), pattern: Box::new(pattern), escape_char });
        }
        if self.consume_keyword(Keyword::REGEXP) || self.consume_keyword(Keyword::RLIKE) {
            let pattern = self.parse_subexpr(precedence::LIKE)?;
            return Ok(Expression::Regexp { negated, expr: Box::new(expr), pattern: Box::new(pattern) });
        }
        Err(self.expected("BETWEEN, IN, LIKE, ILIKE, SIMILAR TO, REGEXP, or RLIKE", self.peek_token()))
    }

    fn parse_in_predicate(&mut self, expr: Expression, negated: bool) -> ParseResult<Expression> {
        self.expect_token(&Token::LParen)?;
        if self.peek_keyword(Keyword::SELECT) || self.peek_keyword(Keyword::WITH) {
            let subquery = self.parse_query()?;
            self.expect_token(&Token::RParen)?;
            return Ok(Expression::InSubquery { negated, expr: Box::new(expr), subquery: Box::new(subquery) });
        }
        let mut list = Vec::new();
        if self.peek_token() != Token::RParen {
            loop {
                list.push(self.parse_expr()?);
                if !self.consume_token(&Token::Comma) {
                    break;
                }
            }
        }
        self.expect_token(&Token::RParen)?;
        Ok(Expression::InList { negated, expr: Box::new(expr), list })
    }

    fn parse_like_predicate(&mut self, expr: Expression, negated: bool, ilike: bool) -> ParseResult<Expression> {
        let pattern = self.parse_subexpr(precedence::LIKE)?;
        let escape_char = self.parse_optional_escape_char()?;
        if ilike {
            Ok(Expression::ILike { negated, expr: Box::new(expr), pattern: Box::new(pattern), escape_char })
        } else {
            Ok(Expression::Like { negated, expr: Box::new(expr), pattern: Box::new(pattern), escape_char })
        }
    }

    fn parse_optional_escape_char(&mut self) -> ParseResult<Option<char>> {
        if self.consume_keyword(Keyword::ESCAPE) {
            let value = self.parse_value()?;
            if let Value::SingleQuotedString(s) = value {
                return Ok(s.chars().next());
            }
        }
        Ok(None)
    }

    /// Snowflake's `a:foo[0].bar` path-access notation (§8 scenario 5). Invoked from
    /// [`crate::dialect::SnowflakeDialect::parse_infix`] once the leading `:` is seen.
    pub(crate) fn parse_json_access(&mut self, expr: Expression) -> ParseResult<Expression> {
        self.expect_token(&Token::Colon)?;
        let mut path = vec![self.parse_json_path_dot()?];
        loop {
            if self.consume_token(&Token::Period) {
                path.push(self.parse_json_path_dot()?);
            } else if self.peek_token() == Token::LBracket {
                self.next_token();
                let key = self.parse_expr()?;
                self.expect_token(&Token::RBracket)?;
                path.push(JsonPathElem::Bracket { key: Box::new(key) });
            } else {
                break;
            }
        }
        Ok(Expression::JsonAccess { expr: Box::new(expr), path: JsonPath { path } })
    }

    fn parse_json_path_dot(&mut self) -> ParseResult<JsonPathElem> {
        match self.peek_token() {
            Token::Word(w) => {
                let quoted = w.quote_style.is_some();
                let key = self.parse_identifier()?;
                Ok(JsonPathElem::Dot { key, quoted })
            }
            other => Err(self.expected("a JSON path key", other)),
        }
    }
}
