//! `Query` parsing: optional `WITH`, a set-operation body, then `ORDER BY`/`LIMIT`/`OFFSET`/
//! `FETCH`/locking clauses (§4.4, §3.3).

use crate::ast::*;
use crate::error::ParseResult;
use crate::keywords::Keyword;
use crate::precedence;
use crate::tokenizer::token::Token;

use super::Parser;

impl<'a> Parser<'a> {
    pub fn parse_query(&mut self) -> ParseResult<Query> {
        self.enter_recursion()?;
        let result = self.parse_query_inner();
        self.exit_recursion();
        result
    }

    fn parse_query_inner(&mut self) -> ParseResult<Query> {
        let with = if self.peek_keyword(Keyword::WITH) {
            Some(self.parse_with()?)
        } else {
            None
        };

        let body = Box::new(self.parse_set_expression(precedence::UNKNOWN)?);

        let order_by = if self.consume_keywords(&[Keyword::ORDER, Keyword::BY]) {
            self.parse_comma_separated(Self::parse_order_by_expr)?
        } else {
            Vec::new()
        };

        let mut limit = None;
        let mut offset = None;
        if self.consume_keyword(Keyword::LIMIT) {
            if self.consume_keyword(Keyword::ALL) {
                limit = None;
            } else {
                limit = Some(self.parse_expr()?);
                if self.dialect().supports_limit_comma() && self.consume_token(&Token::Comma) {
                    offset = limit;
                    limit = Some(self.parse_expr()?);
                }
            }
        }
        if offset.is_none() && self.consume_keyword(Keyword::OFFSET) {
            offset = Some(self.parse_expr()?);
            self.parse_one_of_keywords(&[Keyword::ROW, Keyword::ROWS]);
        }

        let fetch = if self.consume_keywords(&[Keyword::FETCH, Keyword::FIRST])
            || self.consume_keywords(&[Keyword::FETCH, Keyword::NEXT])
        {
            let quantity = if matches!(self.peek_token(), Token::Number { .. }) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            let percent = self.consume_keyword(Keyword::PERCENT);
            self.expect_one_of_keywords(&[Keyword::ROW, Keyword::ROWS])?;
            let with_ties = self.consume_keyword(Keyword::TIES);
            if !with_ties {
                self.expect_keyword(Keyword::ONLY)?;
            }
            Some(Fetch { with_ties, percent, quantity })
        } else {
            None
        };

        let mut locks = Vec::new();
        loop {
            if self.consume_keywords(&[Keyword::FOR, Keyword::UPDATE]) {
                locks.push(self.parse_lock_clause(LockType::Update)?);
            } else if self.consume_keywords(&[Keyword::FOR, Keyword::SHARE]) {
                locks.push(self.parse_lock_clause(LockType::Share)?);
            } else {
                break;
            }
        }

        Ok(Query { with, body, order_by, limit, offset, fetch, locks })
    }

    fn parse_lock_clause(&mut self, lock_type: LockType) -> ParseResult<LockClause> {
        let of = if self.consume_keyword(Keyword::OF) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let nonblocking = if self.consume_keyword(Keyword::NOWAIT) {
            Some(NonBlock::Nowait)
        } else if self.consume_keywords(&[Keyword::SKIP, Keyword::LOCKED]) {
            Some(NonBlock::SkipLocked)
        } else {
            None
        };
        Ok(LockClause { lock_type, of, nonblocking })
    }

    fn parse_with(&mut self) -> ParseResult<With> {
        self.next_token();
        let recursive = self.consume_keyword(Keyword::RECURSIVE);
        let cte_tables = self.parse_comma_separated(Self::parse_cte)?;
        Ok(With { recursive, cte_tables })
    }

    fn parse_cte(&mut self) -> ParseResult<Cte> {
        let alias = self.parse_identifier()?;
        let column_aliases = if self.peek_token() == Token::LParen {
            self.parse_parenthesized_idents()?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::AS)?;
        let materialized = if self.consume_keyword(Keyword::MATERIALIZED) {
            Some(true)
        } else if self.consume_keywords(&[Keyword::NOT, Keyword::MATERIALIZED]) {
            Some(false)
        } else {
            None
        };
        self.expect_token(&Token::LParen)?;
        let query = self.parse_query()?;
        self.expect_token(&Token::RParen)?;
        Ok(Cte { alias, column_aliases, query: Box::new(query), materialized })
    }

    /// Precedence-climbing over `UNION`/`EXCEPT`/`INTERSECT`, all left-associative at the same
    /// level (§3.3 invariant i).
    fn parse_set_expression(&mut self, min_precedence: u8) -> ParseResult<SetExpression> {
        let mut expr = self.parse_query_term()?;
        loop {
            let Some(op) = self.peek_set_operator() else { break };
            if 1 <= min_precedence {
                break;
            }
            self.next_token();
            let set_quantifier = if self.consume_keyword(Keyword::ALL) {
                SetQuantifier::All
            } else if self.consume_keyword(Keyword::DISTINCT) {
                SetQuantifier::Distinct
            } else {
                SetQuantifier::None
            };
            let right = self.parse_query_term()?;
            expr = SetExpression::SetOperation {
                left: Box::new(expr),
                op,
                set_quantifier,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn peek_set_operator(&self) -> Option<SetOperator> {
        match self.peek_token() {
            Token::Word(w) if w.is_keyword(Keyword::UNION) => Some(SetOperator::Union),
            Token::Word(w) if w.is_keyword(Keyword::EXCEPT) => Some(SetOperator::Except),
            Token::Word(w) if w.is_keyword(Keyword::INTERSECT) => Some(SetOperator::Intersect),
            _ => None,
        }
    }

    fn parse_query_term(&mut self) -> ParseResult<SetExpression> {
        if self.peek_token() == Token::LParen {
            self.next_token();
            let query = self.parse_query()?;
            self.expect_token(&Token::RParen)?;
            return Ok(SetExpression::Query(Box::new(query)));
        }
        if self.peek_keyword(Keyword::VALUES) {
            return Ok(SetExpression::Values(self.parse_values()?));
        }
        if self.peek_keyword(Keyword::SELECT) {
            return Ok(SetExpression::Select(Box::new(self.parse_select()?)));
        }
        if self.dialect().supports_create_table_select() && self.peek_keyword(Keyword::TABLE) {
            self.next_token();
            let name = self.parse_object_name()?;
            return Ok(SetExpression::Table(TableFactor::Table { name, alias: None, args: None }));
        }
        Err(self.expected("SELECT, VALUES, or a parenthesized query", self.peek_token()))
    }

    fn parse_values(&mut self) -> ParseResult<Values> {
        self.next_token();
        let explicit_row = false;
        let rows = self.parse_comma_separated(|p| {
            let explicit = p.consume_keyword(Keyword::ROW);
            p.expect_token(&Token::LParen)?;
            let row = if p.peek_token() == Token::RParen {
                Vec::new()
            } else {
                p.parse_comma_separated(Self::parse_expr)?
            };
            p.expect_token(&Token::RParen)?;
            let _ = explicit;
            Ok(row)
        })?;
        Ok(Values { explicit_row, rows })
    }
}
