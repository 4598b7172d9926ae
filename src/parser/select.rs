//! `SELECT` clause parsing (§3.3 "Select").

use crate::ast::*;
use crate::error::ParseResult;
use crate::keywords::Keyword;
use crate::tokenizer::token::Token;

use super::Parser;

impl<'a> Parser<'a> {
    pub fn parse_select(&mut self) -> ParseResult<Select> {
        self.expect_keyword(Keyword::SELECT)?;

        let distinct = if self.consume_keyword(Keyword::DISTINCT) {
            if self.consume_keyword(Keyword::ON) {
                self.expect_token(&Token::LParen)?;
                let exprs = self.parse_comma_separated(Self::parse_expr)?;
                self.expect_token(&Token::RParen)?;
                Some(Distinct::On(exprs))
            } else {
                Some(Distinct::Distinct)
            }
        } else {
            self.consume_keyword(Keyword::ALL);
            None
        };

        let top = if self.dialect().supports_top_clause() && self.consume_keyword(Keyword::TOP) {
            Some(self.parse_top()?)
        } else {
            None
        };

        let value_table_mode = if self.dialect().supports_select_value_mode() && self.consume_keyword(Keyword::AS) {
            if self.consume_keyword(Keyword::VALUE) {
                Some(ValueTableMode::Value)
            } else {
                self.expect_keyword(Keyword::STRUCT)?;
                Some(ValueTableMode::Struct)
            }
        } else {
            None
        };

        let projection = self.parse_comma_separated(Self::parse_select_item)?;

        let from = if self.consume_keyword(Keyword::FROM) {
            self.parse_comma_separated(Self::parse_table_with_joins)?
        } else {
            Vec::new()
        };

        let selection = if self.consume_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let group_by = self.parse_group_by_clause()?;

        let having = if self.consume_keyword(Keyword::HAVING) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let qualify = if self.dialect().supports_qualify() && self.consume_keyword(Keyword::QUALIFY) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let named_window = if self.consume_keyword(Keyword::WINDOW) {
            self.parse_comma_separated(|p| {
                let name = p.parse_identifier()?;
                p.expect_keyword(Keyword::AS)?;
                p.expect_token(&Token::LParen)?;
                let spec = p.parse_window_spec()?;
                p.expect_token(&Token::RParen)?;
                Ok((name, spec))
            })?
        } else {
            Vec::new()
        };

        Ok(Select {
            distinct,
            top,
            projection,
            value_table_mode,
            from,
            selection,
            group_by,
            having,
            qualify,
            named_window,
        })
    }

    fn parse_top(&mut self) -> ParseResult<Top> {
        let parenthesized = self.consume_token(&Token::LParen);
        let quantity = Some(self.parse_expr()?);
        if parenthesized {
            self.expect_token(&Token::RParen)?;
        }
        let percent = self.consume_keyword(Keyword::PERCENT);
        let with_ties = self.consume_keywords(&[Keyword::WITH, Keyword::TIES]);
        Ok(Top { quantity, percent, with_ties })
    }

    fn parse_group_by_clause(&mut self) -> ParseResult<GroupByClause> {
        if !self.consume_keywords(&[Keyword::GROUP, Keyword::BY]) {
            return Ok(GroupByClause::None);
        }
        if self.dialect().supports_group_by_all() && self.consume_keyword(Keyword::ALL) {
            return Ok(GroupByClause::Expressions { kind: GroupByKind::All, exprs: Vec::new() });
        }
        if self.consume_keyword(Keyword::CUBE) {
            self.expect_token(&Token::LParen)?;
            let exprs = self.parse_comma_separated(Self::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            return Ok(GroupByClause::Expressions { kind: GroupByKind::Cube, exprs });
        }
        if self.consume_keyword(Keyword::ROLLUP) {
            self.expect_token(&Token::LParen)?;
            let exprs = self.parse_comma_separated(Self::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            return Ok(GroupByClause::Expressions { kind: GroupByKind::Rollup, exprs });
        }
        if self.consume_keywords(&[Keyword::GROUPING, Keyword::SETS]) {
            self.expect_token(&Token::LParen)?;
            let exprs = self.parse_comma_separated(Self::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            return Ok(GroupByClause::Expressions { kind: GroupByKind::GroupingSets, exprs });
        }
        let exprs = self.parse_comma_separated(Self::parse_expr)?;
        Ok(GroupByClause::Expressions { kind: GroupByKind::Plain, exprs })
    }

    fn parse_select_item(&mut self) -> ParseResult<SelectItem> {
        if self.peek_token() == Token::Mul {
            self.next_token();
            let opts = self.parse_wildcard_additional_options()?;
            return Ok(SelectItem::Wildcard(opts));
        }
        if matches!(self.peek_token(), Token::Word(_)) && self.peek_nth_token(1) == Token::Period && self.peek_nth_token(2) == Token::Mul {
            let name = self.parse_object_name()?;
            self.next_token();
            let opts = self.parse_wildcard_additional_options()?;
            return Ok(SelectItem::QualifiedWildcard(name, opts));
        }
        let expr = self.parse_expr()?;
        if self.consume_keyword(Keyword::AS) {
            let alias = self.parse_identifier()?;
            return Ok(SelectItem::ExprWithAlias { expr, alias });
        }
        if let Token::Word(w) = self.peek_token() {
            if w.keyword == Keyword::NoKeyword {
                let alias = self.parse_identifier()?;
                return Ok(SelectItem::ExprWithAlias { expr, alias });
            }
        }
        Ok(SelectItem::UnnamedExpr(expr))
    }

    pub(crate) fn parse_table_with_joins(&mut self) -> ParseResult<TableWithJoins> {
        let relation = self.parse_table_factor()?;
        let mut joins = Vec::new();
        loop {
            if self.consume_keyword(Keyword::CROSS) {
                let join_operator = if self.consume_keyword(Keyword::JOIN) {
                    JoinOperator::CrossJoin
                } else {
                    self.expect_keyword(Keyword::APPLY)?;
                    JoinOperator::CrossApply
                };
                let relation = self.parse_table_factor()?;
                joins.push(Join { relation, join_operator });
                continue;
            }

            if self.consume_keyword(Keyword::OUTER) {
                self.expect_keyword(Keyword::APPLY)?;
                let relation = self.parse_table_factor()?;
                joins.push(Join { relation, join_operator: JoinOperator::OuterApply });
                continue;
            }

            if self.consume_keyword(Keyword::ASOF) {
                self.expect_keyword(Keyword::JOIN)?;
                let relation = self.parse_table_factor()?;
                self.expect_keyword(Keyword::MATCH_CONDITION)?;
                self.expect_token(&Token::LParen)?;
                let match_condition = self.parse_expr()?;
                self.expect_token(&Token::RParen)?;
                let constraint = self.parse_join_constraint(false)?;
                joins.push(Join { relation, join_operator: JoinOperator::AsOf { constraint, match_condition } });
                continue;
            }

            let natural = self.consume_keyword(Keyword::NATURAL);

            enum Side {
                Inner,
                Left,
                Right,
                Full,
            }

            let side = if self.consume_keyword(Keyword::INNER) {
                Some(Side::Inner)
            } else if self.consume_keyword(Keyword::LEFT) {
                Some(Side::Left)
            } else if self.consume_keyword(Keyword::RIGHT) {
                Some(Side::Right)
            } else if self.consume_keyword(Keyword::FULL) {
                Some(Side::Full)
            } else if self.peek_keyword(Keyword::JOIN) {
                Some(Side::Inner)
            } else {
                None
            };

            let Some(side) = side else {
                if natural {
                    return Err(self.expected("a join type after NATURAL", self.peek_token()));
                }
                break;
            };

            let (semi, anti) = match side {
                Side::Left | Side::Right => {
                    let semi = self.consume_keyword(Keyword::SEMI);
                    let anti = !semi && self.consume_keyword(Keyword::ANTI);
                    self.consume_keyword(Keyword::OUTER);
                    (semi, anti)
                }
                Side::Full => {
                    self.consume_keyword(Keyword::OUTER);
                    (false, false)
                }
                Side::Inner => (false, false),
            };

            self.expect_keyword(Keyword::JOIN)?;
            let relation = self.parse_table_factor()?;
            let constraint = self.parse_join_constraint(natural)?;
            let join_operator = match side {
                Side::Inner => JoinOperator::Inner(constraint),
                Side::Left if semi => JoinOperator::LeftSemi(constraint),
                Side::Left if anti => JoinOperator::LeftAnti(constraint),
                Side::Left => JoinOperator::LeftOuter(constraint),
                Side::Right if semi => JoinOperator::RightSemi(constraint),
                Side::Right if anti => JoinOperator::RightAnti(constraint),
                Side::Right => JoinOperator::RightOuter(constraint),
                Side::Full => JoinOperator::FullOuter(constraint),
            };
            joins.push(Join { relation, join_operator });
        }
        Ok(TableWithJoins { relation, joins })
    }

    fn parse_join_constraint(&mut self, natural: bool) -> ParseResult<JoinConstraint> {
        if natural {
            return Ok(JoinConstraint::Natural);
        }
        if self.consume_keyword(Keyword::ON) {
            Ok(JoinConstraint::On(self.parse_expr()?))
        } else if self.consume_keyword(Keyword::USING) {
            Ok(JoinConstraint::Using(self.parse_parenthesized_idents()?))
        } else {
            Ok(JoinConstraint::None)
        }
    }

    pub(crate) fn parse_table_factor(&mut self) -> ParseResult<TableFactor> {
        if self.consume_keyword(Keyword::LATERAL) {
            self.expect_token(&Token::LParen)?;
            let subquery = self.parse_query()?;
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableFactor::Derived { lateral: true, subquery: Box::new(subquery), alias });
        }
        if self.consume_keyword(Keyword::UNNEST) {
            self.expect_token(&Token::LParen)?;
            let array_exprs = self.parse_comma_separated(Self::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            let with_offset = self.consume_keywords(&[Keyword::WITH, Keyword::OFFSET]);
            let with_offset_alias = if with_offset && self.consume_keyword(Keyword::AS) {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            return Ok(TableFactor::Unnest { alias, array_exprs, with_offset, with_offset_alias });
        }
        if self.peek_token() == Token::LParen {
            self.next_token();
            if self.peek_keyword(Keyword::SELECT) || self.peek_keyword(Keyword::WITH) || self.peek_keyword(Keyword::VALUES) {
                let subquery = self.parse_query()?;
                self.expect_token(&Token::RParen)?;
                let alias = self.parse_optional_table_alias()?;
                return Ok(TableFactor::Derived { lateral: false, subquery: Box::new(subquery), alias });
            }
            let table_with_joins = self.parse_table_with_joins()?;
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableFactor::NestedJoin { table_with_joins: Box::new(table_with_joins), alias });
        }
        let name = self.parse_object_name()?;
        let args = if self.peek_token() == Token::LParen {
            self.next_token();
            let args = if self.peek_token() != Token::RParen {
                self.parse_comma_separated(Self::parse_function_arg)?
            } else {
                Vec::new()
            };
            self.expect_token(&Token::RParen)?;
            Some(args)
        } else {
            None
        };
        let alias = self.parse_optional_table_alias()?;
        let table = TableFactor::Table { name, alias, args };
        self.maybe_parse_pivot_unpivot(table)
    }

    fn maybe_parse_pivot_unpivot(&mut self, table: TableFactor) -> ParseResult<TableFactor> {
        if !self.dialect().supports_pivot_unpivot() {
            return Ok(table);
        }
        if self.consume_keyword(Keyword::PIVOT) {
            self.expect_token(&Token::LParen)?;
            let aggregate_functions = self.parse_comma_separated(|p| {
                let expr = p.parse_expr()?;
                match expr {
                    Expression::Function(f) => Ok(f),
                    _ => Err(p.expected("an aggregate function call", p.peek_token())),
                }
            })?;
            self.expect_keyword(Keyword::FOR)?;
            let value_column = self.parse_parenthesized_idents_or_single()?;
            self.expect_keyword(Keyword::IN)?;
            self.expect_token(&Token::LParen)?;
            let value_source = self.parse_comma_separated(Self::parse_expr)?;
            self.expect_token(&Token::RParen)?;
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableFactor::Pivot {
                table: Box::new(table),
                aggregate_functions,
                value_column,
                value_source,
                alias,
            });
        }
        if self.consume_keyword(Keyword::UNPIVOT) {
            self.expect_token(&Token::LParen)?;
            let value = self.parse_identifier()?;
            self.expect_keyword(Keyword::FOR)?;
            let name = self.parse_identifier()?;
            self.expect_keyword(Keyword::IN)?;
            let columns = self.parse_parenthesized_idents()?;
            self.expect_token(&Token::RParen)?;
            let alias = self.parse_optional_table_alias()?;
            return Ok(TableFactor::Unpivot { table: Box::new(table), value, name, columns, alias });
        }
        Ok(table)
    }

    pub(crate) fn parse_optional_table_alias(&mut self) -> ParseResult<Option<TableAlias>> {
        let as_seen = self.consume_keyword(Keyword::AS);
        let name = match self.peek_token() {
            Token::Word(w) if w.keyword == Keyword::NoKeyword || w.quote_style.is_some() => {
                self.parse_identifier()?
            }
            _ if as_seen => return Err(self.expected("an alias", self.peek_token())),
            _ => return Ok(None),
        };
        let columns = if self.peek_token() == Token::LParen {
            self.parse_parenthesized_idents()?
        } else {
            Vec::new()
        };
        Ok(Some(TableAlias { name, columns }))
    }
}
