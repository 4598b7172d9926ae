//! `INSERT`/`UPDATE`/`DELETE`, `MERGE`, transaction control, and session statements (§3.4).

use crate::ast::*;
use crate::error::ParseResult;
use crate::keywords::Keyword;
use crate::tokenizer::token::Token;

use super::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_insert(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let overwrite = self.consume_keyword(Keyword::OVERWRITE);
        self.expect_keyword(Keyword::INTO)?;
        let table_name = self.parse_object_name()?;
        let columns = if self.peek_token() == Token::LParen {
            self.parse_parenthesized_idents()?
        } else {
            Vec::new()
        };

        let source = if self.dialect().supports_insert_set() && self.consume_keyword(Keyword::SET) {
            let assignments = self.parse_comma_separated(Self::parse_assignment)?;
            let values = assignments.iter().map(|a| a.value.clone()).collect();
            Some(Box::new(Query {
                with: None,
                body: Box::new(SetExpression::Values(Values { explicit_row: false, rows: vec![values] })),
                order_by: Vec::new(),
                limit: None,
                offset: None,
                fetch: None,
                locks: Vec::new(),
            }))
        } else if self.consume_keywords(&[Keyword::DEFAULT, Keyword::VALUES]) {
            None
        } else {
            Some(Box::new(self.parse_query()?))
        };

        let on_conflict = if self.consume_keywords(&[Keyword::ON, Keyword::CONFLICT]) {
            let conflict_target = if self.peek_token() == Token::LParen {
                self.parse_parenthesized_idents()?
            } else {
                Vec::new()
            };
            self.expect_keyword(Keyword::DO)?;
            let action = if self.consume_keyword(Keyword::NOTHING) {
                OnConflictAction::DoNothing
            } else {
                self.expect_keyword(Keyword::UPDATE)?;
                self.expect_keyword(Keyword::SET)?;
                OnConflictAction::DoUpdate(self.parse_comma_separated(Self::parse_assignment)?)
            };
            Some(OnConflict { conflict_target, action })
        } else {
            None
        };

        Ok(Statement::Insert { table_name, columns, source, on_conflict, overwrite })
    }

    fn parse_assignment(&mut self) -> ParseResult<Assignment> {
        let id = if self.peek_token() == Token::LParen {
            self.parse_parenthesized_idents()?
        } else {
            vec![self.parse_identifier()?]
        };
        self.expect_token(&Token::Eq)?;
        let value = self.parse_expr()?;
        Ok(Assignment { id, value })
    }

    pub(crate) fn parse_update(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let table = self.parse_object_name()?;
        let alias = self.parse_optional_table_alias()?;
        self.expect_keyword(Keyword::SET)?;
        let assignments = self.parse_comma_separated(Self::parse_assignment)?;
        let from = if self.consume_keyword(Keyword::FROM) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let selection = if self.consume_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Statement::Update { table, alias, assignments, from, selection })
    }

    pub(crate) fn parse_delete(&mut self) -> ParseResult<Statement> {
        self.next_token();
        self.expect_keyword(Keyword::FROM)?;
        let table_name = self.parse_object_name()?;
        let using = if self.consume_keyword(Keyword::USING) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let selection = if self.consume_keyword(Keyword::WHERE) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Statement::Delete { table_name, using, selection })
    }

    pub(crate) fn parse_set(&mut self) -> ParseResult<Statement> {
        self.next_token();
        if self.dialect().supports_set_names() && self.consume_keyword(Keyword::NAMES) {
            let charset_name = self.parse_identifier()?;
            let collation_name = if self.consume_keyword(Keyword::COLLATE) {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            return Ok(Statement::SetNames { charset_name, collation_name });
        }

        let local = self.parse_one_of_keywords(&[Keyword::SESSION, Keyword::LOCAL, Keyword::GLOBAL])
            == Some(Keyword::LOCAL);

        let first = self.parse_identifier()?;
        let mut variables = vec![first];
        if self.dialect().supports_comma_separated_set_assignments() {
            while self.consume_token(&Token::Comma) {
                variables.push(self.parse_identifier()?);
            }
        }
        if !self.consume_token(&Token::Eq) {
            self.expect_keyword(Keyword::TO)?;
        }
        let mut value = vec![self.parse_expr()?];
        while self.consume_token(&Token::Comma) {
            value.push(self.parse_expr()?);
        }
        Ok(Statement::SetVariable { local, variables, value })
    }

    pub(crate) fn parse_explain(&mut self) -> ParseResult<Statement> {
        let describe_table = self.peek_keyword(Keyword::DESCRIBE);
        self.next_token();
        if describe_table && !self.peek_keyword(Keyword::SELECT) && !self.peek_keyword(Keyword::WITH) {
            let checkpoint = self.checkpoint();
            if let Ok(table_name) = self.parse_object_name() {
                if matches!(self.peek_token(), Token::SemiColon | Token::Eof) {
                    return Ok(Statement::ExplainTable { table_name });
                }
            }
            self.restore(checkpoint);
        }
        let analyze = self.consume_keyword(Keyword::ANALYZE);
        let verbose = self.consume_keyword(Keyword::VERBOSE);
        let statement = Box::new(self.parse_statement()?);
        Ok(Statement::Explain { analyze, verbose, statement })
    }

    pub(crate) fn parse_commit(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let chain = self.consume_keywords(&[Keyword::AND, Keyword::CHAIN]);
        Ok(Statement::Commit { chain })
    }

    pub(crate) fn parse_rollback(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let chain = self.consume_keywords(&[Keyword::AND, Keyword::CHAIN]);
        Ok(Statement::Rollback { chain })
    }

    pub(crate) fn parse_merge(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let into = self.consume_keyword(Keyword::INTO);
        let table = self.parse_object_name()?;
        self.expect_keyword(Keyword::USING)?;
        let source = Box::new(self.parse_table_factor()?);
        self.expect_keyword(Keyword::ON)?;
        let on = Box::new(self.parse_expr()?);
        let mut clauses = Vec::new();
        while self.consume_keyword(Keyword::WHEN) {
            let not_matched = self.consume_keyword(Keyword::NOT);
            self.expect_keyword(Keyword::MATCHED)?;
            let predicate = if self.consume_keyword(Keyword::AND) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            self.expect_keyword(Keyword::THEN)?;
            let kind = if not_matched {
                self.expect_keyword(Keyword::INSERT)?;
                let columns = if self.peek_token() == Token::LParen {
                    self.parse_parenthesized_idents()?
                } else {
                    Vec::new()
                };
                self.expect_keyword(Keyword::VALUES)?;
                self.expect_token(&Token::LParen)?;
                let values = self.parse_comma_separated(Self::parse_expr)?;
                self.expect_token(&Token::RParen)?;
                MergeClauseKind::NotMatchedInsert { columns, values }
            } else if self.consume_keyword(Keyword::DELETE) {
                MergeClauseKind::MatchedDelete
            } else {
                self.expect_keyword(Keyword::UPDATE)?;
                self.expect_keyword(Keyword::SET)?;
                MergeClauseKind::MatchedUpdate(self.parse_comma_separated(Self::parse_assignment)?)
            };
            clauses.push(MergeClause { predicate, kind });
        }
        Ok(Statement::Merge { into, table, source, on, clauses })
    }

    pub(crate) fn parse_pragma(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let name = self.parse_object_name()?;
        if self.consume_token(&Token::Eq) {
            let value = Some(self.parse_expr()?);
            return Ok(Statement::Pragma { name, value, is_eq: true });
        }
        if self.peek_token() == Token::LParen {
            self.next_token();
            let value = Some(self.parse_expr()?);
            self.expect_token(&Token::RParen)?;
            return Ok(Statement::Pragma { name, value, is_eq: false });
        }
        Ok(Statement::Pragma { name, value: None, is_eq: false })
    }

    pub(crate) fn parse_flush(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let object_type = match self.peek_token() {
            Token::Word(w) if w.keyword == Keyword::NoKeyword => Some(self.parse_identifier()?),
            _ => None,
        };
        let tables = if self.consume_keyword(Keyword::TABLES) {
            self.parse_comma_separated(Self::parse_object_name)?
        } else {
            Vec::new()
        };
        Ok(Statement::Flush { object_type, tables })
    }

    pub(crate) fn parse_kill(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let modifier = match self.peek_token() {
            Token::Word(w) if w.keyword == Keyword::NoKeyword => Some(self.parse_identifier()?),
            _ => None,
        };
        let id = self.parse_u64_literal()?;
        Ok(Statement::Kill { modifier, id })
    }

    pub(crate) fn parse_if_statement(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let condition = Box::new(self.parse_expr()?);
        self.expect_keyword(Keyword::THEN)?;
        let mut then_statements = Vec::new();
        while !self.peek_keyword(Keyword::ELSE) && !self.peek_keyword(Keyword::END) {
            then_statements.push(self.parse_statement()?);
            self.consume_token(&Token::SemiColon);
        }
        let else_statements = if self.consume_keyword(Keyword::ELSE) {
            let mut stmts = Vec::new();
            while !self.peek_keyword(Keyword::END) {
                stmts.push(self.parse_statement()?);
                self.consume_token(&Token::SemiColon);
            }
            stmts
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::END)?;
        self.expect_keyword(Keyword::IF)?;
        Ok(Statement::If { condition, then_statements, else_statements })
    }
}
