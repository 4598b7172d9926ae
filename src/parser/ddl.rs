//! `CREATE`/`ALTER`/`DROP` and other schema/session statements (§3.4).

use crate::ast::*;
use crate::error::ParseResult;
use crate::keywords::Keyword;
use crate::tokenizer::token::Token;

use super::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_create(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let or_replace = self.consume_keywords(&[Keyword::OR, Keyword::REPLACE]);

        if self.consume_keyword(Keyword::ROLE) {
            return self.parse_create_role(or_replace);
        }
        if self.consume_keywords(&[Keyword::MATERIALIZED, Keyword::VIEW]) {
            return self.parse_create_view(or_replace, true);
        }
        if self.consume_keyword(Keyword::VIEW) {
            return self.parse_create_view(or_replace, false);
        }
        if self.consume_keyword(Keyword::FUNCTION) {
            return self.parse_create_function(or_replace);
        }
        if self.consume_keyword(Keyword::MACRO) {
            return self.parse_create_macro(or_replace);
        }
        if self.consume_keyword(Keyword::PROCEDURE) {
            return self.parse_create_procedure(or_replace);
        }

        let unique = self.consume_keyword(Keyword::UNIQUE);
        if self.consume_keyword(Keyword::INDEX) {
            return self.parse_create_index(unique);
        }

        let temporary = self.parse_one_of_keywords(&[Keyword::TEMPORARY, Keyword::TEMP]).is_some();

        if self.consume_keyword(Keyword::STAGE) {
            return self.parse_create_stage(or_replace, temporary);
        }
        if self.consume_keyword(Keyword::SECRET) {
            return self.parse_create_secret(or_replace, temporary);
        }
        if self.consume_keywords(&[Keyword::VIRTUAL, Keyword::TABLE]) {
            return self.parse_create_virtual_table();
        }
        self.expect_keyword(Keyword::TABLE)?;
        self.parse_create_table(or_replace, temporary)
    }

    fn parse_create_role(&mut self, _or_replace: bool) -> ParseResult<Statement> {
        let if_not_exists = self.consume_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let names = self.parse_comma_separated(Self::parse_object_name)?;
        Ok(Statement::CreateRole { names, if_not_exists })
    }

    fn parse_create_view(&mut self, or_replace: bool, materialized: bool) -> ParseResult<Statement> {
        let name = self.parse_object_name()?;
        let columns = if self.peek_token() == Token::LParen {
            self.parse_parenthesized_idents()?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::AS)?;
        let query = Box::new(self.parse_query()?);
        Ok(Statement::CreateView { or_replace, materialized, name, columns, query })
    }

    fn parse_create_function(&mut self, or_replace: bool) -> ParseResult<Statement> {
        let name = self.parse_object_name()?;
        self.expect_token(&Token::LParen)?;
        let args = if self.peek_token() != Token::RParen {
            self.parse_comma_separated(|p| {
                let name = p.parse_identifier()?;
                let data_type = p.parse_data_type()?;
                Ok((name, data_type))
            })?
        } else {
            Vec::new()
        };
        self.expect_token(&Token::RParen)?;
        let return_type = if self.consume_keyword(Keyword::RETURNS) {
            Some(self.parse_data_type()?)
        } else {
            None
        };
        let language = if self.consume_keyword(Keyword::LANGUAGE) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::AS)?;
        let body = Box::new(self.parse_expr()?);
        Ok(Statement::CreateFunction { or_replace, name, args, return_type, language, body })
    }

    fn parse_create_macro(&mut self, or_replace: bool) -> ParseResult<Statement> {
        let name = self.parse_object_name()?;
        self.expect_token(&Token::LParen)?;
        let args = if self.peek_token() != Token::RParen {
            self.parse_comma_separated(Self::parse_identifier)?
        } else {
            Vec::new()
        };
        self.expect_token(&Token::RParen)?;
        self.expect_keyword(Keyword::AS)?;
        let definition = Box::new(self.parse_expr()?);
        Ok(Statement::CreateMacro { or_replace, name, args, definition })
    }

    fn parse_create_procedure(&mut self, or_replace: bool) -> ParseResult<Statement> {
        let name = self.parse_object_name()?;
        self.expect_token(&Token::LParen)?;
        let params = if self.peek_token() != Token::RParen {
            self.parse_comma_separated(|p| {
                let name = p.parse_identifier()?;
                let data_type = p.parse_data_type()?;
                Ok((name, data_type))
            })?
        } else {
            Vec::new()
        };
        self.expect_token(&Token::RParen)?;
        self.expect_keyword(Keyword::AS)?;
        self.expect_keyword(Keyword::BEGIN)?;
        let mut body = Vec::new();
        while !self.peek_keyword(Keyword::END) {
            body.push(self.parse_statement()?);
            self.consume_token(&Token::SemiColon);
        }
        self.expect_keyword(Keyword::END)?;
        Ok(Statement::CreateProcedure { or_replace, name, params, body })
    }

    fn parse_create_index(&mut self, unique: bool) -> ParseResult<Statement> {
        let if_not_exists = self.consume_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = if self.peek_keyword(Keyword::ON) {
            None
        } else {
            Some(self.parse_object_name()?)
        };
        self.expect_keyword(Keyword::ON)?;
        let table_name = self.parse_object_name()?;
        let columns = self.parse_parenthesized_idents()?;
        Ok(Statement::CreateIndex { name, table_name, columns, unique, if_not_exists })
    }

    fn parse_create_stage(&mut self, or_replace: bool, temporary: bool) -> ParseResult<Statement> {
        let if_not_exists = self.consume_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_object_name()?;
        let url = if self.consume_keyword(Keyword::URL) {
            self.consume_token(&Token::Eq);
            match self.parse_value()? {
                Value::SingleQuotedString(s) => Some(s.to_string()),
                other => return Err(self.expected("a URL string", Token::Placeholder(other.to_string().into()))),
            }
        } else {
            None
        };
        let file_format = self.parse_file_format_clause()?;
        Ok(Statement::CreateStage { or_replace, temporary, if_not_exists, name, url, file_format })
    }

    fn parse_create_secret(&mut self, or_replace: bool, temporary: bool) -> ParseResult<Statement> {
        let if_not_exists = self.consume_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = match self.peek_token() {
            Token::Word(w) if w.keyword == Keyword::NoKeyword => Some(self.parse_identifier()?),
            _ => None,
        };
        self.expect_token(&Token::LParen)?;
        self.expect_keyword(Keyword::TYPE)?;
        let secret_type = self.parse_identifier()?;
        let mut options = Vec::new();
        while self.consume_token(&Token::Comma) {
            let key = self.parse_identifier()?;
            let value = self.parse_expr()?;
            options.push((key, value));
        }
        self.expect_token(&Token::RParen)?;
        Ok(Statement::CreateSecret { or_replace, temporary, if_not_exists, name, secret_type, options })
    }

    fn parse_create_virtual_table(&mut self) -> ParseResult<Statement> {
        let if_not_exists = self.consume_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_object_name()?;
        self.expect_keyword(Keyword::USING)?;
        let module_name = self.parse_identifier()?;
        let module_args = if self.peek_token() == Token::LParen {
            self.parse_parenthesized_idents()?
        } else {
            Vec::new()
        };
        Ok(Statement::CreateVirtualTable { name, if_not_exists, module_name, module_args })
    }

    fn parse_create_table(&mut self, or_replace: bool, temporary: bool) -> ParseResult<Statement> {
        let if_not_exists = self.consume_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_object_name()?;

        if self.consume_keyword(Keyword::LIKE) {
            let like = Some(self.parse_object_name()?);
            return Ok(Statement::CreateTable {
                or_replace,
                temporary,
                if_not_exists,
                name,
                columns: Vec::new(),
                constraints: Vec::new(),
                like,
                query: None,
                engine: None,
            });
        }

        let mut columns = Vec::new();
        let mut constraints = Vec::new();
        if self.peek_token() == Token::LParen {
            self.next_token();
            loop {
                if self.looks_like_table_constraint() {
                    constraints.push(self.parse_table_constraint()?);
                } else {
                    columns.push(self.parse_column_def()?);
                }
                if !self.consume_token(&Token::Comma) {
                    break;
                }
            }
            self.expect_token(&Token::RParen)?;
        }

        let query = if self.dialect().supports_create_table_select() && self.consume_keyword(Keyword::AS) {
            Some(Box::new(self.parse_query()?))
        } else {
            None
        };

        let engine = if self.consume_keyword(Keyword::ENGINE) {
            self.expect_token(&Token::Eq)?;
            match self.next_token() {
                Token::Word(w) => Some(w.value.to_string()),
                other => return Err(self.expected("an engine name", other)),
            }
        } else {
            None
        };

        Ok(Statement::CreateTable {
            or_replace,
            temporary,
            if_not_exists,
            name,
            columns,
            constraints,
            like: None,
            query,
            engine,
        })
    }

    fn looks_like_table_constraint(&self) -> bool {
        matches!(
            self.peek_token(),
            Token::Word(w) if matches!(w.keyword, Keyword::CONSTRAINT | Keyword::UNIQUE | Keyword::PRIMARY | Keyword::FOREIGN | Keyword::CHECK)
        )
    }

    fn parse_table_constraint(&mut self) -> ParseResult<TableConstraint> {
        let name = if self.consume_keyword(Keyword::CONSTRAINT) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        if self.consume_keyword(Keyword::CHECK) {
            self.expect_token(&Token::LParen)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RParen)?;
            return Ok(TableConstraint::Check { name, expr });
        }
        if self.consume_keyword(Keyword::FOREIGN) {
            self.expect_keyword(Keyword::KEY)?;
            let columns = self.parse_parenthesized_idents()?;
            self.expect_keyword(Keyword::REFERENCES)?;
            let foreign_table = self.parse_object_name()?;
            let referred_columns = self.parse_parenthesized_idents()?;
            return Ok(TableConstraint::ForeignKey { name, columns, foreign_table, referred_columns });
        }
        let is_primary = self.consume_keyword(Keyword::PRIMARY);
        if is_primary {
            self.expect_keyword(Keyword::KEY)?;
        } else {
            self.expect_keyword(Keyword::UNIQUE)?;
        }
        let columns = self.parse_parenthesized_idents()?;
        Ok(TableConstraint::Unique { name, columns, is_primary })
    }

    fn parse_column_def(&mut self) -> ParseResult<ColumnDef> {
        let name = self.parse_identifier()?;
        let data_type = self.parse_data_type()?;
        let collation = if self.consume_keyword(Keyword::COLLATE) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let mut options = Vec::new();
        loop {
            if self.consume_keyword(Keyword::NOT) {
                self.expect_keyword(Keyword::NULL)?;
                options.push(ColumnOption::NotNull);
            } else if self.consume_keyword(Keyword::NULL) {
                options.push(ColumnOption::Null);
            } else if self.consume_keyword(Keyword::DEFAULT) {
                options.push(ColumnOption::Default(self.parse_expr()?));
            } else if self.consume_keywords(&[Keyword::PRIMARY, Keyword::KEY]) {
                options.push(ColumnOption::Unique { is_primary: true });
            } else if self.consume_keyword(Keyword::UNIQUE) {
                options.push(ColumnOption::Unique { is_primary: false });
            } else if self.consume_keyword(Keyword::REFERENCES) {
                let foreign_table = self.parse_object_name()?;
                let referred_columns = if self.peek_token() == Token::LParen {
                    self.parse_parenthesized_idents()?
                } else {
                    Vec::new()
                };
                options.push(ColumnOption::ForeignKey { foreign_table, referred_columns });
            } else if self.consume_keyword(Keyword::CHECK) {
                self.expect_token(&Token::LParen)?;
                let expr = self.parse_expr()?;
                self.expect_token(&Token::RParen)?;
                options.push(ColumnOption::Check(expr));
            } else if self.consume_keyword(Keyword::COMMENT) {
                match self.parse_value()? {
                    Value::SingleQuotedString(s) => options.push(ColumnOption::Comment(s.to_string())),
                    other => return Err(self.expected("a string literal", Token::Placeholder(other.to_string().into()))),
                }
            } else if self.consume_keyword(Keyword::AUTO_INCREMENT) || self.consume_keyword(Keyword::AUTOINCREMENT) {
                options.push(ColumnOption::AutoIncrement);
            } else if self.consume_keywords(&[Keyword::GENERATED, Keyword::ALWAYS, Keyword::AS]) {
                self.expect_token(&Token::LParen)?;
                let expr = self.parse_expr()?;
                self.expect_token(&Token::RParen)?;
                let stored = self.consume_keyword(Keyword::STORED);
                options.push(ColumnOption::Generated { expr, stored });
            } else {
                break;
            }
        }
        Ok(ColumnDef { name, data_type, collation, options })
    }

    fn parse_file_format_clause(&mut self) -> ParseResult<Vec<(Ident, Expression)>> {
        if !self.consume_keyword(Keyword::FILE_FORMAT) {
            return Ok(Vec::new());
        }
        self.expect_token(&Token::Eq)?;
        self.expect_token(&Token::LParen)?;
        let entries = self.parse_comma_separated(|p| {
            let key = p.parse_identifier()?;
            p.expect_token(&Token::Eq)?;
            let value = p.parse_expr()?;
            Ok((key, value))
        })?;
        self.expect_token(&Token::RParen)?;
        Ok(entries)
    }

    pub(crate) fn parse_alter(&mut self) -> ParseResult<Statement> {
        self.next_token();
        if self.consume_keyword(Keyword::ROLE) {
            let name = self.parse_identifier()?;
            let mut operation = String::new();
            while !matches!(self.peek_token(), Token::SemiColon | Token::Eof) {
                if let Token::Word(w) = self.peek_token() {
                    if !operation.is_empty() {
                        operation.push(' ');
                    }
                    operation.push_str(&w.value);
                    self.next_token();
                } else {
                    break;
                }
            }
            return Ok(Statement::AlterRole { name, operation });
        }
        self.expect_keyword(Keyword::TABLE)?;
        let if_exists = self.consume_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let name = self.parse_object_name()?;
        let operations = self.parse_comma_separated(Self::parse_alter_table_operation)?;
        Ok(Statement::AlterTable { name, if_exists, operations })
    }

    fn parse_alter_table_operation(&mut self) -> ParseResult<AlterTableOperation> {
        if self.consume_keyword(Keyword::ADD) {
            if self.looks_like_table_constraint() {
                return Ok(AlterTableOperation::AddConstraint(self.parse_table_constraint()?));
            }
            self.consume_keyword(Keyword::COLUMN);
            let if_not_exists = self.consume_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
            let column_def = self.parse_column_def()?;
            return Ok(AlterTableOperation::AddColumn { column_def, if_not_exists });
        }
        if self.consume_keyword(Keyword::DROP) {
            if self.consume_keyword(Keyword::CONSTRAINT) {
                let if_exists = self.consume_keywords(&[Keyword::IF, Keyword::EXISTS]);
                let name = self.parse_identifier()?;
                return Ok(AlterTableOperation::DropConstraint { name, if_exists });
            }
            self.consume_keyword(Keyword::COLUMN);
            let if_exists = self.consume_keywords(&[Keyword::IF, Keyword::EXISTS]);
            let column_name = self.parse_identifier()?;
            let cascade = self.consume_keyword(Keyword::CASCADE);
            return Ok(AlterTableOperation::DropColumn { column_name, if_exists, cascade });
        }
        if self.consume_keyword(Keyword::RENAME) {
            if self.consume_keyword(Keyword::COLUMN) {
                let old_column_name = self.parse_identifier()?;
                self.expect_keyword(Keyword::TO)?;
                let new_column_name = self.parse_identifier()?;
                return Ok(AlterTableOperation::RenameColumn { old_column_name, new_column_name });
            }
            self.consume_keyword(Keyword::TO);
            let table_name = self.parse_object_name()?;
            return Ok(AlterTableOperation::RenameTable { table_name });
        }
        Err(self.expected("ADD, DROP, or RENAME", self.peek_token()))
    }

    pub(crate) fn parse_drop(&mut self) -> ParseResult<Statement> {
        self.next_token();
        if self.consume_keyword(Keyword::SECRET) {
            let if_exists = self.consume_keywords(&[Keyword::IF, Keyword::EXISTS]);
            let temporary = self.parse_one_of_keywords(&[Keyword::TEMPORARY, Keyword::TEMP]).is_some();
            let name = self.parse_identifier()?;
            return Ok(Statement::DropSecret { if_exists, temporary, name });
        }
        let object_type = self.parse_object_type()?;
        let if_exists = self.consume_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let names = self.parse_comma_separated(Self::parse_object_name)?;
        let cascade = self.consume_keyword(Keyword::CASCADE);
        Ok(Statement::Drop { object_type, if_exists, names, cascade })
    }

    fn parse_object_type(&mut self) -> ParseResult<ObjectType> {
        if self.consume_keyword(Keyword::TABLE) {
            Ok(ObjectType::Table)
        } else if self.consume_keyword(Keyword::VIEW) {
            Ok(ObjectType::View)
        } else if self.consume_keyword(Keyword::INDEX) {
            Ok(ObjectType::Index)
        } else if self.consume_keyword(Keyword::SCHEMA) {
            Ok(ObjectType::Schema)
        } else if self.consume_keyword(Keyword::ROLE) {
            Ok(ObjectType::Role)
        } else if self.consume_keyword(Keyword::SEQUENCE) {
            Ok(ObjectType::Sequence)
        } else if self.consume_keyword(Keyword::STAGE) {
            Ok(ObjectType::Stage)
        } else if self.consume_keyword(Keyword::FUNCTION) {
            Ok(ObjectType::Function)
        } else if self.consume_keyword(Keyword::PROCEDURE) {
            Ok(ObjectType::Procedure)
        } else {
            Err(self.expected("an object type", self.peek_token()))
        }
    }

    pub(crate) fn parse_truncate(&mut self) -> ParseResult<Statement> {
        self.next_token();
        self.consume_keyword(Keyword::TABLE);
        let table_name = self.parse_object_name()?;
        let cascade = self.consume_keyword(Keyword::CASCADE);
        Ok(Statement::Truncate { table_name, cascade })
    }

    pub(crate) fn parse_show(&mut self) -> ParseResult<Statement> {
        self.next_token();
        if self.consume_keyword(Keyword::CREATE) {
            let object_type = self.parse_object_type()?;
            let name = self.parse_object_name()?;
            return Ok(Statement::ShowCreate { object_type, name });
        }
        if self.consume_keyword(Keyword::COLUMNS) {
            self.expect_one_of_keywords(&[Keyword::FROM, Keyword::IN])?;
            let table_name = self.parse_object_name()?;
            let filter = self.parse_show_filter()?;
            return Ok(Statement::ShowColumns { table_name, filter });
        }
        let full = self.consume_keyword(Keyword::FULL);
        if self.consume_keyword(Keyword::TABLES) {
            let db_name = if self.parse_one_of_keywords(&[Keyword::FROM, Keyword::IN]).is_some() {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            let filter = self.parse_show_filter()?;
            return Ok(Statement::ShowTables { full, db_name, filter });
        }
        let mut variable = vec![self.parse_identifier()?];
        while let Token::Word(w) = self.peek_token() {
            if w.keyword != Keyword::NoKeyword && !matches!(w.keyword, Keyword::NoKeyword) {
                // allow keyword-shaped variable names like SHOW SESSION VARIABLES
            }
            variable.push(self.parse_identifier()?);
        }
        Ok(Statement::ShowVariable { variable })
    }

    fn parse_show_filter(&mut self) -> ParseResult<Option<String>> {
        if self.consume_keyword(Keyword::LIKE) {
            match self.parse_value()? {
                Value::SingleQuotedString(s) => Ok(Some(s.to_string())),
                other => Err(self.expected("a string literal", Token::Placeholder(other.to_string().into()))),
            }
        } else {
            Ok(None)
        }
    }

    pub(crate) fn parse_use(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let name = self.parse_object_name()?;
        Ok(Statement::Use { name })
    }

    pub(crate) fn parse_declare_statement(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let mut names = vec![self.parse_identifier()?];
        while self.consume_token(&Token::Comma) {
            names.push(self.parse_identifier()?);
        }

        if self.consume_keyword(Keyword::CURSOR) {
            self.expect_keyword(Keyword::FOR)?;
            let for_query = Some(Box::new(self.parse_query()?));
            return Ok(Statement::Declare(vec![Declare {
                kind: DeclareKind::Snowflake,
                names,
                data_type: None,
                assignment: None,
                for_query,
            }]));
        }

        if self.consume_token(&Token::Eq) {
            let assignment = Some(self.parse_expr()?);
            return Ok(Statement::Declare(vec![Declare {
                kind: DeclareKind::MsSql,
                names,
                data_type: None,
                assignment,
                for_query: None,
            }]));
        }

        let data_type = Some(self.parse_data_type()?);
        let assignment = if self.consume_keyword(Keyword::DEFAULT) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let kind = if self.dialect().kind() == crate::dialect::DialectKind::MsSql {
            DeclareKind::MsSql
        } else if self.dialect().kind() == crate::dialect::DialectKind::Snowflake {
            DeclareKind::Snowflake
        } else {
            DeclareKind::BigQuery
        };
        Ok(Statement::Declare(vec![Declare { kind, names, data_type, assignment, for_query: None }]))
    }

    pub(crate) fn parse_comment_on(&mut self) -> ParseResult<Statement> {
        self.next_token();
        self.expect_keyword(Keyword::ON)?;
        let object_type = self.parse_object_type()?;
        let name = self.parse_object_name()?;
        self.expect_keyword(Keyword::IS)?;
        let comment = match self.parse_value()? {
            Value::SingleQuotedString(s) => Some(s.to_string()),
            Value::Null => None,
            other => return Err(self.expected("a string literal or NULL", Token::Placeholder(other.to_string().into()))),
        };
        Ok(Statement::Comment { object_type, name, comment })
    }

    pub(crate) fn parse_attach(&mut self) -> ParseResult<Statement> {
        self.next_token();
        if self.dialect().kind() == crate::dialect::DialectKind::DuckDb {
            let if_not_exists = self.consume_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
            self.expect_keyword(Keyword::DATABASE)?;
            let path = match self.parse_value()? {
                Value::SingleQuotedString(s) => Ident { value: s, quote_style: None },
                other => return Err(self.expected("a path string", Token::Placeholder(other.to_string().into()))),
            };
            let database = if self.consume_keyword(Keyword::AS) {
                self.parse_identifier()?
            } else {
                path.clone()
            };
            let alias = if self.peek_token() == Token::LParen {
                self.next_token();
                let alias = self.parse_identifier()?;
                self.expect_token(&Token::RParen)?;
                Some(alias)
            } else {
                None
            };
            return Ok(Statement::AttachDuckDbDatabase { if_not_exists, database, path, alias });
        }
        self.expect_keyword(Keyword::DATABASE)?;
        let schema_name = self.parse_identifier()?;
        self.expect_keyword(Keyword::AS)?;
        let database = self.parse_identifier()?;
        Ok(Statement::AttachDatabase { database, schema_name })
    }

    pub(crate) fn parse_detach(&mut self) -> ParseResult<Statement> {
        self.next_token();
        self.expect_keyword(Keyword::DATABASE)?;
        let if_exists = self.consume_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let alias = self.parse_identifier()?;
        Ok(Statement::DetachDuckDbDatabase { if_exists, alias })
    }

    pub(crate) fn parse_copy(&mut self) -> ParseResult<Statement> {
        self.next_token();
        self.expect_keyword(Keyword::INTO)?;
        let into = self.parse_object_name()?;
        self.expect_keyword(Keyword::FROM)?;
        let from_stage = self.parse_identifier()?;
        let file_format = self.parse_file_format_clause()?;
        Ok(Statement::CopyIntoSnowflake { into, from_stage, file_format })
    }

    pub(crate) fn parse_install_load(&mut self, install: bool) -> ParseResult<Statement> {
        self.next_token();
        let extension_name = self.parse_identifier()?;
        Ok(if install {
            Statement::Install { extension_name }
        } else {
            Statement::Load { extension_name }
        })
    }
}
