use super::ast::{BindingKind, DeclaredType, Expression, Statement};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent parser for Typelet
///
/// Produces the ordered top-level statement list. There is no error
/// recovery: the first grammar violation aborts the whole parse and no
/// partial statement list is produced.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Creates a new parser over an EOF-terminated token sequence
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0 }
    }

    /// Parses the tokens into a statement list
    pub fn parse(&mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.declaration()?);
        }

        Ok(statements)
    }

    fn declaration(&mut self) -> Result<Statement> {
        if self.match_kinds(&[TokenKind::Let, TokenKind::Const]) {
            let keyword = match self.previous().kind {
                TokenKind::Const => BindingKind::Const,
                _ => BindingKind::Let,
            };
            return self.var_declaration(keyword);
        }
        self.statement()
    }

    fn statement(&mut self) -> Result<Statement> {
        if self.match_kinds(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.match_kinds(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.match_kinds(&[TokenKind::LeftBrace]) {
            return Ok(Statement::Block(self.block()?));
        }

        self.expression_statement()
    }

    fn var_declaration(&mut self, keyword: BindingKind) -> Result<Statement> {
        let name = self.consume_identifier("Expect variable name.")?;

        // The colon and a recognized type keyword are both mandatory,
        // even when an initializer would make the type inferable.
        if !self.match_kinds(&[TokenKind::Colon]) {
            return Err(Error::parsing(
                "Need to specify variable type",
                self.previous().clone(),
            ));
        }

        let declared_type = if self.match_kinds(&[TokenKind::StringType]) {
            DeclaredType::String
        } else if self.match_kinds(&[TokenKind::NumberType]) {
            DeclaredType::Number
        } else if self.match_kinds(&[TokenKind::BooleanType]) {
            DeclaredType::Boolean
        } else {
            return Err(Error::parsing(
                "Need to specify variable type",
                self.peek().clone(),
            ));
        };

        let initializer = if self.match_kinds(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            &TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;

        Ok(Statement::Variable {
            name,
            initializer,
            declared_type,
            keyword,
        })
    }

    fn if_statement(&mut self) -> Result<Statement> {
        self.consume(&TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(&TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        // Dangling else binds to the nearest unmatched if
        let else_branch = if self.match_kinds(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn print_statement(&mut self) -> Result<Statement> {
        let value = self.expression()?;
        self.consume(&TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Statement::Print(value))
    }

    fn expression_statement(&mut self) -> Result<Statement> {
        let expr = self.expression()?;
        self.consume(&TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Statement::Expression(expr))
    }

    fn block(&mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();

        while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.declaration()?);
        }

        self.consume(&TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn expression(&mut self) -> Result<Expression> {
        self.assignment()
    }

    // Right-associative: the left side must already have reduced to a
    // Variable node before `=` is accepted.
    fn assignment(&mut self) -> Result<Expression> {
        let expr = self.comparison()?;

        if self.match_kinds(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            if let Expression::Variable(name) = expr {
                return Ok(Expression::Assignment {
                    name,
                    value: Box::new(value),
                });
            }

            return Err(Error::parsing("Invalid assignment target.", equals));
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expression> {
        let mut expr = self.addition()?;

        while self.match_kinds(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.addition()?;
            expr = Expression::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn addition(&mut self) -> Result<Expression> {
        let mut expr = self.multiplication()?;

        while self.match_kinds(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.multiplication()?;
            expr = Expression::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn multiplication(&mut self) -> Result<Expression> {
        let mut expr = self.unary()?;

        while self.match_kinds(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            expr = Expression::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expression> {
        if self.match_kinds(&[TokenKind::Minus]) {
            let operator = self.previous().clone();
            let operand = self.unary()?;
            return Ok(Expression::Unary {
                operator,
                operand: Box::new(operand),
            });
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<Expression> {
        match self.peek().kind.clone() {
            TokenKind::False => {
                self.advance();
                Ok(Expression::BoolLiteral(false))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expression::BoolLiteral(true))
            }
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expression::NumberLiteral(n))
            }
            TokenKind::Str(s) => {
                self.advance();
                Ok(Expression::StringLiteral(s))
            }
            TokenKind::Identifier(_) => {
                self.advance();
                Ok(Expression::Variable(self.previous().clone()))
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.consume(&TokenKind::RightParen, "Expect ')' after expression.")?;
                Ok(Expression::Grouping(Box::new(expr)))
            }
            _ => Err(Error::parsing("Expect expression.", self.peek().clone())),
        }
    }

    fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    fn check(&self, kind: &TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        &self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn consume(&mut self, kind: &TokenKind, message: &str) -> Result<Token> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }
        Err(Error::parsing(message, self.peek().clone()))
    }

    fn consume_identifier(&mut self, message: &str) -> Result<Token> {
        if matches!(self.peek().kind, TokenKind::Identifier(_)) {
            return Ok(self.advance().clone());
        }
        Err(Error::parsing(message, self.peek().clone()))
    }
}
