use crate::{
    ast::{ExpressionStatement, Identifier, LetStatement, Program, ReturnStatement, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses statements until the end of input.
    ///
    /// Parsing stops at the first statement that fails. Its error is
    /// recorded in [`Parser::errors`] and the returned program holds only
    /// the statements completed before it.
    ///
    /// # Example
    /// ```
    /// use forklang::interpreter::{lexer::Lexer, parser::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("1; let x 5; 2"));
    /// let program = parser.parse_program();
    ///
    /// assert_eq!(program.statements.len(), 1);
    /// assert_eq!(parser.errors()[0].to_string(),
    ///            "expected next token to be =, got INT instead");
    /// ```
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => {
                    log::debug!("parse stopped after {} statement(s): {error}",
                                program.statements.len());
                    self.errors.push(error);
                    break;
                },
            }
            self.next_token();
        }

        program
    }

    /// Parses one statement starting at the current token.
    ///
    /// `let` and `return` have dedicated forms; anything else is an
    /// expression statement. A trailing `;` is consumed when present.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// Grammar: `let := "let" IDENT "=" expression ";"?`
    fn parse_let_statement(&mut self) -> ParseResult<LetStatement> {
        log::trace!("parsing let statement at {:?}", self.current.literal);
        let token = self.current.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier { token: self.current.clone(),
                                name:  self.current.literal.clone(), };

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(LetStatement { token, name, value })
    }

    /// Grammar: `return := "return" expression ";"?`
    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        let token = self.current.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(ReturnStatement { token, value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<ExpressionStatement> {
        let token = self.current.clone();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(ExpressionStatement { token, expression })
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
