use crate::{
    ast::{
        BooleanLiteral, CallExpression, Expression, Identifier, InfixExpression, InfixOperator,
        IntegerLiteral, PrefixExpression, PrefixOperator,
    },
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    pub(crate) fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(Identifier { token: self.current.clone(),
                                               name:  self.current.literal.clone(), }))
    }

    /// Parses the current integer token as a decimal `i64`.
    ///
    /// # Errors
    /// `InvalidInteger` if the literal does not fit in 64 bits.
    pub(crate) fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        let value = self.current
                        .literal
                        .parse::<i64>()
                        .map_err(|_| ParseError::InvalidInteger { literal:
                                                                      self.current.literal.clone(), })?;

        Ok(Expression::Integer(IntegerLiteral { token: self.current.clone(),
                                                value }))
    }

    pub(crate) fn parse_boolean(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Boolean(BooleanLiteral { token: self.current.clone(),
                                                value: self.current_is(TokenKind::True), }))
    }

    /// Parses `-operand` or `!operand`.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so `-a * b` is
    /// `((-a) * b)` while `-f(x)` negates the call.
    pub(crate) fn parse_prefix_expression(&mut self) -> ParseResult<Expression> {
        let token = self.current.clone();
        let operator = PrefixOperator::from_token_kind(token.kind)
                           .ok_or(ParseError::NoPrefixParseFn { kind: token.kind })?;

        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix(PrefixExpression { token,
                                                 operator,
                                                 operand: Box::new(operand) }))
    }

    /// Parses `( expression )`, returning the inner expression itself.
    pub(crate) fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expression)
    }

    /// Parses the right operand of a binary operator.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// makes `1 - 2 - 3` group as `((1 - 2) - 3)`.
    pub(crate) fn parse_infix_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.current.clone();
        let operator = InfixOperator::from_token_kind(token.kind)
                           .ok_or(ParseError::NoInfixParseFn { kind: token.kind })?;
        let precedence = self.current_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix(InfixExpression { token,
                                               operator,
                                               left: Box::new(left),
                                               right: Box::new(right) }))
    }

    /// Parses the argument list of a call whose callee is `callee`.
    pub(crate) fn parse_call_expression(&mut self, callee: Expression) -> ParseResult<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_call_arguments()?;

        Ok(Expression::Call(CallExpression { token,
                                             callee: Box::new(callee),
                                             arguments }))
    }

    /// Parses a comma-separated, possibly empty, argument list.
    ///
    /// On entry the current token is `(`; on success it is the closing `)`.
    ///
    /// Grammar: `arguments := "(" (expression ("," expression)*)? ")"`
    ///
    /// # Errors
    /// `UnexpectedToken` if the list is not closed by `)`, or any error from
    /// an argument expression.
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(arguments)
    }
}
