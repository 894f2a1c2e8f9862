use crate::{
    ast::Expression,
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest expression tree the parser builds.
///
/// Every nested sub-expression and every operator folded onto a left operand
/// counts one level. Trees are walked recursively when rendered, evaluated
/// and dropped, so this bound keeps those walks within the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Binding strength of operators, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting level of every full expression.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `-` and `!`
    Prefix,
    /// `(` after an expression.
    Call,
}

impl Precedence {
    /// Precedence of `kind` when it continues an expression.
    ///
    /// Tokens that cannot continue an expression bind at
    /// [`Precedence::Lowest`], which ends the climbing loop.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Equal | TokenKind::NotEqual => Self::Equals,
            TokenKind::Less | TokenKind::Greater => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Star | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// Builds an expression from the current token.
pub(crate) type PrefixParseFn<'src> = fn(&mut Parser<'src>) -> ParseResult<Expression>;
/// Combines an already parsed left operand with the current token.
pub(crate) type InfixParseFn<'src> = fn(&mut Parser<'src>, Expression) -> ParseResult<Expression>;

/// Pratt parser over a [`Lexer`].
///
/// Tokens are pulled one at a time; the parser only ever looks at the current
/// token and one token of lookahead. Syntax errors are recorded rather than
/// raised and can be read back with [`Parser::errors`].
///
/// # Example
/// ```
/// use forklang::interpreter::{lexer::Lexer, parser::Parser};
///
/// let mut parser = Parser::new(Lexer::new("1 + 2 * 3"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "(1 + (2 * 3))");
/// ```
pub struct Parser<'src> {
    lexer:              Lexer<'src>,
    pub(crate) current: Token,
    pub(crate) peek:    Token,
    pub(crate) errors:  Vec<ParseError>,
    depth:              usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and primes the current and lookahead tokens.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self { lexer,
               current,
               peek,
               errors: Vec::new(),
               depth:  0 }
    }

    /// The syntax errors recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its recorded syntax errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    pub(crate) fn next_token(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances onto the lookahead token if it is of `kind`.
    ///
    /// # Errors
    /// `UnexpectedToken` if the lookahead token is of another kind; the
    /// cursor is left where it was.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            log::debug!("expect_peek failed: expected {kind}, peek {}", self.peek.kind);
            Err(ParseError::UnexpectedToken { expected: kind,
                                              found:    self.peek.kind, })
        }
    }

    pub(crate) const fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    pub(crate) const fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The prefix handler of the current token produces the left operand.
    /// While the lookahead token binds tighter than `precedence`, the parser
    /// advances onto it and lets its infix handler extend the left operand.
    /// Infix handlers parse their right operand at their own precedence, so
    /// operators of equal strength associate to the left.
    ///
    /// # Errors
    /// `NoPrefixParseFn` if the current token cannot start an expression,
    /// `NestingTooDeep` past [`MAX_NESTING_DEPTH`], or any error raised by a
    /// handler.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let depth = self.depth;
        let result = self.parse_nested_expression(precedence);
        self.depth = depth;
        result
    }

    fn parse_nested_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        self.descend()?;

        let Some(prefix) = prefix_parse_fn(self.current.kind) else {
            return Err(ParseError::NoPrefixParseFn { kind: self.current.kind });
        };

        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = infix_parse_fn(self.peek.kind) else {
                return Ok(left);
            };
            self.descend()?;
            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    fn descend(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            log::debug!("expression nesting exceeded {MAX_NESTING_DEPTH} at {}", self.current);
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
        }
        Ok(())
    }
}

/// The prefix handler registered for `kind`.
pub(crate) fn prefix_parse_fn<'src>(kind: TokenKind) -> Option<PrefixParseFn<'src>> {
    match kind {
        TokenKind::Ident => Some(Parser::parse_identifier),
        TokenKind::Int => Some(Parser::parse_integer_literal),
        TokenKind::True | TokenKind::False => Some(Parser::parse_boolean),
        TokenKind::Bang | TokenKind::Minus => Some(Parser::parse_prefix_expression),
        TokenKind::LParen => Some(Parser::parse_grouped_expression),
        _ => None,
    }
}

/// The infix handler registered for `kind`.
pub(crate) fn infix_parse_fn<'src>(kind: TokenKind) -> Option<InfixParseFn<'src>> {
    match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Equal
        | TokenKind::NotEqual
        | TokenKind::Less
        | TokenKind::Greater => Some(Parser::parse_infix_expression),
        TokenKind::LParen => Some(Parser::parse_call_expression),
        _ => None,
    }
}
