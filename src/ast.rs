use std::fmt;

use crate::interpreter::lexer::{Token, TokenKind};

/// Capabilities shared by every syntax tree node.
///
/// The canonical source rendering of a node is its [`fmt::Display`] output:
/// prefix and infix expressions are fully parenthesized, so the rendering of
/// a parsed program re-parses to the same tree.
pub trait Node: fmt::Display {
    /// The literal text of the token the node was built from.
    fn token_literal(&self) -> &str;
}

/// The root of a parsed source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements.first().map_or("", Node::token_literal)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>`
    Let(LetStatement),
    /// `return <value>`
    Return(ReturnStatement),
    /// A bare expression used as a statement.
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Self::Let(statement) => statement.token_literal(),
            Self::Return(statement) => statement.token_literal(),
            Self::Expression(statement) => statement.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(statement) => write!(f, "{statement}"),
            Self::Return(statement) => write!(f, "{statement}"),
            Self::Expression(statement) => write!(f, "{statement}"),
        }
    }
}

/// A variable binding such as `let x = 5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    /// The `let` token.
    pub token: Token,
    /// The bound name.
    pub name:  Identifier,
    /// The bound expression.
    pub value: Expression,
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {}", self.token.literal, self.name, self.value)
    }
}

/// A statement such as `return x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    /// The `return` token.
    pub token: Token,
    /// The returned expression.
    pub value: Expression,
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.token.literal, self.value)
    }
}

/// An expression in statement position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    /// The first token of the expression.
    pub token:      Token,
    /// The wrapped expression.
    pub expression: Expression,
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// An expression node.
///
/// Children are boxed so that the tree is owned from the [`Program`] down,
/// with no sharing between nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A name such as `x`.
    Identifier(Identifier),
    /// An integer literal such as `42`.
    Integer(IntegerLiteral),
    /// `true` or `false`.
    Boolean(BooleanLiteral),
    /// A unary operation such as `-x` or `!ok`.
    Prefix(PrefixExpression),
    /// A binary operation such as `a + b`.
    Infix(InfixExpression),
    /// A call such as `add(1, 2)`.
    Call(CallExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(expression) => expression.token_literal(),
            Self::Integer(expression) => expression.token_literal(),
            Self::Boolean(expression) => expression.token_literal(),
            Self::Prefix(expression) => expression.token_literal(),
            Self::Infix(expression) => expression.token_literal(),
            Self::Call(expression) => expression.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(expression) => write!(f, "{expression}"),
            Self::Integer(expression) => write!(f, "{expression}"),
            Self::Boolean(expression) => write!(f, "{expression}"),
            Self::Prefix(expression) => write!(f, "{expression}"),
            Self::Infix(expression) => write!(f, "{expression}"),
            Self::Call(expression) => write!(f, "{expression}"),
        }
    }
}

/// A name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The identifier token.
    pub token: Token,
    /// The name itself.
    pub name:  String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A 64-bit signed integer literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    /// The integer token, whose literal is rendered verbatim.
    pub token: Token,
    /// The parsed value.
    pub value: i64,
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

/// A boolean literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    /// The `true` or `false` token.
    pub token: Token,
    /// The literal value.
    pub value: bool,
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

/// A prefix operator applied to a single operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixExpression {
    /// The operator token.
    pub token:    Token,
    /// The operator.
    pub operator: PrefixOperator,
    /// The operand.
    pub operand:  Box<Expression>,
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.operand)
    }
}

/// A binary operator applied to two operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixExpression {
    /// The operator token.
    pub token:    Token,
    /// The operator.
    pub operator: InfixOperator,
    /// Left operand.
    pub left:     Box<Expression>,
    /// Right operand.
    pub right:    Box<Expression>,
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// A call of `callee` with an argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    /// The `(` token.
    pub token:     Token,
    /// The called expression, usually an identifier.
    pub callee:    Box<Expression>,
    /// Arguments in source order.
    pub arguments: Vec<Expression>,
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.callee)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        f.write_str(")")
    }
}

macro_rules! impl_node_for_token_owner {
    ($($node:ty),+ $(,)?) => {
        $(
            impl Node for $node {
                fn token_literal(&self) -> &str {
                    &self.token.literal
                }
            }
        )+
    };
}

impl_node_for_token_owner!(LetStatement,
                           ReturnStatement,
                           ExpressionStatement,
                           Identifier,
                           IntegerLiteral,
                           BooleanLiteral,
                           PrefixExpression,
                           InfixExpression,
                           CallExpression);

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// `!`
    Not,
    /// `-`
    Negate,
}

impl PrefixOperator {
    /// Maps a token kind to the prefix operator it spells, if any.
    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Not),
            TokenKind::Minus => Some(Self::Negate),
            _ => None,
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Not => "!",
                        Self::Negate => "-",
                    })
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl InfixOperator {
    /// Maps a token kind to the binary operator it spells, if any.
    ///
    /// # Example
    /// ```
    /// use forklang::{ast::InfixOperator, interpreter::lexer::TokenKind};
    ///
    /// assert_eq!(InfixOperator::from_token_kind(TokenKind::Star), Some(InfixOperator::Mul));
    /// assert_eq!(InfixOperator::from_token_kind(TokenKind::LParen), None);
    /// ```
    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Less => Some(Self::Less),
            TokenKind::Greater => Some(Self::Greater),
            TokenKind::Equal => Some(Self::Equal),
            TokenKind::NotEqual => Some(Self::NotEqual),
            _ => None,
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                        Self::Less => "<",
                        Self::Greater => ">",
                        Self::Equal => "==",
                        Self::NotEqual => "!=",
                    })
    }
}
