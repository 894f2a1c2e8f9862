use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
    },
    /// The token cannot begin an expression.
    NoPrefixParseFn {
        /// The offending token kind.
        kind: TokenKind,
    },
    /// The token cannot continue an expression.
    NoInfixParseFn {
        /// The offending token kind.
        kind: TokenKind,
    },
    /// An integer token whose text is not a valid 64-bit signed integer.
    InvalidInteger {
        /// The literal text of the token.
        literal: String,
    },
    /// The expression nests deeper than the parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParseFn { kind } => {
                write!(f, "no prefix parse function for {kind} found")
            },
            Self::NoInfixParseFn { kind } => write!(f, "no infix parse function for {kind} found"),
            Self::InvalidInteger { literal } => {
                write!(f, "could not parse {literal:?} as integer")
            },
            Self::NestingTooDeep { limit } => {
                write!(f, "expression nested deeper than {limit} levels")
            },
        }
    }
}

impl std::error::Error for ParseError {}
