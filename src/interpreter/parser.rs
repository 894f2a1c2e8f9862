/// Parser state, token cursor, precedence table and the Pratt expression loop.
///
/// Holds the current and lookahead tokens pulled from the lexer, records
/// syntax errors, and maps token kinds to their prefix and infix handlers.
pub mod core;

/// Prefix and infix expression handlers.
///
/// Literals, identifiers, unary operators, grouping, binary operators and
/// call argument lists.
pub mod expression;

/// Statement parsing.
///
/// Builds `let`, `return` and expression statements and drives the parse of
/// a whole program.
pub mod statement;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, Parser, Precedence};
