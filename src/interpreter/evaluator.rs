/// Core evaluation logic.
///
/// Contains the structural recursion over programs, statements and
/// expressions, and the [`core::Evaluate`] trait tying them together.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements logical negation by truthiness and integer negation.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Implements integer arithmetic and comparisons, and equality between
/// booleans. Every other operand combination yields `null`.
pub mod binary;

pub use self::core::{EvalResult, Evaluate, eval_expression, eval_program, eval_statement, evaluate};
