/// The evaluator module reduces syntax trees to runtime values.
///
/// The evaluator walks the AST recursively. Literals become values directly,
/// operators are applied to their evaluated operands, and a program yields
/// the value of its last statement.
///
/// # Responsibilities
/// - Evaluates expression statements, literals, prefix and infix operations.
/// - Degrades unsupported operand types to `null` instead of failing.
/// - Reports division by zero and integer overflow as runtime errors.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces tokens on demand, one per
/// call, each pairing a kind with its literal text.
///
/// # Responsibilities
/// - Recognizes integers, identifiers, keywords, operators and punctuation.
/// - Skips whitespace.
/// - Turns unrecognized input into illegal tokens without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and uses operator-precedence
/// (Pratt) parsing to build expressions with the usual arithmetic binding
/// and left associativity.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Records syntax errors instead of aborting.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers, booleans and `null`, with shared constants for
/// `true`, `false` and `null`.
pub mod value;
