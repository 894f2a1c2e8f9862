//! # forklang
//!
//! forklang is the front end and evaluator of Fork, a small
//! expression-oriented language. Source text is tokenized on demand, parsed
//! into a syntax tree by a Pratt parser, and reduced to a value by a
//! tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{evaluator::eval_program, lexer::Lexer, parser::Parser, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression node types produced by
/// the parser and consumed by the evaluator, together with their canonical
/// textual rendering.
///
/// # Responsibilities
/// - Defines a closed set of statement and expression variants.
/// - Renders every node back to source form (fully parenthesized).
/// - Exposes the literal of the token each node was built from.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines syntax errors recorded by the parser.
/// - Defines the arithmetic errors raised by the evaluator.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the path from source text to value.
///
/// This module ties together the lexer, parser, evaluator and value types.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads one line at a time, parses and evaluates it, and writes the result
/// or the errors.
pub mod repl;

/// Parses `source` into a program.
///
/// # Errors
/// Returns every recorded syntax error if any statement failed to parse.
///
/// # Examples
/// ```
/// use forklang::parse;
///
/// let program = parse("add(1, 2 * 3, 4 + 5)").unwrap();
/// assert_eq!(program.to_string(), "add(1, (2 * 3), (4 + 5))");
///
/// assert!(parse("let x 5;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.into_errors())
    }
}

/// Parses and evaluates `source`, returning the value of its last statement.
///
/// # Errors
/// Returns [`Error::Parse`] if the source does not parse, or
/// [`Error::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use forklang::{eval_source, interpreter::value::{NULL, TRUE, Value}};
///
/// assert_eq!(eval_source("5 + 5 * 2").unwrap(), Some(Value::Integer(15)));
/// assert_eq!(eval_source("1 < 2 == true").unwrap(), Some(TRUE));
/// assert_eq!(eval_source("true + 1").unwrap(), Some(NULL));
/// assert_eq!(eval_source("let x = 1").unwrap(), None);
/// assert!(eval_source("1 / 0").is_err());
/// ```
pub fn eval_source(source: &str) -> Result<Option<Value>, Error> {
    let program = parse(source)?;
    Ok(eval_program(&program)?)
}
