use crate::{
    ast::{Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_infix, unary::eval_prefix},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// `Ok(None)` means the node is valid but produces no value (`let`,
/// `return`, identifiers and calls are parsed but not evaluated).
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A syntax tree node that can be reduced to a value.
pub trait Evaluate {
    /// Evaluates the node.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] on division by zero or integer overflow.
    fn evaluate(&self) -> EvalResult<Option<Value>>;
}

impl Evaluate for Program {
    fn evaluate(&self) -> EvalResult<Option<Value>> {
        eval_program(self)
    }
}

impl Evaluate for Statement {
    fn evaluate(&self) -> EvalResult<Option<Value>> {
        eval_statement(self)
    }
}

impl Evaluate for Expression {
    fn evaluate(&self) -> EvalResult<Option<Value>> {
        eval_expression(self)
    }
}

/// Evaluates any node.
///
/// # Errors
/// Returns a [`RuntimeError`] on division by zero or integer overflow.
///
/// # Example
/// ```
/// use forklang::{
///     interpreter::{evaluator::evaluate, value::Value},
///     parse,
/// };
///
/// let program = parse("5 + 5 * 2").unwrap();
/// assert_eq!(evaluate(&program).unwrap(), Some(Value::Integer(15)));
/// ```
pub fn evaluate<N: Evaluate + ?Sized>(node: &N) -> EvalResult<Option<Value>> {
    node.evaluate()
}

/// Evaluates every statement in order and returns the value of the last one.
///
/// An empty program, or one whose last statement yields nothing, returns
/// `None`.
pub fn eval_program(program: &Program) -> EvalResult<Option<Value>> {
    log::trace!("evaluating {} statement(s)", program.statements.len());

    let mut result = None;
    for statement in &program.statements {
        result = eval_statement(statement)?;
    }
    Ok(result)
}

/// Evaluates a single statement.
///
/// Only expression statements produce a value.
pub fn eval_statement(statement: &Statement) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Expression(statement) => eval_expression(&statement.expression),
        Statement::Let(_) | Statement::Return(_) => {
            log::debug!("statement not evaluated: {statement}");
            Ok(None)
        },
    }
}

/// Evaluates an expression.
///
/// Operands are evaluated left to right before their operator is applied.
pub fn eval_expression(expression: &Expression) -> EvalResult<Option<Value>> {
    match expression {
        Expression::Integer(literal) => Ok(Some(Value::from(literal.value))),
        Expression::Boolean(literal) => Ok(Some(Value::from(literal.value))),
        Expression::Prefix(prefix) => {
            let operand = eval_expression(&prefix.operand)?;
            eval_prefix(prefix.operator, operand.as_ref()).map(Some)
        },
        Expression::Infix(infix) => {
            let left = eval_expression(&infix.left)?;
            let right = eval_expression(&infix.right)?;
            eval_infix(infix.operator, left.as_ref(), right.as_ref()).map(Some)
        },
        Expression::Identifier(_) | Expression::Call(_) => {
            log::debug!("expression not evaluated: {expression}");
            Ok(None)
        },
    }
}
