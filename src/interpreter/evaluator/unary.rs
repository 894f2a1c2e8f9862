use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{FALSE, NULL, Value},
    },
};

/// Evaluates a unary operation.
///
/// - `Not`: negation by truthiness. `false` and `null` become `true`, every
///   other value becomes `false`. An operand that produced no value also
///   becomes `false`.
/// - `Negate`: integer negation; any other operand yields `null`.
///
/// # Errors
/// `PrefixOverflow` when negating `i64::MIN`.
///
/// # Example
/// ```
/// use forklang::{
///     ast::PrefixOperator,
///     interpreter::{
///         evaluator::unary::eval_prefix,
///         value::{FALSE, NULL, TRUE, Value},
///     },
/// };
///
/// assert_eq!(eval_prefix(PrefixOperator::Not, Some(&NULL)).unwrap(), TRUE);
/// assert_eq!(eval_prefix(PrefixOperator::Not, Some(&Value::Integer(5))).unwrap(), FALSE);
/// assert_eq!(eval_prefix(PrefixOperator::Negate, Some(&TRUE)).unwrap(), NULL);
/// ```
pub fn eval_prefix(operator: PrefixOperator, operand: Option<&Value>) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Not => Ok(operand.map_or(FALSE, |value| Value::from_bool(!value.is_truthy()))),
        PrefixOperator::Negate => match operand {
            Some(Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::PrefixOverflow { operator,
                                                       operand: *n })
            },
            _ => Ok(NULL),
        },
    }
}
