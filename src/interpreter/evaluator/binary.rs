use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{NULL, Value},
    },
};

/// Evaluates a binary operation.
///
/// Two integers support every operator. Two booleans support `==` and `!=`.
/// Any other pairing, including an operand that produced no value, yields
/// `null`.
///
/// # Errors
/// `DivisionByZero` for an integer division by zero, `Overflow` when the
/// result does not fit in an `i64`.
///
/// # Example
/// ```
/// use forklang::{
///     ast::InfixOperator,
///     interpreter::{
///         evaluator::binary::eval_infix,
///         value::{NULL, TRUE, Value},
///     },
/// };
///
/// let seven = eval_infix(InfixOperator::Div, Some(&Value::Integer(15)), Some(&Value::Integer(2)));
/// assert_eq!(seven.unwrap(), Value::Integer(7));
///
/// let null = eval_infix(InfixOperator::Add, Some(&TRUE), Some(&Value::Integer(1)));
/// assert_eq!(null.unwrap(), NULL);
///
/// assert!(eval_infix(InfixOperator::Div, Some(&Value::Integer(1)), Some(&Value::Integer(0))).is_err());
/// ```
pub fn eval_infix(operator: InfixOperator,
                  left: Option<&Value>,
                  right: Option<&Value>)
                  -> EvalResult<Value> {
    match (left, right) {
        (Some(Value::Integer(a)), Some(Value::Integer(b))) => eval_integer_infix(operator, *a, *b),
        (Some(Value::Boolean(a)), Some(Value::Boolean(b))) => {
            Ok(eval_boolean_infix(operator, *a, *b))
        },
        _ => Ok(NULL),
    }
}

/// Evaluates a binary operation between two integers.
///
/// Arithmetic is checked; division truncates toward zero.
///
/// # Errors
/// `DivisionByZero` or `Overflow`.
pub fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

    let overflow = || RuntimeError::Overflow { left,
                                               operator,
                                               right };

    match operator {
        Add => left.checked_add(right).map(Value::from).ok_or_else(overflow),
        Sub => left.checked_sub(right).map(Value::from).ok_or_else(overflow),
        Mul => left.checked_mul(right).map(Value::from).ok_or_else(overflow),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { dividend: left });
            }
            left.checked_div(right).map(Value::from).ok_or_else(overflow)
        },
        Less => Ok(Value::from(left < right)),
        Greater => Ok(Value::from(left > right)),
        Equal => Ok(Value::from(left == right)),
        NotEqual => Ok(Value::from(left != right)),
    }
}

/// Booleans only compare for equality; ordering and arithmetic yield `null`.
const fn eval_boolean_infix(operator: InfixOperator, left: bool, right: bool) -> Value {
    match operator {
        InfixOperator::Equal => Value::from_bool(left == right),
        InfixOperator::NotEqual => Value::from_bool(left != right),
        _ => NULL,
    }
}
