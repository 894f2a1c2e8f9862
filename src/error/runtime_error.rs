use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Operand type mismatches are not errors; they evaluate to `null`.
pub enum RuntimeError {
    /// Integer division with a zero divisor.
    DivisionByZero {
        /// The left operand of the division.
        dividend: i64,
    },
    /// A binary integer operation whose result does not fit in 64 bits.
    Overflow {
        /// Left operand.
        left:     i64,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    i64,
    },
    /// A unary integer operation whose result does not fit in 64 bits.
    PrefixOverflow {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        operand:  i64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => write!(f, "division by zero: {dividend} / 0"),
            Self::Overflow { left,
                             operator,
                             right, } => {
                write!(f, "integer overflow while computing {left} {operator} {right}")
            },
            Self::PrefixOverflow { operator, operand } => {
                write!(f, "integer overflow while computing {operator}{operand}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
