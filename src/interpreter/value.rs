use std::fmt;

/// The shared `true` value.
pub const TRUE: Value = Value::Boolean(true);
/// The shared `false` value.
pub const FALSE: Value = Value::Boolean(false);
/// The shared `null` value, produced whenever an operation is undefined for
/// its operands.
pub const NULL: Value = Value::Null;

/// Represents a runtime value in the interpreter.
///
/// Values are immutable; every operation produces a new value or one of the
/// shared constants [`TRUE`], [`FALSE`] and [`NULL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean. Always one of [`TRUE`] or [`FALSE`].
    Boolean(bool),
    /// The absence of a meaningful value.
    Null,
}

impl Value {
    /// Returns [`TRUE`] or [`FALSE`].
    ///
    /// # Example
    /// ```
    /// use forklang::interpreter::value::{FALSE, TRUE, Value};
    ///
    /// assert_eq!(Value::from_bool(1 < 2), TRUE);
    /// assert_eq!(Value::from_bool(false), FALSE);
    /// ```
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }

    /// The name of the value's type, as shown in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
        }
    }

    /// Whether the value counts as true for logical negation.
    ///
    /// `false` and `null` are falsy; every other value is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::from_bool(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
        }
    }
}
