use std::fmt;

/// Parsing errors.
///
/// Defines the syntax errors the parser records while building a program:
/// unexpected tokens, tokens that cannot start or continue an expression, and
/// malformed integer literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the arithmetic failures the evaluator reports instead of
/// producing a value: division by zero and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the source-to-value pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source did not parse. Holds every recorded syntax error.
    Parse(Vec<ParseError>),
    /// Evaluation of a parsed program failed.
    Runtime(RuntimeError),
}

impl From<Vec<ParseError>> for Error {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(errors) => {
                write!(f, "parse error:")?;
                for error in errors {
                    write!(f, "\n\t{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "runtime error:\n\t{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(errors) => errors.first().map(|e| e as &(dyn std::error::Error + 'static)),
            Self::Runtime(error) => Some(error),
        }
    }
}
