/// Syntax errors.
///
/// Defines all error types that can occur while tokenizing the input, reading
/// symbolic expressions, or building logic expressions out of them.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains the error types raised while evaluating a logic expression against
/// an environment.
pub mod evaluation_error;

use std::fmt;

pub use evaluation_error::EvaluationError;
pub use syntax_error::SyntaxError;

/// Either kind of failure that can end the interpretation of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be read or built into a logic expression.
    Syntax(SyntaxError),
    /// The logic expression could not be evaluated.
    Evaluation(EvaluationError),
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<EvaluationError> for Error {
    fn from(e: EvaluationError) -> Self {
        Self::Evaluation(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Evaluation(e) => Some(e),
        }
    }
}
