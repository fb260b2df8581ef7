#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvaluationError {
    /// Referenced a variable with no binding in the environment.
    UndefinedSymbol {
        /// The name of the variable.
        name: String,
    },
    /// Evaluated the null sentinel left behind by unparseable input.
    NullEvaluation,
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedSymbol { name } => {
                write!(f, "Evaluation error: undefined symbol: {name}")
            },
            Self::NullEvaluation => write!(f, "Evaluation error: attempted null evaluation"),
        }
    }
}

impl std::error::Error for EvaluationError {}
