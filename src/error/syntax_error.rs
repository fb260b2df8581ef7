#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading or building an
/// expression.
pub enum SyntaxError {
    /// The count of `(` does not match the count of `)`, or a group is never
    /// closed.
    UnbalancedParentheses,
    /// The buffer is neither a parenthesized form nor a single atom.
    InvalidSyntax {
        /// The offending buffer.
        buffer: String,
    },
    /// Found a token after a complete expression had already been read.
    UnexpectedToken {
        /// The extra token.
        token: String,
    },
    /// The tokenizer met text it cannot classify.
    UnexpectedCharacter {
        /// The unrecognised text.
        text: String,
    },
    /// Tried to view an atom or an improper pair as a list.
    NotAList {
        /// The kind of node that was found.
        kind: &'static str,
    },
    /// Something other than a symbol appeared in operator position.
    InvalidOperatorComponent {
        /// The offending component.
        component: String,
    },
    /// The operator exists, but not with this many terms.
    IncorrectTermCount {
        /// The operator as written.
        operator: String,
        /// The number of terms that followed it.
        terms:    usize,
    },
    /// No operator takes this many terms.
    UnknownOperator {
        /// The operator as written.
        operator: String,
    },
    /// `set` and `let` need a symbol as their first term.
    ExpectedSymbol {
        /// The binding operator.
        operator: String,
        /// What was found instead.
        found:    String,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses => write!(f, "Syntax error: Unbalanced parentheses."),
            Self::InvalidSyntax { buffer } => {
                write!(f, "Syntax error: Invalid s-expression syntax: \"{buffer}\".")
            },
            Self::UnexpectedToken { token } => {
                write!(f, "Syntax error: Unexpected token: \"{token}\".")
            },
            Self::UnexpectedCharacter { text } => {
                write!(f, "Syntax error: Unrecognised input: \"{text}\".")
            },
            Self::NotAList { kind } => {
                write!(f, "Syntax error: {kind} cannot be converted to list form.")
            },
            Self::InvalidOperatorComponent { component } => {
                write!(f, "Syntax error: Invalid operator component: {component}.")
            },
            Self::IncorrectTermCount { operator, terms } => write!(f,
                                                                   "Syntax error: Incorrect number of terms ({terms}) provided for operation {operator}."),
            Self::UnknownOperator { operator } => {
                write!(f, "Syntax error: Unknown operator provided: {operator}.")
            },
            Self::ExpectedSymbol { operator, found } => write!(f,
                                                               "Syntax error: Expected a symbol to bind in {operator}, found {found}."),
        }
    }
}

impl std::error::Error for SyntaxError {}
