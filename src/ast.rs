use std::fmt;

/// The two-operand truth functions.
///
/// Every binary node of [`Expr`] maps onto one of these, which lets the
/// evaluator share a single dispatch for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    /// Logical conjunction.
    And,
    /// Logical disjunction.
    Or,
    /// Material implication.
    Implies,
    /// Material equivalence.
    Iff,
}

/// An abstract syntax tree (AST) node representing a propositional-logic
/// expression.
///
/// `Expr` is built from a symbolic expression by the parser and walked by the
/// evaluator. Compound variants own their operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Reference to a variable by name.
    Reference(String),
    /// A literal truth value.
    Bool(bool),
    /// Logical negation.
    Not {
        /// The negated expression.
        operand: Box<Self>,
    },
    /// Conjunction.
    And {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Disjunction.
    Or {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Implication, `left => right`.
    Implies {
        /// Antecedent.
        left:  Box<Self>,
        /// Consequent.
        right: Box<Self>,
    },
    /// Equivalence, `left <=> right`.
    Iff {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Binds `variable` while `body` is evaluated, then removes it.
    Let {
        /// Name of the bound variable.
        variable: String,
        /// Expression providing the bound value.
        binding:  Box<Self>,
        /// Expression evaluated with the binding in place.
        body:     Box<Self>,
    },
    /// Binds `variable` for the rest of the session.
    Set {
        /// Name of the bound variable.
        variable: String,
        /// Expression providing the bound value.
        binding:  Box<Self>,
    },
    /// Stands in for input that could not be given a meaning. Evaluating it
    /// is always an error.
    Null,
}

impl Expr {
    /// Builds a reference to `name`.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// Builds a negation.
    #[must_use]
    pub fn not(operand: Self) -> Self {
        Self::Not { operand: Box::new(operand) }
    }

    /// Builds the binary node for `connective`.
    ///
    /// # Example
    /// ```
    /// use proplisp::ast::{Connective, Expr};
    ///
    /// let expr = Expr::binary(Connective::And, Expr::Bool(true), Expr::Bool(false));
    /// assert_eq!(expr.to_string(), "And(BoolLiteral(true), BoolLiteral(false))");
    /// ```
    #[must_use]
    pub fn binary(connective: Connective, left: Self, right: Self) -> Self {
        let left = Box::new(left);
        let right = Box::new(right);
        match connective {
            Connective::And => Self::And { left, right },
            Connective::Or => Self::Or { left, right },
            Connective::Implies => Self::Implies { left, right },
            Connective::Iff => Self::Iff { left, right },
        }
    }

    /// Builds a scoped binding.
    #[must_use]
    pub fn let_in(variable: impl Into<String>, binding: Self, body: Self) -> Self {
        Self::Let { variable: variable.into(),
                    binding:  Box::new(binding),
                    body:     Box::new(body), }
    }

    /// Builds a persistent binding.
    #[must_use]
    pub fn set(variable: impl Into<String>, binding: Self) -> Self {
        Self::Set { variable: variable.into(),
                    binding:  Box::new(binding), }
    }

    /// Splits a binary node into its connective and operands.
    #[must_use]
    pub fn as_binary(&self) -> Option<(Connective, &Self, &Self)> {
        match self {
            Self::And { left, right } => Some((Connective::And, left.as_ref(), right.as_ref())),
            Self::Or { left, right } => Some((Connective::Or, left.as_ref(), right.as_ref())),
            Self::Implies { left, right } => Some((Connective::Implies, left.as_ref(), right.as_ref())),
            Self::Iff { left, right } => Some((Connective::Iff, left.as_ref(), right.as_ref())),
            _ => None,
        }
    }

    /// Whether this is the null sentinel.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(name) => write!(f, "Reference({name})"),
            Self::Bool(value) => write!(f, "BoolLiteral({value})"),
            Self::Not { operand } => write!(f, "Not({operand})"),
            Self::And { left, right } => write!(f, "And({left}, {right})"),
            Self::Or { left, right } => write!(f, "Or({left}, {right})"),
            Self::Implies { left, right } => write!(f, "Implies({left}, {right})"),
            Self::Iff { left, right } => write!(f, "Iff({left}, {right})"),
            Self::Let { variable,
                        binding,
                        body, } => write!(f, "Let({variable}, {binding}, {body})"),
            Self::Set { variable, binding } => write!(f, "Set({variable}, {binding})"),
            Self::Null => write!(f, "Null"),
        }
    }
}
