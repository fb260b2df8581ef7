use std::collections::HashMap;

use log::trace;

use crate::{
    ast::{Connective, Expr},
    error::EvaluationError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Stores the variable bindings of a session.
///
/// ## Usage
///
/// An `Environment` is created once per session and reused for every line.
/// `set` installs bindings that outlive the expression containing them;
/// `let` installs a binding only while its body is evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: HashMap<String, bool>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns its truth value.
    ///
    /// Both operands of a binary operator are evaluated, left first, even
    /// when the left one already decides the result.
    ///
    /// # Errors
    /// - `UndefinedSymbol` when a referenced variable has no binding.
    /// - `NullEvaluation` when the expression contains [`Expr::Null`].
    ///
    /// # Example
    /// ```
    /// use proplisp::{
    ///     ast::{Connective, Expr},
    ///     interpreter::evaluator::core::Environment,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let expr = Expr::binary(Connective::Or,
    ///                         Expr::Bool(true),
    ///                         Expr::set("x", Expr::Bool(false)));
    ///
    /// assert_eq!(env.eval(&expr), Ok(true));
    /// assert_eq!(env.get("x"), Some(false));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<bool> {
        match expr {
            Expr::Bool(value) => Ok(*value),
            Expr::Reference(name) => self.lookup(name),
            Expr::Not { operand } => Ok(!self.eval(operand)?),
            Expr::And { left, right } => self.eval_connective(Connective::And, left, right),
            Expr::Or { left, right } => self.eval_connective(Connective::Or, left, right),
            Expr::Implies { left, right } => {
                self.eval_connective(Connective::Implies, left, right)
            },
            Expr::Iff { left, right } => self.eval_connective(Connective::Iff, left, right),
            Expr::Set { variable, binding } => self.eval_set(variable, binding),
            Expr::Let { variable,
                        binding,
                        body, } => self.eval_let(variable, binding, body),
            Expr::Null => Err(EvaluationError::NullEvaluation),
        }
    }

    /// Evaluates `binding` and installs the result under `variable`,
    /// replacing any previous value. Returns the bound value.
    fn eval_set(&mut self, variable: &str, binding: &Expr) -> EvalResult<bool> {
        let value = self.eval(binding)?;
        trace!("set {variable} = {value}");
        self.define(variable, value);
        Ok(value)
    }

    /// Evaluates `body` with `variable` bound to the value of `binding`.
    ///
    /// Afterwards the variable is removed, whether or not the body succeeded.
    /// A binding of the same name that existed before is not restored.
    fn eval_let(&mut self, variable: &str, binding: &Expr, body: &Expr) -> EvalResult<bool> {
        let value = self.eval(binding)?;
        trace!("let {variable} = {value}");
        self.define(variable, value);
        let result = self.eval(body);
        self.remove(variable);
        trace!("let {variable} released");
        result
    }

    fn lookup(&self, name: &str) -> EvalResult<bool> {
        self.get(name)
            .ok_or_else(|| EvaluationError::UndefinedSymbol { name: name.to_string() })
    }

    /// Binds `name` to `value`, returning the value it replaced.
    pub fn define(&mut self, name: &str, value: bool) -> Option<bool> {
        self.bindings.insert(name.to_string(), value)
    }

    /// The value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.bindings.get(name).copied()
    }

    /// Removes the binding of `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<bool> {
        self.bindings.remove(name)
    }

    /// Whether `name` has a binding.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// All bindings, sorted by name.
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, bool)> {
        let mut bindings: Vec<(&str, bool)> =
            self.bindings.iter().map(|(name, value)| (name.as_str(), *value)).collect();
        bindings.sort_unstable_by_key(|(name, _)| *name);
        bindings
    }
}
