use crate::{
    ast::{Connective, Expr},
    interpreter::evaluator::core::{EvalResult, Environment},
};

impl Environment {
    /// Evaluates both operands, left then right, and combines them.
    ///
    /// There is no short-circuiting: side effects of the right operand, such
    /// as a `set`, always happen.
    ///
    /// # Errors
    /// Propagates the first error raised by either operand.
    pub fn eval_connective(&mut self,
                           connective: Connective,
                           left: &Expr,
                           right: &Expr)
                           -> EvalResult<bool> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Ok(Self::apply_connective(connective, left, right))
    }

    /// Applies the truth function of `connective`.
    ///
    /// # Example
    /// ```
    /// use proplisp::{ast::Connective, interpreter::evaluator::core::Environment};
    ///
    /// assert!(!Environment::apply_connective(Connective::Implies, true, false));
    /// assert!(Environment::apply_connective(Connective::Implies, false, false));
    /// assert!(Environment::apply_connective(Connective::Iff, false, false));
    /// ```
    #[must_use]
    pub const fn apply_connective(connective: Connective, left: bool, right: bool) -> bool {
        match connective {
            Connective::And => left && right,
            Connective::Or => left || right,
            Connective::Implies => !left || right,
            Connective::Iff => (left || !right) && (!left || right),
        }
    }
}
