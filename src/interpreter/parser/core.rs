use crate::{
    ast::{Connective, Expr},
    error::SyntaxError,
    interpreter::parser::operator::Operator,
    sexpr::SExpr,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Builds the logic expression denoted by a symbolic expression.
///
/// - `True` / `False` become boolean literals.
/// - The constants `1` and `0` become `true` and `false`; any other constant
///   becomes [`Expr::Null`].
/// - Symbols become variable references.
/// - Lists are operator forms, see [`build_list`].
/// - The empty list becomes [`Expr::Null`].
///
/// # Errors
/// Propagates every error of [`build_list`].
///
/// # Example
/// ```
/// use proplisp::{
///     ast::{Connective, Expr},
///     interpreter::parser::core::build,
///     sexpr::SExpr,
/// };
///
/// let sexpr = SExpr::list([SExpr::symbol("=>"), SExpr::constant(1.0), SExpr::symbol("x")]);
/// let expr = build(&sexpr).unwrap();
/// assert_eq!(expr, Expr::binary(Connective::Implies, Expr::Bool(true), Expr::reference("x")));
/// ```
pub fn build(sexpr: &SExpr) -> ParseResult<Expr> {
    match sexpr {
        SExpr::True => Ok(Expr::Bool(true)),
        SExpr::False => Ok(Expr::Bool(false)),
        SExpr::Constant(value) => Ok(build_constant(value.into_inner())),
        SExpr::Symbol(name) => Ok(Expr::reference(name.as_str())),
        SExpr::Pair { .. } => build_list(sexpr),
        SExpr::Empty => Ok(Expr::Null),
    }
}

/// Builds an operator form such as `(and x y)` or `((< = >) x y)`.
///
/// The first element names the operator, the rest are its terms. A list
/// holding a single element builds that element, which strips redundant
/// parentheses.
///
/// # Errors
/// - `NotAList` if `list` is not a proper list.
/// - `InvalidOperatorComponent` if the head is not a symbol or a list of
///   symbols.
/// - `IncorrectTermCount` if one to three terms follow an operator that does
///   not take that many.
/// - `UnknownOperator` for any other number of terms.
/// - `ExpectedSymbol` if `set` or `let` is not given a variable name.
pub fn build_list(list: &SExpr) -> ParseResult<Expr> {
    let elements = list.to_list()?;
    let Some((head, terms)) = elements.split_first() else {
        return Ok(Expr::Null);
    };
    if terms.is_empty() {
        return build(head);
    }

    let name = operator_name(head)?;
    if !(1..=3).contains(&terms.len()) {
        return Err(SyntaxError::UnknownOperator { operator: name });
    }
    let operator = match Operator::resolve(&name) {
        Some(op) if op.arity() == terms.len() => op,
        _ => {
            return Err(SyntaxError::IncorrectTermCount { operator: name,
                                                         terms:    terms.len(), });
        },
    };

    match (operator, terms) {
        (Operator::Not, [operand]) => Ok(Expr::not(build(operand)?)),
        (Operator::And, [left, right]) => build_binary(Connective::And, left, right),
        (Operator::Or, [left, right]) => build_binary(Connective::Or, left, right),
        (Operator::Implies, [left, right]) => build_binary(Connective::Implies, left, right),
        (Operator::Iff, [left, right]) => build_binary(Connective::Iff, left, right),
        (Operator::Set, [variable, binding]) => {
            let variable = binding_name(&name, variable)?;
            Ok(Expr::set(variable, build(binding)?))
        },
        (Operator::Let, [variable, binding, body]) => {
            let variable = binding_name(&name, variable)?;
            Ok(Expr::let_in(variable, build(binding)?, build(body)?))
        },
        _ => Err(SyntaxError::IncorrectTermCount { operator: name,
                                                   terms:    terms.len(), }),
    }
}

/// Spells out the operator in head position.
///
/// A symbol names the operator directly. A list of symbols is joined without
/// separators, so `(< = >)` names `<=>`.
///
/// # Errors
/// Returns `InvalidOperatorComponent` for any other head, or for a list with
/// a non-symbol element.
pub fn operator_name(head: &SExpr) -> ParseResult<String> {
    match head {
        SExpr::Symbol(name) => Ok(name.clone()),
        SExpr::Pair { .. } => head.to_list()?
                                  .into_iter()
                                  .map(|component| match component {
                                      SExpr::Symbol(name) => Ok(name.as_str()),
                                      other => {
                                          Err(SyntaxError::InvalidOperatorComponent {
                                              component: other.to_string(),
                                          })
                                      },
                                  })
                                  .collect(),
        other => Err(SyntaxError::InvalidOperatorComponent { component: other.to_string() }),
    }
}

fn build_binary(connective: Connective, left: &SExpr, right: &SExpr) -> ParseResult<Expr> {
    Ok(Expr::binary(connective, build(left)?, build(right)?))
}

fn binding_name(operator: &str, variable: &SExpr) -> ParseResult<String> {
    match variable {
        SExpr::Symbol(name) => Ok(name.clone()),
        other => Err(SyntaxError::ExpectedSymbol { operator: operator.to_string(),
                                                   found:    other.to_string(), }),
    }
}

#[allow(clippy::float_cmp)]
fn build_constant(value: f64) -> Expr {
    if value == 1.0 {
        Expr::Bool(true)
    } else if value == 0.0 {
        Expr::Bool(false)
    } else {
        Expr::Null
    }
}
