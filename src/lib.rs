//! # proplisp
//!
//! proplisp is an interpreter for propositional logic written with a
//! lisp-flavored prefix syntax. A line of text is tokenized, read into a
//! generic symbolic-expression tree, built into a logic expression, and
//! evaluated against an environment of boolean variables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::core::Environment,
        lexer::TokenScanner,
        parser::core::build,
        reader::core::parse_one,
    },
    sexpr::SExpr,
};

/// Defines the logic expression tree.
///
/// This module declares the `Expr` enum built by the parser and walked by
/// the evaluator, along with the binary `Connective`s.
pub mod ast;
/// Provides the error types for reading, building and evaluation.
///
/// # Responsibilities
/// - Defines `SyntaxError` for everything detected before evaluation.
/// - Defines `EvaluationError` for failures while evaluating.
/// - Unifies both for callers that interpret whole lines.
pub mod error;
/// Orchestrates the stages of interpretation.
///
/// This module ties together the lexer, the reader, the parser and the
/// evaluator.
pub mod interpreter;
/// Defines the generic symbolic-expression tree.
///
/// This module declares the `SExpr` enum produced by the reader: constants,
/// symbols, booleans, pairs and the empty list.
pub mod sexpr;

/// Everything produced while interpreting one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    /// The symbolic expression read from the line.
    pub sexpr: SExpr,
    /// The logic expression built from it.
    pub expr:  Expr,
    /// The value it evaluated to.
    pub value: bool,
}

/// Interprets one line of input against `env`.
///
/// Bindings made with `set` stay in `env` for later lines.
///
/// # Errors
/// Returns [`Error::Syntax`] if the line cannot be read or built, and
/// [`Error::Evaluation`] if evaluation fails.
///
/// # Examples
/// ```
/// use proplisp::{interpret_line, interpreter::evaluator::core::Environment};
///
/// let mut env = Environment::new();
/// assert!(interpret_line("(set p (or F T))", &mut env).unwrap().value);
/// assert!(!interpret_line("(=> p (not p))", &mut env).unwrap().value);
/// assert!(interpret_line("(and q p)", &mut env).is_err());
/// ```
pub fn interpret_line(line: &str, env: &mut Environment) -> Result<Interpretation, Error> {
    let mut scanner = TokenScanner::new(line)?;
    let sexpr = parse_one(&mut scanner)?;
    debug!("read: {sexpr}");
    let expr = build(&sexpr)?;
    debug!("built: {expr}");
    let value = env.eval(&expr)?;
    debug!("value: {value}");

    Ok(Interpretation { sexpr, expr, value })
}

/// Whether a script line carries no expression: blank, or a `;` comment.
#[must_use]
pub fn is_skippable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with(';')
}

/// Returns the value of the last line of a script.
///
/// Every line is interpreted in order against one fresh environment; blank
/// lines and lines starting with `;` are skipped. The first failing line
/// stops the script.
///
/// # Errors
/// Returns an error if any line fails to read, build or evaluate.
///
/// # Examples
/// ```
/// use proplisp::get_result;
///
/// let source = "; persistent binding\n(set x T)\n(<=> x (not (not x)))";
/// assert_eq!(get_result(source, false).unwrap(), Some(true));
///
/// // `let` removes its variable afterwards.
/// let source = "(let y F (not y))\ny";
/// assert!(get_result(source, false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Option<bool>, Box<dyn std::error::Error>> {
    let mut env = Environment::new();
    let mut result = None;

    for line in source.lines().filter(|line| !is_skippable(line)) {
        let interpretation = interpret_line(line, &mut env)?;
        result = Some(interpretation.value);
    }

    if auto_print && let Some(v) = result {
        println!("{v}");
    }

    Ok(result)
}
