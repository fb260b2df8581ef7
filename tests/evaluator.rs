use proplisp::{
    ast::{Connective, Expr},
    error::EvaluationError,
    interpreter::evaluator::core::Environment,
};

fn t() -> Expr {
    Expr::Bool(true)
}

fn f() -> Expr {
    Expr::Bool(false)
}

fn eval(expr: &Expr) -> bool {
    let mut env = Environment::new();
    env.eval(expr)
       .unwrap_or_else(|e| panic!("{expr} failed: {e}"))
}

#[test]
fn connective_truth_tables() {
    let table = [(Connective::And, [true, false, false, false]),
                 (Connective::Or, [true, true, true, false]),
                 (Connective::Implies, [true, false, true, true]),
                 (Connective::Iff, [true, false, false, true])];
    let inputs = [(true, true), (true, false), (false, true), (false, false)];

    for (connective, expected) in table {
        for ((left, right), expected) in inputs.into_iter().zip(expected) {
            let expr = Expr::binary(connective, Expr::Bool(left), Expr::Bool(right));
            assert_eq!(eval(&expr), expected, "{expr}");
        }
    }
}

#[test]
fn negation() {
    assert!(!eval(&Expr::not(t())));
    assert!(eval(&Expr::not(f())));
    assert!(eval(&Expr::not(Expr::not(t()))));
}

#[test]
fn implication_from_false_is_true_for_any_consequent() {
    assert!(eval(&Expr::binary(Connective::Implies, f(), t())));
    assert!(eval(&Expr::binary(Connective::Implies, f(), f())));
    assert!(eval(&Expr::binary(Connective::Implies, f(), Expr::set("x", f()))));
}

#[test]
fn set_persists() {
    let mut env = Environment::new();
    assert_eq!(env.eval(&Expr::set("x", t())), Ok(true));
    assert_eq!(env.eval(&Expr::reference("x")), Ok(true));

    assert_eq!(env.eval(&Expr::set("x", Expr::not(Expr::reference("x")))), Ok(false));
    assert_eq!(env.get("x"), Some(false));
    assert_eq!(env.len(), 1);
}

#[test]
fn let_binds_only_for_its_body() {
    let mut env = Environment::new();
    let expr = Expr::let_in("x", t(), Expr::reference("x"));
    assert_eq!(env.eval(&expr), Ok(true));
    assert!(!env.is_defined("x"));
    assert!(env.is_empty());
}

#[test]
fn let_removes_rather_than_restores() {
    let mut env = Environment::new();
    env.define("x", true);

    let inner = Expr::let_in("x", f(), Expr::reference("x"));
    let outer = Expr::let_in("x", t(), Expr::binary(Connective::And, inner, Expr::reference("x")));

    assert_eq!(env.eval(&outer),
               Err(EvaluationError::UndefinedSymbol { name: "x".to_string() }));
    assert!(!env.is_defined("x"));
}

#[test]
fn let_removes_binding_when_body_fails() {
    let mut env = Environment::new();
    let expr = Expr::let_in("x", t(), Expr::Null);
    assert_eq!(env.eval(&expr), Err(EvaluationError::NullEvaluation));
    assert!(!env.is_defined("x"));
}

#[test]
fn set_inside_let_body_outlives_the_let() {
    let mut env = Environment::new();
    let expr = Expr::let_in("x", t(), Expr::set("y", Expr::not(Expr::reference("x"))));
    assert_eq!(env.eval(&expr), Ok(false));
    assert_eq!(env.bindings(), vec![("y", false)]);
}

#[test]
fn both_operands_are_always_evaluated() {
    let mut env = Environment::new();
    let expr = Expr::binary(Connective::Or, t(), Expr::set("x", f()));
    assert_eq!(env.eval(&expr), Ok(true));
    assert_eq!(env.get("x"), Some(false));

    let expr = Expr::binary(Connective::And, f(), Expr::set("y", t()));
    assert_eq!(env.eval(&expr), Ok(false));
    assert_eq!(env.get("y"), Some(true));
}

#[test]
fn left_operand_is_evaluated_first() {
    let mut env = Environment::new();
    let expr = Expr::binary(Connective::Iff, Expr::set("x", t()), Expr::reference("x"));
    assert_eq!(env.eval(&expr), Ok(true));

    let mut env = Environment::new();
    let expr = Expr::binary(Connective::Iff, Expr::reference("x"), Expr::set("x", t()));
    assert_eq!(env.eval(&expr),
               Err(EvaluationError::UndefinedSymbol { name: "x".to_string() }));
    assert!(env.is_empty());
}

#[test]
fn undefined_reference_is_error() {
    let mut env = Environment::new();
    assert_eq!(env.eval(&Expr::reference("y")),
               Err(EvaluationError::UndefinedSymbol { name: "y".to_string() }));
    assert_eq!(EvaluationError::UndefinedSymbol { name: "y".to_string() }.to_string(),
               "Evaluation error: undefined symbol: y");
}

#[test]
fn null_is_never_evaluated() {
    let mut env = Environment::new();
    assert_eq!(env.eval(&Expr::Null), Err(EvaluationError::NullEvaluation));
    assert_eq!(env.eval(&Expr::not(Expr::Null)), Err(EvaluationError::NullEvaluation));
    assert_eq!(EvaluationError::NullEvaluation.to_string(),
               "Evaluation error: attempted null evaluation");
}

#[test]
fn environment_bookkeeping() {
    let mut env = Environment::new();
    assert_eq!(env.define("b", true), None);
    assert_eq!(env.define("a", false), None);
    assert_eq!(env.define("b", false), Some(true));
    assert_eq!(env.bindings(), vec![("a", false), ("b", false)]);
    assert_eq!(env.remove("a"), Some(false));
    assert_eq!(env.remove("a"), None);
    env.clear();
    assert!(env.is_empty());
}
