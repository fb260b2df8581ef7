use proplisp::{
    ast::{Connective, Expr},
    error::SyntaxError,
    interpreter::{
        lexer::TokenScanner,
        parser::{
            core::{build, operator_name},
            operator::Operator,
        },
        reader::core::parse_one,
    },
    sexpr::SExpr,
};

fn parse(src: &str) -> Result<Expr, SyntaxError> {
    let mut scanner = TokenScanner::new(src)?;
    let sexpr = parse_one(&mut scanner)?;
    build(&sexpr)
}

fn assert_builds(src: &str, expected: &Expr) {
    match parse(src) {
        Ok(expr) => assert_eq!(&expr, expected, "{src}"),
        Err(e) => panic!("{src} failed to build: {e}"),
    }
}

fn and(left: Expr, right: Expr) -> Expr {
    Expr::binary(Connective::And, left, right)
}

#[test]
fn atoms_build_directly() {
    assert_builds("T", &Expr::Bool(true));
    assert_builds("false", &Expr::Bool(false));
    assert_builds("1", &Expr::Bool(true));
    assert_builds("0", &Expr::Bool(false));
    assert_builds("p", &Expr::reference("p"));
    assert_builds("", &Expr::Null);
}

#[test]
fn constants_other_than_one_and_zero_build_null() {
    assert_builds("2", &Expr::Null);
    assert_builds("0.5", &Expr::Null);
    assert_builds("(not 3)", &Expr::not(Expr::Null));
}

#[test]
fn and_aliases_build_identical_nodes() {
    let expected = and(Expr::Bool(true), Expr::Bool(false));
    for src in ["(and true false)",
                "(K true false)",
                "(& true false)",
                "([*] true false)",
                "((and) T F)",
                "(K T 0)"]
    {
        assert_builds(src, &expected);
    }
}

#[test]
fn every_operator() {
    let p = || Expr::reference("p");
    let q = || Expr::reference("q");

    assert_builds("(~ p)", &Expr::not(p()));
    assert_builds("(A p q)", &Expr::binary(Connective::Or, p(), q()));
    assert_builds("(=> p q)", &Expr::binary(Connective::Implies, p(), q()));
    assert_builds("(<=> p q)", &Expr::binary(Connective::Iff, p(), q()));
    assert_builds("((< = >) p q)", &Expr::binary(Connective::Iff, p(), q()));
    assert_builds("(set p q)", &Expr::set("p", q()));
    assert_builds("(let p T (and p q))", &Expr::let_in("p", Expr::Bool(true), and(p(), q())));
}

#[test]
fn redundant_parentheses_are_stripped() {
    assert_builds("((and T F))", &and(Expr::Bool(true), Expr::Bool(false)));
    assert_builds("(not (p))", &Expr::not(Expr::reference("p")));
    assert_builds("(((T)))", &Expr::Bool(true));
}

#[test]
fn term_count_errors() {
    assert_eq!(parse("(not true false)"),
               Err(SyntaxError::IncorrectTermCount { operator: "not".to_string(),
                                                     terms:    2, }));
    assert_eq!(parse("(and T)"),
               Err(SyntaxError::IncorrectTermCount { operator: "and".to_string(),
                                                     terms:    1, }));
    assert_eq!(parse("(let x true)"),
               Err(SyntaxError::IncorrectTermCount { operator: "let".to_string(),
                                                     terms:    2, }));
    assert_eq!(parse("(set x T F)"),
               Err(SyntaxError::IncorrectTermCount { operator: "set".to_string(),
                                                     terms:    3, }));
    assert_eq!(parse("(or a b c d)"),
               Err(SyntaxError::UnknownOperator { operator: "or".to_string() }));
}

#[test]
fn aliases_are_case_sensitive() {
    assert_eq!(parse("(AND T F)"),
               Err(SyntaxError::IncorrectTermCount { operator: "AND".to_string(),
                                                     terms:    2, }));
    assert_eq!(parse("(k T F)"),
               Err(SyntaxError::IncorrectTermCount { operator: "k".to_string(),
                                                     terms:    2, }));
}

#[test]
fn binding_operators_need_a_symbol() {
    assert_eq!(parse("(set (x) T)"),
               Err(SyntaxError::ExpectedSymbol { operator: "set".to_string(),
                                                 found:    "List(Symbol(x))".to_string(), }));
    assert_eq!(parse("(let 1 T T)"),
               Err(SyntaxError::ExpectedSymbol { operator: "let".to_string(),
                                                 found:    "Constant(1)".to_string(), }));
}

#[test]
fn operator_position_must_hold_symbols() {
    assert_eq!(parse("((< 1 >) p q)"),
               Err(SyntaxError::InvalidOperatorComponent { component: "Constant(1)".to_string() }));
    assert_eq!(parse("(T p q)"),
               Err(SyntaxError::InvalidOperatorComponent { component: "True".to_string() }));
    assert_eq!(operator_name(&SExpr::list([SExpr::symbol("["), SExpr::symbol("*"), SExpr::symbol("]")])),
               Ok("[*]".to_string()));
}

#[test]
fn operator_table() {
    for op in Operator::ALL {
        for alias in op.aliases() {
            assert_eq!(Operator::resolve(alias), Some(op), "{alias}");
        }
    }
    assert_eq!(Operator::Not.arity(), 1);
    assert_eq!(Operator::Set.arity(), 2);
    assert_eq!(Operator::Let.arity(), 3);
    assert_eq!(Operator::resolve("xor"), None);
}

#[test]
fn display_shows_nesting() {
    let expr = parse("(let x (or T F) (=> x (not y)))").unwrap();
    assert_eq!(expr.to_string(),
               "Let(x, Or(BoolLiteral(true), BoolLiteral(false)), \
                Implies(Reference(x), Not(Reference(y))))");
    assert_eq!(parse("(set z (<=> 1 0))").unwrap().to_string(),
               "Set(z, Iff(BoolLiteral(true), BoolLiteral(false)))");
    assert_eq!(parse("(and 2 T)").unwrap().to_string(), "And(Null, BoolLiteral(true))");
}

#[test]
fn binary_nodes_split_into_connective_and_operands() {
    let expr = parse("(|| p F)").unwrap();
    assert_eq!(expr.as_binary(),
               Some((Connective::Or, &Expr::reference("p"), &Expr::Bool(false))));
    assert_eq!(Expr::not(Expr::Bool(true)).as_binary(), None);
    assert!(Expr::Null.is_null());
}
