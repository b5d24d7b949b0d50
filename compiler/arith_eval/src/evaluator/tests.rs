use super::*;
use crate::{ArithError, Matrix};
use arith_ir::{Span, TreeBuilder};
use arith_parse::parse_source;
use pretty_assertions::assert_eq;

fn tree_of(source: &str, interner: &StringInterner) -> ParseTree {
    parse_source(source, interner).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}"))
}

fn eval_line<V: Value>(
    source: &str,
    env: &mut Environment<V>,
    interner: &StringInterner,
) -> Result<Outcome<V>, EvalError<V::Error>> {
    evaluate(&tree_of(source, interner), env, interner)
}

fn eval_int(source: &str) -> Result<Outcome<i64>, EvalError<ArithError>> {
    let interner = StringInterner::new();
    eval_line(source, &mut Environment::new(), &interner)
}

/// Every node under `id`, `id` included.
fn subtree(tree: &ParseTree, id: NodeId) -> Vec<NodeId> {
    let mut out = vec![id];
    for &child in tree.children(id) {
        out.extend(subtree(tree, child));
    }
    out
}

fn assert_unsupported<E: std::fmt::Debug>(result: Result<Outcome<i64>, EvalError<E>>, rule: &str) {
    match result {
        Err(EvalError::UnsupportedConstruct { rule: got, .. }) => assert_eq!(got, rule),
        other => panic!("expected unsupported {rule}, got {other:?}"),
    }
}

#[test]
fn test_return_literal() {
    assert_eq!(eval_int("return 2"), Ok(Outcome::Returned(2)));
}

#[test]
fn test_assignment_binds_target() {
    let interner = StringInterner::new();
    let mut env = Environment::new();
    let outcome = eval_line("a = 2", &mut env, &interner);
    let a = interner.intern("a");
    assert_eq!(outcome, Ok(Outcome::Assigned { name: a, value: 2_i64 }));
    assert_eq!(env.lookup(a), Some(&2));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_return_leaves_environment_alone() {
    let interner = StringInterner::new();
    let mut env = Environment::new();
    env.bind(interner.intern("b"), 5_i64);
    let before = env.clone();
    assert_eq!(
        eval_line("return b + 1", &mut env, &interner),
        Ok(Outcome::Returned(6))
    );
    assert_eq!(env, before);
}

#[test]
fn test_left_folds() {
    assert_eq!(eval_int("return 3-1-1"), Ok(Outcome::Returned(1)));
    assert_eq!(eval_int("return 8/2/2"), Ok(Outcome::Returned(2)));
    assert_eq!(eval_int("return 3+1-1+2-1"), Ok(Outcome::Returned(4)));
}

#[test]
fn test_precedence_follows_nesting() {
    assert_eq!(eval_int("return 1+2*3"), Ok(Outcome::Returned(7)));
    assert_eq!(eval_int("return (1+2)*3"), Ok(Outcome::Returned(9)));
    assert_eq!(eval_int("return 2*3-8/4"), Ok(Outcome::Returned(4)));
}

#[test]
fn test_parentheses_unwrap() {
    assert_eq!(eval_int("return (1+1)+(1+1)"), Ok(Outcome::Returned(4)));
    assert_eq!(eval_int("return ((((7))))"), Ok(Outcome::Returned(7)));
}

#[test]
fn test_rhs_reads_old_binding() {
    let interner = StringInterner::new();
    let mut env = Environment::new();
    let a = interner.intern("a");
    env.bind(a, 2_i64);
    eval_line("a = a * 2", &mut env, &interner).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(env.lookup(a), Some(&4));
}

#[test]
fn test_assignment_target_is_not_looked_up() {
    let interner = StringInterner::new();
    let tree = tree_of("fresh = 1 + 2", &interner);
    let mut env: Environment<i64> = Environment::new();
    let mut ctx = EvaluationContext::new(&tree, &mut env, &interner);
    assert!(matches!(ctx.evaluate(), Ok(Outcome::Assigned { value: 3, .. })));

    let attributes = ctx.into_attributes();
    let [target, _eq, value] = *tree.children(tree.root()) else {
        panic!("not an assignment: {}", tree.dump(&interner));
    };
    for id in subtree(&tree, target) {
        assert!(!attributes.is_recorded(id), "target node {id:?} has a value");
    }
    assert_eq!(attributes.get(value), Some(&3));
    assert!(!attributes.is_recorded(tree.root()));
}

#[test]
fn test_attributes_recorded_bottom_up() {
    let interner = StringInterner::new();
    let tree = tree_of("return (1+2)*3", &interner);
    let mut env: Environment<i64> = Environment::new();
    let mut ctx = EvaluationContext::new(&tree, &mut env, &interner);
    assert_eq!(ctx.evaluate(), Ok(Outcome::Returned(9)));

    let attributes = ctx.attributes();
    for id in subtree(&tree, tree.root()) {
        let is_token = matches!(tree.kind(id), NodeKind::Token(_));
        assert_eq!(attributes.is_recorded(id), !is_token, "{id:?}");
    }
    assert_eq!(attributes.get(tree.root()), Some(&9));
    // Three literal chains of five, the parenthesized atom with its signed
    // atom and factor, the outer term, both expressions and the root.
    assert_eq!(attributes.recorded_count(), 21);
}

#[test]
fn test_unresolved_variable() {
    assert_eq!(
        eval_int("return x"),
        Err(EvalError::UnresolvedVariable {
            name: "x".to_owned(),
            span: Span::new(7, 8),
        })
    );
}

#[test]
fn test_failed_assignment_keeps_environment() {
    let interner = StringInterner::new();
    let mut env = Environment::new();
    let a = interner.intern("a");
    env.bind(a, 1_i64);
    let result = eval_line("a = missing + 1", &mut env, &interner);
    assert!(matches!(result, Err(EvalError::UnresolvedVariable { .. })));
    assert_eq!(env.lookup(a), Some(&1));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_division_by_zero_is_propagated() {
    assert_eq!(
        eval_int("return 1/0"),
        Err(EvalError::Arithmetic {
            error: ArithError::DivisionByZero,
            span: Span::new(7, 10),
        })
    );
}

#[test]
fn test_division_follows_value_type() {
    let interner = StringInterner::new();
    assert_eq!(eval_int("return 7/2"), Ok(Outcome::Returned(3)));
    assert_eq!(
        eval_line("return 7/2", &mut Environment::<f64>::new(), &interner),
        Ok(Outcome::Returned(3.5))
    );
}

#[test]
fn test_matrix_broadcast() {
    let interner = StringInterner::new();
    let mut env = Environment::new();
    let b = Matrix::from_rows(&[[1.0, 3.0], [2.0, 4.0]]).unwrap_or_else(|e| panic!("{e}"));
    env.bind(interner.intern("b"), b);
    let expected = Matrix::from_rows(&[[2.0, 6.0], [4.0, 8.0]]).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        eval_line("return 2*b", &mut env, &interner),
        Ok(Outcome::Returned(expected))
    );
}

#[test]
fn test_invalid_literal() {
    assert_eq!(
        eval_int("return 1.5"),
        Err(EvalError::InvalidLiteral {
            text: "1.5".to_owned(),
            span: Span::new(7, 10),
        })
    );
    assert!(matches!(
        eval_int("return 99999999999999999999"),
        Err(EvalError::InvalidLiteral { .. })
    ));
}

#[test]
fn test_sign_prefix_unsupported() {
    assert_unsupported(eval_int("return -1"), "signedAtom");
    assert_unsupported(eval_int("return 2 * +3"), "signedAtom");
}

#[test]
fn test_exponent_unsupported() {
    assert_unsupported(eval_int("return 2^3"), "factor");
}

#[test]
fn test_non_variable_target_unsupported() {
    for source in ["1+a = 2", "(a) = 2", "3 = 2", "a*b = 1"] {
        assert_unsupported(eval_int(source), "equation");
    }
    match eval_int("1+a = 2") {
        Err(EvalError::UnsupportedConstruct { detail, span, .. }) => {
            assert_eq!(detail, "cannot assign to `1+a`");
            assert_eq!(span, Span::new(0, 3));
        }
        other => panic!("{other:?}"),
    }
}

/// `1 +` with nothing after the operator, which the parser never builds.
#[test]
fn test_dangling_operator_unsupported() {
    let interner = StringInterner::new();
    let one = interner.intern("1");
    let mut b = TreeBuilder::new();
    let ret = b.leaf(NodeKind::Token(TokenKind::Return), Span::new(0, 6));
    let lit = b.leaf(NodeKind::Scientific(one), Span::new(7, 8));
    let atom = b.node(NodeKind::Atom, &[lit]);
    let signed = b.node(NodeKind::SignedAtom, &[atom]);
    let factor = b.node(NodeKind::Factor, &[signed]);
    let term = b.node(NodeKind::Term, &[factor]);
    let plus = b.leaf(NodeKind::Token(TokenKind::Plus), Span::new(9, 10));
    let expr = b.node(NodeKind::Expression, &[term, plus]);
    let root = b.node(NodeKind::Equation, &[ret, expr]);
    let tree = b.finish(root);

    let result = evaluate::<i64>(&tree, &mut Environment::new(), &interner);
    assert_unsupported(result, "expression");
}

/// A `*` inside an expression chain belongs to the term rule.
#[test]
fn test_wrong_level_operator_unsupported() {
    let interner = StringInterner::new();
    let one = interner.intern("1");
    let mut b = TreeBuilder::new();
    let ret = b.leaf(NodeKind::Token(TokenKind::Return), Span::new(0, 6));
    let term_of = |b: &mut TreeBuilder, at: u32| {
        let lit = b.leaf(NodeKind::Scientific(one), Span::new(at, at + 1));
        let atom = b.node(NodeKind::Atom, &[lit]);
        let signed = b.node(NodeKind::SignedAtom, &[atom]);
        let factor = b.node(NodeKind::Factor, &[signed]);
        b.node(NodeKind::Term, &[factor])
    };
    let lhs = term_of(&mut b, 7);
    let star = b.leaf(NodeKind::Token(TokenKind::Star), Span::new(8, 9));
    let rhs = term_of(&mut b, 9);
    let expr = b.node(NodeKind::Expression, &[lhs, star, rhs]);
    let root = b.node(NodeKind::Equation, &[ret, expr]);
    let tree = b.finish(root);

    match evaluate::<i64>(&tree, &mut Environment::new(), &interner) {
        Err(EvalError::UnsupportedConstruct { rule, detail, span }) => {
            assert_eq!(rule, "expression");
            assert_eq!(detail, "`*` is not an operator here");
            assert_eq!(span, Span::new(8, 9));
        }
        other => panic!("{other:?}"),
    }
}

#[test]
fn test_root_must_be_equation() {
    let interner = StringInterner::new();
    let mut b = TreeBuilder::new();
    let lit = b.leaf(NodeKind::Scientific(interner.intern("1")), Span::new(0, 1));
    let atom = b.node(NodeKind::Atom, &[lit]);
    let tree = b.finish(atom);
    assert_unsupported(
        evaluate::<i64>(&tree, &mut Environment::new(), &interner),
        "atom",
    );
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 5000;
    let source = format!("return {}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval_int(&source), Ok(Outcome::Returned(1)));
}

#[test]
fn test_deeply_parenthesized_target_unsupported() {
    let depth = 20_000;
    let source = format!("{}a{} = 1", "(".repeat(depth), ")".repeat(depth));
    match eval_int(&source) {
        Err(EvalError::UnsupportedConstruct { rule, detail, span }) => {
            assert_eq!(rule, "equation");
            assert_eq!(detail, format!("cannot assign to `{}`", &source[..2 * depth + 1]));
            assert_eq!(span, Span::new(0, 40_001));
        }
        other => panic!("{other:?}"),
    }
}

#[test]
fn test_outcome_into_returned() {
    assert_eq!(Outcome::Returned(3_i64).into_returned(), Some(3));
    let assigned = Outcome::Assigned {
        name: arith_ir::Name::EMPTY,
        value: 3_i64,
    };
    assert_eq!(assigned.into_returned(), None);
}
