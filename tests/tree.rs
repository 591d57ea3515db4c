use exprcalc::{BinaryOperator, Expr, RuntimeError, evaluate, parse};
use pretty_assertions::assert_eq;

fn c(value: f64) -> Expr {
    Expr::constant(value)
}

/// A handful of trees of different shapes, all evaluating without error.
fn samples() -> Vec<Expr> {
    vec![c(0.0),
         c(-3.5),
         c(13.75),
         Expr::add(c(3.0), c(4.0)),
         Expr::multiply(c(2.0), Expr::add(c(3.0), c(4.0))),
         Expr::subtract(c(10.0), Expr::multiply(c(3.0), c(2.0))),
         Expr::divide(c(1.0), c(3.0)),
         Expr::negate(Expr::subtract(c(1.0), c(8.0))),
         Expr::subtract(c(1.0), Expr::subtract(c(2.0), c(3.0))),
         Expr::divide(Expr::negate(c(9.0)), Expr::add(c(0.5), c(0.25)))]
}

#[test]
fn constants_evaluate_to_themselves() {
    for value in [0.0, 1.0, -2.5, 13.75, 1e-300, f64::MAX] {
        assert_eq!(c(value).evaluate(), Ok(value));
    }
}

#[test]
fn binary_nodes_combine_their_children() {
    for a in samples() {
        for b in samples() {
            let x = a.evaluate().unwrap();
            let y = b.evaluate().unwrap();

            assert_eq!(Expr::add(a.clone(), b.clone()).evaluate(), Ok(x + y));
            assert_eq!(Expr::subtract(a.clone(), b.clone()).evaluate(), Ok(x - y));
            assert_eq!(Expr::multiply(a.clone(), b.clone()).evaluate(), Ok(x * y));

            let quotient = Expr::divide(a.clone(), b.clone()).evaluate();
            if y == 0.0 {
                assert_eq!(quotient, Err(RuntimeError::DivisionByZero));
            } else {
                assert_eq!(quotient, Ok(x / y));
            }
        }
    }
}

#[test]
fn negation_and_double_negation() {
    for a in samples() {
        let x = a.evaluate().unwrap();
        assert_eq!(Expr::negate(a.clone()).evaluate(), Ok(-x));
        assert_eq!(Expr::negate(Expr::negate(a)).evaluate(), Ok(x));
    }
}

#[test]
fn division_by_zero_aborts_the_whole_tree() {
    let tree = Expr::add(c(1.0),
                         Expr::multiply(c(2.0), Expr::divide(c(10.0), Expr::subtract(c(4.0), c(4.0)))));
    assert_eq!(tree.evaluate(), Err(RuntimeError::DivisionByZero));
    assert_eq!(evaluate(&tree), Err(RuntimeError::DivisionByZero));

    let tiny = Expr::divide(c(1.0), c(f64::MIN_POSITIVE));
    assert!(tiny.evaluate().is_ok());
}

#[test]
fn evaluation_is_repeatable() {
    for tree in samples() {
        let snapshot = tree.clone();
        let first = tree.evaluate();
        let second = tree.evaluate();
        assert_eq!(first, second);
        assert_eq!(tree, snapshot);
    }

    let failing = Expr::divide(c(1.0), c(0.0));
    assert_eq!(failing.evaluate(), failing.evaluate());
}

#[test]
fn binary_constructor_matches_named_constructors() {
    let ops = [BinaryOperator::Add,
               BinaryOperator::Sub,
               BinaryOperator::Mul,
               BinaryOperator::Div];
    for op in ops {
        let tree = Expr::binary(op, c(6.0), c(3.0));
        assert_eq!(tree.operator(), Some(op));
        assert_eq!(tree.operands(), Some((&c(6.0), &c(3.0))));
    }
    assert_eq!(Expr::negate(c(1.0)).operator(), None);
    assert_eq!(Expr::from(2.0), c(2.0));
}

#[test]
fn display_uses_minimal_parentheses() {
    assert_eq!(Expr::multiply(c(2.0), Expr::add(c(3.0), c(4.0))).to_string(),
               "2 * (3 + 4)");
    assert_eq!(Expr::add(c(13.75), Expr::multiply(c(22.0), c(15.0))).to_string(),
               "13.75 + 22 * 15");
    assert_eq!(Expr::subtract(c(1.0), Expr::subtract(c(2.0), c(3.0))).to_string(),
               "1 - (2 - 3)");
    assert_eq!(Expr::subtract(Expr::subtract(c(1.0), c(2.0)), c(3.0)).to_string(),
               "1 - 2 - 3");
    assert_eq!(Expr::multiply(Expr::negate(Expr::add(c(3.0), c(1.0))), c(2.0)).to_string(),
               "-(3 + 1) * 2");
    assert_eq!(Expr::negate(Expr::negate(c(4.0))).to_string(), "--4");
}

#[test]
fn display_reparses_to_the_same_value() {
    for tree in samples() {
        let text = tree.to_string();
        let reparsed = parse(&text).unwrap_or_else(|e| panic!("{text:?} failed to parse: {e}"));
        assert_eq!(reparsed.evaluate(), tree.evaluate(), "round trip of {text:?}");
    }
}

#[test]
fn non_finite_constants_print_but_do_not_reparse() {
    assert_eq!(Expr::constant(f64::INFINITY).to_string(), "inf");
    assert_eq!(Expr::add(c(1.0), Expr::constant(f64::NAN)).to_string(), "1 + NaN");
    assert!(parse("inf").is_err());
}
