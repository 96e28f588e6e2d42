use super::*;

use crate::function::EvalErr;
use crate::parser::parse;
use crate::primitive::Symbol;

fn eval_str(input: &str) -> Ret {
    eval(&parse(input).unwrap())
}

fn num(n: i64) -> Ret {
    Ok(Sexp::from(n))
}

fn text(s: &str) -> Ret {
    Ok(Sexp::text(s))
}

#[test]
fn self_evaluating() {
    assert_eq!(eval_str("42"), num(42));
    assert_eq!(eval_str("#t"), Ok(Sexp::boolean(true)));
    assert_eq!(eval_str("#f"), Ok(Sexp::boolean(false)));
    assert_eq!(
        eval_str("x"),
        Err(EvalErr::UnexpectedSymbol(Symbol::from_text("x")))
    );
}

#[test]
fn invalid_forms() {
    assert!(matches!(eval_str("()"), Err(EvalErr::InvalidSexp(_))));
    assert!(matches!(eval_str("(1 2)"), Err(EvalErr::InvalidSexp(_))));
    assert!(matches!(eval_str("((+) 2)"), Err(EvalErr::InvalidSexp(_))));
    assert_eq!(
        eval_str("(foo 1)"),
        Err(EvalErr::UnknownProcedure(Symbol::from_text("foo")))
    );
    assert!(matches!(eval_str("(+ 1 . 2)"), Err(EvalErr::InvalidSexp(_))));
}

#[test]
fn nested_evaluation() {
    assert_eq!(eval_str("(+ 1 (* 2 3) (- 10 4))"), num(13));
    assert_eq!(eval_str("(max (abs -9) (min 4 5))"), num(9));
    assert_eq!(eval_str("(not (> 1 2))"), Ok(Sexp::boolean(true)));
    assert_eq!(eval_str("(number? 1 (+ 2 3))"), Ok(Sexp::boolean(true)));
}

#[test]
fn arguments_are_evaluated_before_the_call() {
    assert_eq!(
        eval_str("(+ 1 undefined)"),
        Err(EvalErr::UnexpectedSymbol(Symbol::from_text("undefined")))
    );
    // The argument's error wins over the call's own arity check.
    assert!(matches!(eval_str("(abs (foo))"), Err(EvalErr::UnknownProcedure(_))));
}

#[test]
fn literal_forms_skip_evaluation() {
    assert_eq!(eval_str("'(1 2 3)"), text("(1 2 3)"));
    assert_eq!(eval_str("(quote undefined)"), text("undefined"));
    assert_eq!(eval_str("(list 1 (+ 1 1) x)"), text("(1 (+ 1 1) x)"));
    assert_eq!(eval_str("(cons 1 2)"), text("(1 . 2)"));
}

#[test]
fn or_short_circuits() {
    assert_eq!(eval_str("(or #f 5 undefined)"), num(5));
    assert_eq!(eval_str("(or #f #f)"), Ok(Sexp::boolean(false)));
    assert_eq!(eval_str("(or)"), Ok(Sexp::boolean(false)));
    assert_eq!(eval_str("(or #f (+ 1 1))"), num(2));
    assert!(eval_str("(or #f undefined 5)").is_err());
}

#[test]
fn and_short_circuits() {
    assert_eq!(eval_str("(and 1 2 #f)"), Ok(Sexp::boolean(false)));
    assert_eq!(eval_str("(and 1 #f undefined)"), Ok(Sexp::boolean(false)));
    assert_eq!(eval_str("(and 1 2 3)"), num(3));
    assert_eq!(eval_str("(and)"), Ok(Sexp::boolean(true)));
    assert!(eval_str("(and 1 undefined #f)").is_err());
}

#[test]
fn accessors_take_raw_arguments() {
    assert_eq!(eval_str("(car '(1 2 3))"), text("1"));
    assert_eq!(eval_str("(cdr '(1 2 3))"), text("(2 3)"));
    assert_eq!(eval_str("(list-ref '(1 2 3) 1)"), text("2"));
    assert_eq!(eval_str("(list-tail '(1 2 3) 1)"), text("(2 3)"));
    assert_eq!(eval_str("(null? '())"), Ok(Sexp::boolean(true)));

    assert_eq!(
        eval_str("(car)"),
        Err(EvalErr::WrongArgumentCount {
            given: 0,
            expected: ExpectedCount::AtLeast(1),
        })
    );
    assert_eq!(
        eval_str("(list-ref '(1 2) 0 1)"),
        Err(EvalErr::WrongArgumentCount {
            given: 3,
            expected: ExpectedCount::AtMost(2),
        })
    );
}

#[test]
fn depth_limit() {
    let mut form = Sexp::from(1i64);
    for _ in 0..MAX_EVAL_DEPTH + 1 {
        form = list!(Symbol::from_text("+"), form);
    }
    assert_eq!(eval(&form), Err(EvalErr::DepthOverflow(MAX_EVAL_DEPTH)));

    let mut form = Sexp::from(1i64);
    for _ in 0..MAX_EVAL_DEPTH {
        form = list!(Symbol::from_text("+"), form);
    }
    assert_eq!(eval(&form), num(1));
}
