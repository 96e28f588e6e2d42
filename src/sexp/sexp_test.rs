use super::*;

use crate::primitive::ToSymbol;


#[test]
fn vec_into_sexp() {
    let expected = "(test ing)".parse::<Sexp>().unwrap();
    let v = vec!["test".to_symbol_or_panic(), "ing".to_symbol_or_panic()];
    assert_eq!(<Sexp>::from(v), expected);
}

#[test]
fn non_cons() {
    let s = "(1 2 3 . 4)".parse::<Sexp>().unwrap();
    let mut iter = s.iter();
    assert_eq!(iter.next().unwrap(), (&Sexp::from(1i64), true));
    assert_eq!(iter.next().unwrap(), (&Sexp::from(2i64), true));
    assert_eq!(iter.next().unwrap(), (&Sexp::from(3i64), true));
    assert_eq!(iter.next().unwrap(), (&Sexp::from(4i64), false));
    assert_eq!(iter.next(), None);
}

#[test]
fn display_lists() {
    let cases = [
        ("()", "()"),
        ("(1 2 3)", "(1 2 3)"),
        ("(1 (2 3) ())", "(1 (2 3) ())"),
        ("((a b) (c d))", "((a b) (c d))"),
        ("(1 . ())", "(1)"),
        ("(1 . (2 3))", "(1 2 3)"),
    ];
    for (input, expected) in cases.iter() {
        assert_eq!(input.parse::<Sexp>().unwrap().to_string(), *expected);
    }
}

#[test]
fn display_dotted_tails() {
    // Only an integer tail after an integer element keeps its dot.
    let cases = [
        ("(1 . 2)", "(1 . 2)"),
        ("(1 2 . 3)", "(1 2 . 3)"),
        ("(a . b)", "(a b)"),
        ("(a . 3)", "(a 3)"),
        ("(3 . a)", "(3 a)"),
        ("((1) . 2)", "((1) 2)"),
    ];
    for (input, expected) in cases.iter() {
        assert_eq!(input.parse::<Sexp>().unwrap().to_string(), *expected);
    }
}

#[test]
fn display_primitives() {
    assert_eq!(Sexp::from(-17i64).to_string(), "-17");
    assert_eq!(Sexp::boolean(true).to_string(), "#t");
    assert_eq!(Sexp::text("(1 2)").to_string(), "(1 2)");
}

#[test]
fn colored_keeps_structure() {
    colored::control::set_override(false);
    let s = "(1 (2 . 3))".parse::<Sexp>().unwrap();
    assert_eq!(s.colored().to_string(), "(1 (2 . 3))");
}

#[test]
fn is_false() {
    assert!(Sexp::boolean(false).is_false());
    assert!(!Sexp::boolean(true).is_false());
    assert!(!Sexp::from(0i64).is_false());
    assert!(!Sexp::default().is_false());
}

#[test]
fn long_lists() {
    let len = 1_000_000;
    let list = Sexp::from(vec![1i64; len]);
    let copy = list.clone();
    assert_eq!(copy, list);
    assert_eq!(copy.iter().count(), len);

    let mut shorter = vec![1i64; len - 1];
    assert_ne!(Sexp::from(shorter.clone()), list);
    shorter.push(2);
    assert_ne!(Sexp::from(shorter), list);

    let dotted = "(1 2 . 3)".parse::<Sexp>().unwrap();
    assert_eq!(dotted.clone(), dotted);
    assert_ne!(dotted, "(1 2 3)".parse::<Sexp>().unwrap());
    assert_eq!(format!("{:?}", dotted), "(1 2 . 3)");
}
