use super::*;

use crate::primitive::{Primitive as Prim, ToSymbol};
use Token::*;

fn sym(s: &str) -> Token {
    Token::Primitive(Prim::Symbol(s.to_symbol_or_panic()))
}

fn int(i: i64) -> Token {
    Token::Primitive(Prim::Number(i))
}

fn tokens(input: &str) -> Vec<Token> {
    tokenize(input)
        .unwrap()
        .into_iter()
        .map(TokenInfo::into_token)
        .collect()
}

fn nest(mut v: Vec<Token>) -> Vec<Token> {
    v.insert(0, LeftParen);
    v.push(RightParen);
    v
}

#[test]
fn nested() {
    let input = "(testing (this (out)))";
    let mut expected = nest(vec![sym("out")]);
    expected.insert(0, sym("this"));
    expected = nest(expected);
    expected.insert(0, sym("testing"));
    expected = nest(expected);

    assert_eq!(tokens(input), expected);
}

#[test]
fn newlines() {
    let input = "\n(testing\n\n (\nthis (out))\n)";
    let mut expected = nest(vec![sym("out")]);
    expected.insert(0, sym("this"));
    expected = nest(expected);
    expected.insert(0, sym("testing"));
    expected = nest(expected);

    assert_eq!(tokens(input), expected);
}

#[test]
fn ints() {
    let input = "(1 2 -4 33 +128)";
    let expected = nest(vec![int(1), int(2), int(-4), int(33), int(128)]);
    assert_eq!(tokens(input), expected);
}

#[test]
fn signs() {
    assert_eq!(tokens("(- 5)"), nest(vec![sym("-"), int(5)]));
    assert_eq!(tokens("+ -"), vec![sym("+"), sym("-")]);
    // A sign followed by anything but a digit stands alone.
    assert_eq!(tokens("-a"), vec![sym("-"), sym("a")]);
    assert_eq!(tokens("- 3"), vec![sym("-"), int(3)]);
}

#[test]
fn maximal_munch() {
    assert_eq!(tokens("list-ref"), vec![sym("list-ref")]);
    assert_eq!(tokens("null?"), vec![sym("null?")]);
    assert_eq!(tokens(">=<="), vec![sym(">=<=")]);
    assert_eq!(tokens("a1b2"), vec![sym("a1b2")]);
    assert_eq!(tokens("12abc"), vec![int(12), sym("abc")]);
    assert_eq!(tokens("a+b"), vec![sym("a"), sym("+"), sym("b")]);
    assert_eq!(tokens("#t#f"), vec![sym("#t#f")]);
}

#[test]
fn punctuation() {
    assert_eq!(
        tokens("'(1 . 2)"),
        vec![Quote, LeftParen, int(1), Period, int(2), RightParen]
    );
    assert_eq!(tokens("(a.b)"), nest(vec![sym("a"), Period, sym("b")]));
}

#[test]
fn positions() {
    let infos = tokenize("(car\n  x)").unwrap();
    let positions: Vec<(usize, usize)> =
        infos.iter().map(|t| (*t.line(), *t.col())).collect();
    assert_eq!(positions, vec![(1, 1), (1, 2), (2, 3), (2, 4)]);
}

#[test]
fn lazy_advance() {
    let mut tokenizer = Tokenizer::new("  (1)  ").unwrap();
    assert_eq!(*tokenizer.current().token(), LeftParen);
    assert!(!tokenizer.is_end());
    tokenizer.advance().unwrap();
    assert_eq!(*tokenizer.current().token(), int(1));
    tokenizer.advance().unwrap();
    assert_eq!(*tokenizer.current().token(), RightParen);
    tokenizer.advance().unwrap();
    assert!(tokenizer.is_end());
    // Further advances stay at the end.
    tokenizer.advance().unwrap();
    assert!(tokenizer.is_end());
}

#[test]
fn empty_input() {
    assert!(Tokenizer::new("").unwrap().is_end());
    assert!(Tokenizer::new(" \n\t ").unwrap().is_end());
}

#[test]
fn invalid_chars() {
    let err = tokenize("(1 \"two\")").unwrap_err();
    assert_eq!(*err.kind(), TokenizeErrorKind::UnexpectedChar('"'));
    assert_eq!((err.line(), err.col()), (1, 4));

    let err = tokenize("a ?b").unwrap_err();
    assert_eq!(*err.kind(), TokenizeErrorKind::UnexpectedChar('?'));
}

#[test]
fn integer_overflow() {
    let err = tokenize("99999999999999999999").unwrap_err();
    assert_eq!(
        *err.kind(),
        TokenizeErrorKind::IntegerOverflow("99999999999999999999".to_string())
    );
    assert_eq!(tokens("-9223372036854775808"), vec![int(i64::MIN)]);
}

#[test]
fn iterator_stops_after_error() {
    let mut tokenizer = Tokenizer::new("(1 $ 2)").unwrap();
    assert_eq!(tokenizer.next().unwrap().unwrap().into_token(), LeftParen);
    let err = tokenizer.next().unwrap().unwrap_err();
    assert_eq!(*err.kind(), TokenizeErrorKind::UnexpectedChar('$'));
    assert!(tokenizer.next().is_none());
}

#[test]
fn advance_and_iteration_agree() {
    let input = "(a . (-1 +))";
    let mut stepped = Vec::new();
    let mut tokenizer = Tokenizer::new(input).unwrap();
    while !tokenizer.is_end() {
        stepped.push(tokenizer.current().clone().into_token());
        tokenizer.advance().unwrap();
    }

    let iterated: Vec<Token> = Tokenizer::new(input)
        .unwrap()
        .map(|info| info.unwrap().into_token())
        .collect();
    assert_eq!(stepped, iterated);
    assert_eq!(stepped.len(), 8);
}
