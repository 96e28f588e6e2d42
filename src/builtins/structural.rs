//! List accessors.
//!
//! Each takes its first argument as written, typically `(quote <datum>)`,
//! and inspects the datum in that form's argument position. The optional
//! second argument is an unevaluated integer literal.

use std::borrow::Cow;

use crate::function::{EvalErr, ExpectedCount, Ret};
use crate::primitive::Number;
use crate::sexp::{Cons, Sexp};


/// Datum inspected by an accessor: the first argument of the `arg` form.
///
/// None when `arg` is a list with nothing after its head.
fn datum(arg: &Sexp) -> Result<Option<&Sexp>, EvalErr> {
    match arg {
        Sexp::Cons(form) => Ok(match form.cdr() {
            Some(Sexp::Cons(rest)) => rest.car(),
            _ => None,
        }),
        _ => err!(InvalidArgument {
            given: arg.clone(),
            expected: Cow::Borrowed("a list form"),
        }),
    }
}

/// Non-empty list the datum must be for car and cdr.
fn pair_datum(arg: &Sexp) -> Result<&Cons, EvalErr> {
    match datum(arg)? {
        Some(Sexp::Cons(cons)) if !cons.is_empty() => Ok(cons),
        Some(other) => err!(InvalidArgument {
            given: other.clone(),
            expected: Cow::Borrowed("a non-empty list"),
        }),
        None => err!(InvalidArgument {
            given: Sexp::default(),
            expected: Cow::Borrowed("a non-empty list"),
        }),
    }
}

fn no_param(param: Option<&Sexp>) -> Result<(), EvalErr> {
    if param.is_some() {
        return err!(WrongArgumentCount {
            given: 2,
            expected: ExpectedCount::Exactly(1),
        });
    }
    Ok(())
}

fn index_param(param: Option<&Sexp>) -> Result<Number, EvalErr> {
    match param {
        Some(sexp) => match sexp.as_number() {
            Some(index) => Ok(index),
            None => err!(InvalidArgument {
                given: sexp.clone(),
                expected: Cow::Borrowed("an integer literal"),
            }),
        },
        None => err!(WrongArgumentCount {
            given: 1,
            expected: ExpectedCount::Exactly(2),
        }),
    }
}

fn out_of_range(index: Number, datum: Option<&Sexp>) -> EvalErr {
    EvalErr::IndexOutOfRange {
        index,
        given: datum.cloned().unwrap_or_default(),
    }
}

fn render(sexp: Option<&Sexp>) -> Sexp {
    Sexp::text(sexp.cloned().unwrap_or_default().to_string())
}


pub fn is_pair(arg: &Sexp, param: Option<&Sexp>) -> Ret {
    no_param(param)?;
    let pair = match arg {
        Sexp::Cons(_) => matches!(datum(arg)?, Some(Sexp::Cons(c)) if !c.is_empty()),
        _ => false,
    };
    Ok(Sexp::boolean(pair))
}

pub fn is_null(arg: &Sexp, param: Option<&Sexp>) -> Ret {
    no_param(param)?;
    let null = datum(arg)?.map_or(true, Sexp::is_none);
    Ok(Sexp::boolean(null))
}

/// Whether the datum is a chain of cons cells ending in the empty list.
pub fn is_list(arg: &Sexp, param: Option<&Sexp>) -> Ret {
    no_param(param)?;
    let proper = match arg {
        Sexp::Cons(_) => match datum(arg)? {
            Some(datum) => datum.iter().all(|(_, from_cons)| from_cons),
            None => true,
        },
        _ => false,
    };
    Ok(Sexp::boolean(proper))
}

pub fn car(arg: &Sexp, param: Option<&Sexp>) -> Ret {
    no_param(param)?;
    Ok(render(pair_datum(arg)?.car()))
}

/// Renders all but the head; a non-list remainder is rendered bare.
pub fn cdr(arg: &Sexp, param: Option<&Sexp>) -> Ret {
    no_param(param)?;
    Ok(render(pair_datum(arg)?.cdr()))
}

/// Element at a 0-based index.
///
/// A non-list tail ending the chain counts as its last element.
pub fn list_ref(arg: &Sexp, param: Option<&Sexp>) -> Ret {
    let index = index_param(param)?;
    let datum = datum(arg)?;
    if index < 0 {
        return Err(out_of_range(index, datum));
    }

    let element = datum.and_then(|list| list.iter().nth(index as usize));
    match element {
        Some((element, _)) => Ok(render(Some(element))),
        None => Err(out_of_range(index, datum)),
    }
}

/// What remains after dropping `k` elements; `k` of 0 is the whole datum.
///
/// A non-list tail ending the chain counts as one more element and, once
/// reached, is rendered inside parens: `(list-tail '(1 . 2) 1)` and
/// `(list-tail '(1 . 2) 2)` are both `(2)`.
pub fn list_tail(arg: &Sexp, param: Option<&Sexp>) -> Ret {
    let k = index_param(param)?;
    let datum = datum(arg)?;
    if k < 0 {
        return Err(out_of_range(k, datum));
    }

    let mut rest = datum;
    let mut tail_dropped = false;
    for _ in 0..k {
        rest = match rest {
            Some(Sexp::Cons(cons)) if !cons.is_empty() => cons.cdr(),
            Some(Sexp::Primitive(_)) if !tail_dropped => {
                tail_dropped = true;
                rest
            }
            _ => return Err(out_of_range(k, datum)),
        };
    }
    match rest {
        Some(tail @ Sexp::Primitive(_)) if k > 0 => Ok(Sexp::text(format!("({})", tail))),
        _ => Ok(render(rest)),
    }
}

#[cfg(test)]
#[path = "./structural_test.rs"]
mod structural_test;
