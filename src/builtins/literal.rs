//! Procedures that take their arguments as written and return the rendered
//! text of what they build.

use super::elements;
use crate::function::{ExpectedCount, Ret};
use crate::sexp::{ConsList, HeapSexp, Sexp};


/// Renders its single argument; `(quote)` is the empty list.
pub fn quote(args: Option<&Sexp>) -> Ret {
    let args = elements(args)?;
    match args.as_slice() {
        [] => Ok(Sexp::text(Sexp::default().to_string())),
        [datum] => Ok(Sexp::text(datum.to_string())),
        _ => err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::AtMost(1),
        }),
    }
}

pub fn list(args: Option<&Sexp>) -> Ret {
    match args {
        Some(list) => {
            elements(Some(list))?;
            Ok(Sexp::text(list.to_string()))
        }
        None => Ok(Sexp::text(Sexp::default().to_string())),
    }
}

/// Renders the pair of its two arguments.
///
/// A list in second position extends the pair into a longer list.
pub fn cons(args: Option<&Sexp>) -> Ret {
    let args = elements(args)?;
    if let [car, cdr] = args.as_slice() {
        let mut pair = ConsList::new();
        pair.append((*car).clone());
        let pair = pair.release_with_tail(Some(HeapSexp::new((*cdr).clone())));
        return Ok(Sexp::text(pair.to_string()));
    }
    err!(WrongArgumentCount {
        given: args.len(),
        expected: ExpectedCount::Exactly(2),
    })
}


#[cfg(test)]
#[path = "./literal_test.rs"]
mod literal_test;
