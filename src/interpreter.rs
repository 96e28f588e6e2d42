//! Tree-walking evaluation of parsed S-exps.

use log::trace;

use crate::builtins::{self, elements};
use crate::function::{Args, EvalErr, ExpectedCount, Ret};
use crate::primitive::{Calling, Junction, Primitive};
use crate::sexp::Sexp;

/// Calls nested deeper than this fail rather than exhaust the stack.
///
/// Only reachable through trees built by hand; the parser's own limit is
/// lower.
pub const MAX_EVAL_DEPTH: usize = 512;


pub fn eval(form: &Sexp) -> Ret {
    eval_at(form, 0)
}

fn eval_at(form: &Sexp, depth: usize) -> Ret {
    if depth > MAX_EVAL_DEPTH {
        return err!(DepthOverflow(MAX_EVAL_DEPTH));
    }

    let cons = match form {
        Sexp::Primitive(Primitive::Number(_)) => return Ok(form.clone()),
        Sexp::Primitive(Primitive::Symbol(symbol)) => {
            if symbol.is_boolean() {
                return Ok(form.clone());
            }
            return err!(UnexpectedSymbol(symbol.clone()));
        }
        Sexp::Cons(cons) => cons,
    };

    let head = match cons.car() {
        Some(Sexp::Primitive(Primitive::Symbol(head))) => head,
        _ => return err!(InvalidSexp(form.clone())),
    };
    let builtin = match builtins::lookup(head.as_str()) {
        Some(builtin) => builtin,
        None => return err!(UnknownProcedure(head.clone())),
    };
    trace!("Calling {:?}", builtin);

    let args = cons.cdr();
    match builtin.calling() {
        Calling::EvaluateAll(f) => f(evlis(args, depth)?),
        Calling::EvaluateNone(f) => f(args),
        Calling::ShortCircuit(junction) => short_circuit(junction, args, depth),
        Calling::StructuralAccess(f) => {
            let args = elements(args)?;
            match args.as_slice() {
                [arg] => f(arg, None),
                [arg, param] => f(arg, Some(param)),
                _ => err!(WrongArgumentCount {
                    given: args.len(),
                    expected: if args.is_empty() {
                        ExpectedCount::AtLeast(1)
                    } else {
                        ExpectedCount::AtMost(2)
                    },
                }),
            }
        }
    }
}

/// Evaluates each argument, left to right.
fn evlis(args: Option<&Sexp>, depth: usize) -> Result<Args, EvalErr> {
    elements(args)?
        .into_iter()
        .map(|arg| eval_at(arg, depth + 1))
        .collect()
}

/// Evaluates arguments until one decides the result.
///
/// Or stops at the first value other than #f; And stops at the first #f and
/// otherwise yields the last value.
fn short_circuit(junction: Junction, args: Option<&Sexp>, depth: usize) -> Ret {
    let mut last = Sexp::boolean(junction == Junction::And);
    for arg in elements(args)? {
        let val = eval_at(arg, depth + 1)?;
        let decided = match junction {
            Junction::Or => !val.is_false(),
            Junction::And => val.is_false(),
        };
        if decided {
            return Ok(val);
        }
        last = val;
    }
    match junction {
        Junction::Or => Ok(Sexp::boolean(false)),
        Junction::And => Ok(last),
    }
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
