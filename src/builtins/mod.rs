//! The fixed table of procedures a call head can name.

use lazy_static::lazy_static;

use std::collections::HashMap;

use crate::function::EvalErr;
use crate::primitive::{BuiltIn, Calling, Junction};
use crate::sexp::Sexp;

use self::literal::{cons, list, quote};
use self::numeric::*;
use self::structural::*;

pub mod literal;
pub mod numeric;
pub mod structural;


macro_rules! builtins {
    [$($n:tt : $policy:ident($x:expr)),* $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($n, BuiltIn::new($n, Calling::$policy($x)));
            )*
            m
        }
    };
}

lazy_static! {
    pub static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "quote": EvaluateNone(quote),
        "list": EvaluateNone(list),
        "cons": EvaluateNone(cons),

        "or": ShortCircuit(Junction::Or),
        "and": ShortCircuit(Junction::And),

        "+": EvaluateAll(add),
        "-": EvaluateAll(sub),
        "*": EvaluateAll(mul),
        "/": EvaluateAll(div),
        "max": EvaluateAll(max),
        "min": EvaluateAll(min),
        "abs": EvaluateAll(abs),
        "=": EvaluateAll(num_eq),
        ">": EvaluateAll(gt),
        "<": EvaluateAll(lt),
        ">=": EvaluateAll(ge),
        "<=": EvaluateAll(le),
        "number?": EvaluateAll(is_number),
        "boolean?": EvaluateAll(is_boolean),
        "not": EvaluateAll(not),

        "pair?": StructuralAccess(is_pair),
        "null?": StructuralAccess(is_null),
        "list?": StructuralAccess(is_list),
        "car": StructuralAccess(car),
        "cdr": StructuralAccess(cdr),
        "list-ref": StructuralAccess(list_ref),
        "list-tail": StructuralAccess(list_tail),
    ];
}


pub fn lookup(name: &str) -> Option<&'static BuiltIn> {
    BUILTINS.get(name)
}

/// Elements of a proper argument list; None is the empty list.
pub fn elements(args: Option<&Sexp>) -> Result<Vec<&Sexp>, EvalErr> {
    let mut res = Vec::new();
    if let Some(list) = args {
        for (arg, from_cons) in list {
            if !from_cons {
                return err!(InvalidSexp(list.clone()));
            }
            res.push(arg);
        }
    }
    Ok(res)
}
