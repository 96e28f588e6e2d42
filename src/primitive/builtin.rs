//! Representation of builtin procedures.

use std::fmt;

use crate::function::{Args, Ret};
use crate::sexp::Sexp;


/// How a procedure consumes the argument sub-expressions of a call.
///
/// The interpreter consults this before touching the arguments, so each
/// procedure declares its evaluation policy rather than the interpreter
/// special-casing names.
#[derive(Clone, Copy)]
pub enum Calling {
    /// Every argument is evaluated, left to right, before the call.
    EvaluateAll(fn(Args) -> Ret),
    /// The raw argument list is passed through unevaluated.
    EvaluateNone(fn(Option<&Sexp>) -> Ret),
    /// Arguments are evaluated left to right until the result is decided.
    ShortCircuit(Junction),
    /// The raw first argument plus an optional raw second argument.
    StructuralAccess(fn(&Sexp, Option<&Sexp>) -> Ret),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Junction {
    And,
    Or,
}

#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    calling: Calling,
}

impl BuiltIn {
    pub fn new(name: &'static str, calling: Calling) -> BuiltIn {
        BuiltIn { name, calling }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn calling(&self) -> Calling {
        self.calling
    }
}

impl Calling {
    pub fn policy_name(&self) -> &'static str {
        match self {
            Calling::EvaluateAll(_) => "EvaluateAll",
            Calling::EvaluateNone(_) => "EvaluateNone",
            Calling::ShortCircuit(_) => "ShortCircuit",
            Calling::StructuralAccess(_) => "StructuralAccess",
        }
    }
}

impl PartialEq for BuiltIn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{} {}]", self.name, self.calling.policy_name())
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}
