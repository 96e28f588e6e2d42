//! Representation of primitives.

use std::fmt;

pub mod builtin;
pub mod symbol;

pub use self::builtin::{BuiltIn, Calling, Junction};
pub use self::symbol::{Symbol, SymbolError, ToSymbol};


/// Fixed-width integer; the only numeric type.
pub type Number = i64;

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Number(Number),
    Symbol(Symbol),
}


impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Number(num) => write!(f, "{}", num),
            Primitive::Symbol(s) => write!(f, "{}", s),
        }
    }
}
