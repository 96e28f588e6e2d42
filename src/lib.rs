//! Evaluator for a small Scheme subset.
//!
//! Source text goes through three stages: the tokenizer, the parser, which
//! builds one S-exp, and the interpreter, which evaluates it against a fixed
//! table of builtins. [run] drives all three and prints the result.
//!
//! The library logs through the log facade and never sets up a logger
//! itself; see https://github.com/rust-lang/log#in-executables.

use log::debug;

use crate::error::Error;
use crate::function::EvalErr;
use crate::sexp::Sexp;


#[macro_use]
pub mod function;
#[macro_use]
pub mod sexp;

pub mod builtins;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod primitive;
pub mod token;

pub mod prelude {
    pub use crate::error::{Error, ErrorKind};
    pub use crate::function::{EvalErr, ExpectedCount};
    pub use crate::interpreter::eval;
    pub use crate::parser::parse;
    pub use crate::primitive::{Number, Primitive, Symbol, ToSymbol};
    pub use crate::run;
    pub use crate::sexp::{Cons, ConsList, HeapSexp, Sexp};
    // Macros.
    pub use crate::list;
}


/// Evaluates the single datum in `source` and prints its value.
///
/// Numbers print in decimal and symbols as their text. Each call is
/// independent of every other.
pub fn run<S: AsRef<str>>(source: S) -> Result<String, Error> {
    let form = parser::parse(source)?;
    let value = interpreter::eval(&form)?;
    debug!("Evaluated {} to {}", form, value);

    match value {
        Sexp::Primitive(primitive) => Ok(primitive.to_string()),
        Sexp::Cons(_) => Err(EvalErr::UnrenderableResult(value).into()),
    }
}
