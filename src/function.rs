//! Basic blocks for procedural representation.

use std::borrow::Cow;
use std::fmt;

use self::EvalErr::*;
use self::ExpectedCount::*;
use crate::primitive::Symbol;
use crate::sexp::Sexp;


/// Creates an EvalErr wrapped in Err.
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::function::EvalErr::$($kind)+)
    };
}


pub type Args = Vec<Sexp>;
pub type Ret = Result<Sexp, EvalErr>;

#[derive(Clone, Debug, PartialEq)]
pub enum EvalErr {
    InvalidArgument {
        given: Sexp,
        expected: Cow<'static, str>,
    },
    InvalidSexp(Sexp),
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    UnexpectedSymbol(Symbol),
    UnknownProcedure(Symbol),
    IndexOutOfRange {
        index: i64,
        given: Sexp,
    },
    ArithmeticOverflow(&'static str),
    DivisionByZero,
    UnrenderableResult(Sexp),
    DepthOverflow(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
}


impl EvalErr {
    /// Whether the error stems from the name in head position rather than
    /// from the arguments or values involved.
    pub fn is_name_error(&self) -> bool {
        matches!(self, UnknownProcedure(_))
    }
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Eval Error] ")?;
        match self {
            InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {}, expected {}",
                given, expected
            ),
            InvalidSexp(val) => write!(f, "Invalid S-exp for evaluation: {}", val),
            WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            UnexpectedSymbol(symbol) => {
                write!(f, "Symbol \"{}\" does not denote a value", symbol)
            }
            UnknownProcedure(symbol) => write!(f, "Unknown procedure: \"{}\"", symbol),
            IndexOutOfRange { index, given } => {
                write!(f, "Index {} out of range for {}", index, given)
            }
            ArithmeticOverflow(op) => write!(f, "Integer overflow in {}", op),
            DivisionByZero => write!(f, "Division by zero"),
            UnrenderableResult(val) => write!(f, "Result cannot be printed: {}", val),
            DepthOverflow(max) => write!(f, "Evaluation nested deeper than {}", max),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exactly(n) => write!(f, "exactly {}", n),
            AtLeast(n) => write!(f, "at least {}", n),
            AtMost(n) => write!(f, "at most {}", n),
        }
    }
}

impl std::error::Error for EvalErr {}
