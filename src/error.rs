//! Errors surfaced by running a program.
//!
//! Each stage keeps its own error type; Error wraps whichever one stopped
//! the pipeline so callers can classify it without matching on every stage.

use std::fmt;

use crate::function::EvalErr;
use crate::parser::ParseError;
use crate::token::TokenizeError;


#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    Tokenize(TokenizeError),
    Parse(ParseError),
    Eval(EvalErr),
}

/// Coarse classification of an Error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed token stream or parse structure.
    Syntax,
    /// Head of a call names no procedure.
    Name,
    /// Evaluation failed on the values involved.
    Runtime,
}


impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Tokenize(_) | Error::Parse(_) => ErrorKind::Syntax,
            Error::Eval(err) if err.is_name_error() => ErrorKind::Name,
            Error::Eval(_) => ErrorKind::Runtime,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Tokenize(err) => write!(f, "{}", err),
            Error::Parse(err) => write!(f, "{}", err),
            Error::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Syntax => "SyntaxError",
            ErrorKind::Name => "NameError",
            ErrorKind::Runtime => "RuntimeError",
        };
        write!(f, "{}", name)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Tokenize(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Eval(err) => Some(err),
        }
    }
}

impl From<TokenizeError> for Error {
    fn from(err: TokenizeError) -> Self {
        Error::Tokenize(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<EvalErr> for Error {
    fn from(err: EvalErr) -> Self {
        Error::Eval(err)
    }
}
