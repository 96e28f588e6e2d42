//! Module for parsing tokens into S-exps by recursive descent.

use std::fmt;

use log::debug;

use crate::error::Error;
use crate::primitive::Symbol;
use crate::sexp::{ConsList, HeapSexp, Sexp};
use crate::token::{Token, TokenInfo, TokenizeError, Tokenizer};

use self::ParseErrorReason::*;

pub const MAX_DEPTH: usize = 256;


/// Parses `input` as exactly one datum.
///
/// Anything but whitespace after the datum is an error.
pub fn parse<S: AsRef<str>>(input: S) -> Result<Sexp, Error> {
    let mut parser = Parser::new(input.as_ref())?;
    let sexp = parser.parse_one()?;
    debug!("Parsed {}", sexp);
    Ok(sexp)
}


pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
}

/// What a single read produced.
///
/// Close only makes sense to the enclosing read_list; it never escapes the
/// parser.
enum Datum {
    Sexp(Sexp),
    Close(TokenInfo),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorReason {
    DepthOverflow,
    UnexpectedEof,
    UnmatchedClose,
    IsolatedPeriod,
    NotPenultimatePeriod,
    MissingTail,
    InvalidQuoteTarget,
    TrailingContent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    reason: ParseErrorReason,
    token: TokenInfo,
}

#[derive(Debug)]
enum ReadErr {
    Tokenize(TokenizeError),
    Parse(ParseError),
}


impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, TokenizeError> {
        Ok(Self {
            tokenizer: Tokenizer::new(input)?,
        })
    }

    /// Reads one datum and requires the input to end right after it.
    pub fn parse_one(&mut self) -> Result<Sexp, Error> {
        let sexp = match self.read_datum(0)? {
            Datum::Sexp(sexp) => sexp,
            Datum::Close(token) => return Err(self.fail(UnmatchedClose, token).into()),
        };
        if !self.tokenizer.is_end() {
            let token = self.tokenizer.current().clone();
            return Err(self.fail(TrailingContent, token).into());
        }
        Ok(sexp)
    }

    fn read_datum(&mut self, depth: usize) -> Result<Datum, ReadErr> {
        if depth >= MAX_DEPTH {
            let token = self.tokenizer.current().clone();
            return Err(self.fail(DepthOverflow, token));
        }

        let token = self.tokenizer.current().clone();
        match token.token() {
            Token::LeftParen => {
                self.tokenizer.advance()?;
                Ok(Datum::Sexp(self.read_list(depth + 1)?))
            }
            Token::Primitive(primitive) => {
                let sexp = primitive.clone().into();
                self.tokenizer.advance()?;
                Ok(Datum::Sexp(sexp))
            }
            Token::RightParen => {
                self.tokenizer.advance()?;
                Ok(Datum::Close(token))
            }
            Token::Quote => {
                self.tokenizer.advance()?;
                let target = self.tokenizer.current().clone();
                match target.token() {
                    Token::LeftParen | Token::Primitive(_) => {}
                    _ => return Err(self.fail(InvalidQuoteTarget, target)),
                }
                match self.read_datum(depth + 1)? {
                    Datum::Sexp(quoted) => {
                        Ok(Datum::Sexp(list!(Symbol::from_text("quote"), quoted)))
                    }
                    // Ruled out by the target check above.
                    Datum::Close(close) => Err(self.fail(InvalidQuoteTarget, close)),
                }
            }
            Token::Period => Err(self.fail(IsolatedPeriod, token)),
            Token::Eof => Err(self.fail(UnexpectedEof, token)),
        }
    }

    /// Reads list elements after an opening paren, through the closing one.
    fn read_list(&mut self, depth: usize) -> Result<Sexp, ReadErr> {
        let mut list = ConsList::new();
        loop {
            let sexp = match self.read_datum(depth)? {
                Datum::Sexp(sexp) => sexp,
                Datum::Close(_) => return Ok(list.release()),
            };
            list.append(sexp);

            if *self.tokenizer.current().token() == Token::Period {
                self.tokenizer.advance()?;
                return self.read_tail(list, depth);
            }
        }
    }

    /// Reads the single datum after a period and the paren closing the list.
    fn read_tail(&mut self, list: ConsList, depth: usize) -> Result<Sexp, ReadErr> {
        let tail = match self.read_datum(depth)? {
            Datum::Sexp(tail) => tail,
            Datum::Close(token) => return Err(self.fail(MissingTail, token)),
        };

        let close = self.tokenizer.current().clone();
        match close.token() {
            Token::RightParen => {
                self.tokenizer.advance()?;
                Ok(list.release_with_tail(Some(HeapSexp::new(tail))))
            }
            Token::Eof => Err(self.fail(UnexpectedEof, close)),
            _ => Err(self.fail(NotPenultimatePeriod, close)),
        }
    }

    fn fail(&self, reason: ParseErrorReason, token: TokenInfo) -> ReadErr {
        ReadErr::Parse(ParseError { reason, token })
    }
}


impl ParseError {
    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }

    pub fn token(&self) -> &TokenInfo {
        &self.token
    }
}

impl From<TokenizeError> for ReadErr {
    fn from(err: TokenizeError) -> Self {
        ReadErr::Tokenize(err)
    }
}

impl From<ReadErr> for Error {
    fn from(err: ReadErr) -> Self {
        match err {
            ReadErr::Tokenize(err) => Error::Tokenize(err),
            ReadErr::Parse(err) => Error::Parse(err),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Parse Error]: {:?} at {}", self.reason, self.token)
    }
}

impl std::error::Error for ParseError {}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
