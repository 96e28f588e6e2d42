//! Module for breaking source text into tokens.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use super::token::{Token, TokenInfo};
use crate::primitive::{Number, Primitive, Symbol, SymbolError, ToSymbol};

use self::TokenizeErrorKind::*;


/// Lazy scanner over source text.
///
/// Holds exactly one scanned token at a time; advance() scans the next one
/// with a single character of lookahead. Once input runs out the current
/// token stays Eof.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    col: usize,

    current: TokenInfo,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenizeError {
    line: usize,
    col: usize,
    kind: TokenizeErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenizeErrorKind {
    UnexpectedChar(char),
    IntegerOverflow(String),
    InvalidSymbol(SymbolError),
}


impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Result<Self, TokenizeError> {
        let mut tokenizer = Self {
            chars: input.chars().peekable(),
            line: 1,
            col: 1,
            current: TokenInfo::new(Token::Eof, 1, 1),
        };
        tokenizer.current = tokenizer.scan_token()?;
        Ok(tokenizer)
    }

    pub fn current(&self) -> &TokenInfo {
        &self.current
    }

    pub fn is_end(&self) -> bool {
        *self.current.token() == Token::Eof
    }

    pub fn advance(&mut self) -> Result<(), TokenizeError> {
        if !self.is_end() {
            self.current = self.scan_token()?;
        }
        Ok(())
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn scan_token(&mut self) -> Result<TokenInfo, TokenizeError> {
        loop {
            let (line, col) = (self.line, self.col);
            let c = match self.bump() {
                Some(c) => c,
                None => return Ok(TokenInfo::new(Token::Eof, line, col)),
            };

            let token = match c {
                ' ' | '\n' | '\t' | '\r' => continue,
                '(' => Token::LeftParen,
                ')' => Token::RightParen,
                '\'' => Token::Quote,
                '.' => Token::Period,
                // A sign only belongs to a number when a digit follows at once.
                '+' | '-' => {
                    if self.chars.peek().map_or(false, char::is_ascii_digit) {
                        self.scan_number(c, line, col)?
                    } else {
                        self.scan_symbol(c, line, col)?
                    }
                }
                _ if c.is_ascii_digit() => self.scan_number(c, line, col)?,
                _ if Symbol::is_start_char(c) => self.scan_symbol(c, line, col)?,
                _ => {
                    return Err(TokenizeError {
                        line,
                        col,
                        kind: UnexpectedChar(c),
                    })
                }
            };
            return Ok(TokenInfo::new(token, line, col));
        }
    }

    /// Maximal munch: extends `first` while the next character satisfies
    /// `pred`.
    fn accumulate(&mut self, first: char, pred: fn(char) -> bool) -> String {
        let mut s = first.to_string();
        while let Some(&c) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            s.push(c);
            self.bump();
        }
        s
    }

    fn scan_number(
        &mut self,
        first: char,
        line: usize,
        col: usize,
    ) -> Result<Token, TokenizeError> {
        let literal = self.accumulate(first, |c| c.is_ascii_digit());
        match literal.parse::<Number>() {
            Ok(num) => Ok(Token::Primitive(Primitive::Number(num))),
            Err(_) => Err(TokenizeError {
                line,
                col,
                kind: IntegerOverflow(literal),
            }),
        }
    }

    fn scan_symbol(
        &mut self,
        first: char,
        line: usize,
        col: usize,
    ) -> Result<Token, TokenizeError> {
        // Signs never continue into a longer identifier.
        let name = if first == '+' || first == '-' {
            first.to_string()
        } else {
            self.accumulate(first, Symbol::is_continue_char)
        };
        match name.to_symbol() {
            Ok(symbol) => Ok(Token::Primitive(Primitive::Symbol(symbol))),
            Err(err) => Err(TokenizeError {
                line,
                col,
                kind: InvalidSymbol(err),
            }),
        }
    }
}


impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<TokenInfo, TokenizeError>;

    /// Yields tokens up to, but not including, Eof.
    ///
    /// A scan failure is yielded in place of the token preceding it, after
    /// which iteration ends.
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end() {
            return None;
        }
        let info = self.current.clone();
        match self.advance() {
            Ok(()) => Some(Ok(info)),
            Err(err) => {
                self.current = TokenInfo::new(Token::Eof, err.line, err.col);
                Some(Err(err))
            }
        }
    }
}


/// Scans all of `input` up to, but not including, Eof.
pub fn tokenize<S: AsRef<str>>(input: S) -> Result<Vec<TokenInfo>, TokenizeError> {
    Tokenizer::new(input.as_ref())?.collect()
}


impl TokenizeError {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn kind(&self) -> &TokenizeErrorKind {
        &self.kind
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Tokenize Error]: ")?;
        match &self.kind {
            UnexpectedChar(c) => write!(f, "unexpected character {:?}", c),
            IntegerOverflow(literal) => write!(f, "integer literal {} out of range", literal),
            InvalidSymbol(err) => write!(f, "{}", err),
        }?;
        write!(f, " @ ({}, {})", self.line, self.col)
    }
}

impl std::error::Error for TokenizeError {}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
