use std::fmt;

use derive_getters::Getters;

use crate::primitive::Primitive;


#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    LeftParen,
    RightParen,
    Quote,
    Period,
    /// Integer literal or identifier.
    Primitive(Primitive),
    Eof,
}

/// Token plus the 1-based position of its first character.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct TokenInfo {
    token: Token,
    line: usize,
    col: usize,
}

impl TokenInfo {
    pub fn new(token: Token, line: usize, col: usize) -> Self {
        Self { token, line, col }
    }

    pub fn into_token(self) -> Token {
        self.token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Quote => write!(f, "'"),
            Token::Period => write!(f, "."),
            Token::Primitive(p) => write!(f, "{}", p),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ ({}, {})", self.token, self.line, self.col)
    }
}
