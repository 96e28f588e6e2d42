use std::fmt;


pub const TRUE: &str = "#t";
pub const FALSE: &str = "#f";

/// Textual atom.
///
/// Covers identifiers as written in source, the boolean literals #t and #f,
/// and the rendered text produced by quote and the list accessors. Equality
/// is textual.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub trait ToSymbol {
    fn to_symbol(&self) -> SymbolResult;

    fn to_symbol_or_panic(&self) -> Symbol {
        self.to_symbol().unwrap()
    }
}

pub type SymbolResult = Result<Symbol, SymbolError>;

#[derive(Clone, Debug, PartialEq)]
pub enum SymbolError {
    Empty,
    InvalidStart(String),
    InvalidChar(String, char),
}

impl Symbol {
    /// Wraps arbitrary text without checking it against identifier rules.
    ///
    /// Used for rendered values; prefer ToSymbol for anything that should
    /// read back as an identifier.
    pub fn from_text<S: Into<String>>(text: S) -> Symbol {
        Symbol(text.into())
    }

    pub fn boolean(value: bool) -> Symbol {
        Symbol::from_text(if value { TRUE } else { FALSE })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_true(&self) -> bool {
        self.0 == TRUE
    }

    pub fn is_false(&self) -> bool {
        self.0 == FALSE
    }

    pub fn is_boolean(&self) -> bool {
        self.is_true() || self.is_false()
    }

    pub fn is_start_char(c: char) -> bool {
        c.is_ascii_alphabetic() || matches!(c, '<' | '=' | '>' | '*' | '/' | '#')
    }

    pub fn is_continue_char(c: char) -> bool {
        Symbol::is_start_char(c) || c.is_ascii_digit() || matches!(c, '?' | '!' | '-')
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> SymbolResult {
        let s = self.as_ref();
        let mut chars = s.chars();
        match chars.next() {
            None => return Err(SymbolError::Empty),
            // Lone signs are identifiers in their own right.
            Some('+') | Some('-') if s.len() == 1 => {}
            Some(c) if !Symbol::is_start_char(c) => {
                return Err(SymbolError::InvalidStart(s.to_string()));
            }
            Some(_) => {}
        }
        if let Some(c) = chars.find(|c| !Symbol::is_continue_char(*c)) {
            return Err(SymbolError::InvalidChar(s.to_string(), c));
        }

        Ok(Symbol(s.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolError::Empty => write!(f, "empty symbol"),
            SymbolError::InvalidStart(s) => write!(f, "\"{}\" cannot start a symbol", s),
            SymbolError::InvalidChar(s, c) => {
                write!(f, "\"{}\" contains invalid character '{}'", s, c)
            }
        }
    }
}


#[cfg(test)]
#[path = "./symbol_test.rs"]
mod symbol_test;
