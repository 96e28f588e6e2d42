//! Module for representing S-exps.

use std::fmt;
use std::str::FromStr;

use colored::Colorize;

use super::cons::Cons;
use super::cons_list::ConsList;
use crate::error::Error;
use crate::parser::parse;
use crate::primitive::{Number, Primitive, Symbol};


/// Boxed S-exp, as held in Cons slots.
pub type HeapSexp = Box<Sexp>;

/// Value produced by the parser and by evaluation.
///
/// Closed over integers, symbols (including #t/#f) and cons cells. Trees are
/// owned and acyclic; embedding a sub-tree in a new form clones it.
#[derive(Clone, PartialEq)]
pub enum Sexp {
    Primitive(Primitive),
    Cons(Cons),
}

/// Walks a chain of cons cells, yielding `(element, from_cons)`.
///
/// `from_cons` is false only for a non-list value ending the chain, which is
/// necessarily the last item yielded.
pub struct SexpIter<'a> {
    current: Option<&'a Sexp>,
}

/// Display adapter that colors parentheses by nesting depth.
pub struct ColoredSexp<'a>(&'a Sexp);

const PAREN_COLORS: [(u8, u8, u8); 5] = [
    (102, 204, 255),
    (255, 153, 51),
    (153, 230, 77),
    (204, 128, 255),
    (255, 214, 64),
];


impl Sexp {
    /// Whether this is the empty list.
    pub fn is_none(&self) -> bool {
        matches!(self, Sexp::Cons(cons) if cons.is_empty())
    }

    pub fn boolean(value: bool) -> Sexp {
        Symbol::boolean(value).into()
    }

    /// Symbol holding already-rendered text.
    pub fn text<S: Into<String>>(text: S) -> Sexp {
        Symbol::from_text(text).into()
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Sexp::Primitive(Primitive::Number(num)) => Some(*num),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Sexp::Primitive(Primitive::Symbol(symbol)) => Some(symbol),
            _ => None,
        }
    }

    pub fn is_false(&self) -> bool {
        self.as_symbol().map_or(false, Symbol::is_false)
    }

    pub fn iter(&self) -> SexpIter {
        SexpIter {
            current: Some(self),
        }
    }

    pub fn colored(&self) -> ColoredSexp {
        ColoredSexp(self)
    }

    /// Writes the S-exp using the supplied primitive and paren writers.
    ///
    /// Lists are space-separated. A non-list tail is set off with " . " only
    /// when both it and the element before it are numbers, so (1 . 2) prints
    /// as written while (a . b) prints as (a b).
    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_primitive: &mut F,
        write_paren: &mut P,
    ) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(&mut W, &Primitive, usize) -> fmt::Result,
        P: FnMut(&mut W, &str, usize) -> fmt::Result,
    {
        if let Sexp::Primitive(primitive) = self {
            return write_primitive(w, primitive, depth);
        }

        write_paren(w, "(", depth)?;
        let mut prev: Option<&Sexp> = None;
        for (val, from_cons) in self.iter() {
            if let Some(prev) = prev {
                let dotted =
                    !from_cons && prev.as_number().is_some() && val.as_number().is_some();
                w.write_str(if dotted { " . " } else { " " })?;
            }
            val.write_list(w, depth + 1, write_primitive, write_paren)?;
            prev = Some(val);
        }
        write_paren(w, ")", depth)
    }
}


impl<'a> Iterator for SexpIter<'a> {
    type Item = (&'a Sexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let sexp = self.current.take()?;
        match sexp {
            Sexp::Cons(cons) => {
                self.current = cons.cdr();
                cons.car().map(|car| (car, true))
            }
            Sexp::Primitive(_) => Some((sexp, false)),
        }
    }
}

impl<'a> IntoIterator for &'a Sexp {
    type Item = (&'a Sexp, bool);
    type IntoIter = SexpIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for Sexp {
    /// The empty list.
    fn default() -> Self {
        Sexp::Cons(Cons::default())
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_list(
            f,
            0,
            &mut |w, primitive, _| write!(w, "{}", primitive),
            &mut |w, paren, _| w.write_str(paren),
        )
    }
}

impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<'a> fmt::Display for ColoredSexp<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_list(
            f,
            0,
            &mut |w, primitive, _| write!(w, "{}", primitive),
            &mut |w, paren, depth| {
                let (r, g, b) = PAREN_COLORS[depth % PAREN_COLORS.len()];
                write!(w, "{}", paren.truecolor(r, g, b))
            },
        )
    }
}


impl FromStr for Sexp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Proper list of the converted elements.
impl<T: Into<Sexp>> From<Vec<T>> for Sexp {
    fn from(vec: Vec<T>) -> Self {
        let mut list = ConsList::new();
        for elem in vec {
            list.append(HeapSexp::new(elem.into()));
        }
        list.release()
    }
}

impl From<Primitive> for Sexp {
    fn from(primitive: Primitive) -> Self {
        Sexp::Primitive(primitive)
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl From<Number> for Sexp {
    fn from(num: Number) -> Self {
        Sexp::Primitive(Primitive::Number(num))
    }
}

impl From<Symbol> for Sexp {
    fn from(symbol: Symbol) -> Self {
        Sexp::Primitive(Primitive::Symbol(symbol))
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
