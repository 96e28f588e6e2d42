//! Module for constructing lists as S-exps in reading order.
//!
//! Elements are buffered and the chain of Cons cells is built back to front
//! on release, so appending stays O(1) and no cell is ever mutated after it
//! is linked.

use crate::sexp::{Cons, HeapSexp, Sexp};

#[derive(Debug, Default)]
pub struct ConsList {
    elements: Vec<HeapSexp>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList {
            elements: Vec::new(),
        }
    }

    pub fn append<T: Into<HeapSexp>>(&mut self, val: T) {
        self.elements.push(val.into());
    }

    pub fn release(self) -> Sexp {
        self.release_with_tail(None)
    }

    /// Releases the list with `tail` as the cdr of its last cell.
    ///
    /// An empty-list tail is the same as no tail.
    pub fn release_with_tail(self, tail: Option<HeapSexp>) -> Sexp {
        let tail = tail.filter(|t| !t.is_none());
        if self.elements.is_empty() {
            return match tail {
                Some(hsexp) => *hsexp,
                None => Sexp::default(),
            };
        }

        let mut cdr = tail;
        for car in self.elements.into_iter().rev() {
            cdr = Some(HeapSexp::new(Sexp::Cons(Cons::new(Some(car), cdr))));
        }
        // Non-empty, so cdr now holds the head cell.
        match cdr {
            Some(head) => *head,
            None => Sexp::default(),
        }
    }
}
