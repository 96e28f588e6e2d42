use std::fmt;

use super::sexp::{HeapSexp, Sexp};


/// Two-slot cell; an absent slot is nil.
///
/// A Cons with both slots absent is the empty list.
///
/// Drop, Clone, PartialEq and Debug walk the cdr chain in a loop, so list
/// length never bounds stack use; only car nesting recurses.
#[derive(Default)]
pub struct Cons {
    car: Option<HeapSexp>,
    cdr: Option<HeapSexp>,
}

impl Cons {
    pub fn new(car: Option<HeapSexp>, cdr: Option<HeapSexp>) -> Cons {
        Cons { car, cdr }
    }

    pub fn car(&self) -> Option<&Sexp> {
        match &self.car {
            Some(val) => Some(val.as_ref()),
            None => None,
        }
    }

    pub fn cdr(&self) -> Option<&Sexp> {
        match &self.cdr {
            Some(val) => Some(val.as_ref()),
            None => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.car.is_none() && self.cdr.is_none()
    }

    /// Next cell of the chain, if the cdr is one.
    fn next_cell(&self) -> Option<&Cons> {
        match self.cdr() {
            Some(Sexp::Cons(cons)) => Some(cons),
            _ => None,
        }
    }
}


impl Drop for Cons {
    fn drop(&mut self) {
        let mut next = self.cdr.take();
        while let Some(mut hsexp) = next {
            next = match hsexp.as_mut() {
                Sexp::Cons(cons) => cons.cdr.take(),
                Sexp::Primitive(_) => None,
            };
        }
    }
}

impl Clone for Cons {
    fn clone(&self) -> Self {
        let mut cars = vec![self.car.clone()];
        let mut tail = None;
        let mut cell = self;
        while let Some(next) = cell.cdr() {
            match next {
                Sexp::Cons(cons) => {
                    cars.push(cons.car.clone());
                    cell = cons;
                }
                Sexp::Primitive(_) => {
                    tail = Some(HeapSexp::new(next.clone()));
                    break;
                }
            }
        }

        let rest = cars.split_off(1);
        let mut cdr = tail;
        for car in rest.into_iter().rev() {
            cdr = Some(HeapSexp::new(Sexp::Cons(Cons::new(car, cdr))));
        }
        Cons::new(cars.pop().flatten(), cdr)
    }
}

impl PartialEq for Cons {
    fn eq(&self, other: &Self) -> bool {
        let (mut lhs, mut rhs) = (self, other);
        loop {
            if lhs.car != rhs.car {
                return false;
            }
            match (lhs.next_cell(), rhs.next_cell()) {
                (Some(l), Some(r)) => {
                    lhs = l;
                    rhs = r;
                }
                // At most one side continues; Sexp equality settles it
                // without descending the longer chain.
                _ => return lhs.cdr() == rhs.cdr(),
            }
        }
    }
}

impl fmt::Debug for Cons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cell = Some(self);
        while let Some(cons) = cell {
            if let Some(car) = cons.car() {
                list.entry(car);
            }
            cell = cons.next_cell();
            if cell.is_none() {
                if let Some(tail) = cons.cdr() {
                    list.entry(tail);
                }
            }
        }
        list.finish()
    }
}
