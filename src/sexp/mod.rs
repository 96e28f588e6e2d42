#[macro_use]
mod sexp_conversion;

pub mod cons;
pub mod cons_list;
pub mod sexp;


pub use self::cons::Cons;
pub use self::cons_list::ConsList;
pub use self::sexp::{ColoredSexp, HeapSexp, Sexp, SexpIter};
