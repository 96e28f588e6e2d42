/// Returns the elements as a proper Sexp list.
///
/// Each element only needs to implement Into<Sexp>:
///   list!("quote".to_symbol_or_panic(), 4i64)
#[macro_export]
macro_rules! list {
    ($($elem:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut list = $crate::sexp::ConsList::new();
            $(
                list.append($crate::sexp::HeapSexp::new($elem.into()));
            )*
            list.release()
        }
    };
}


#[cfg(test)]
#[path = "./sexp_conversion_test.rs"]
mod sexp_conversion_test;
