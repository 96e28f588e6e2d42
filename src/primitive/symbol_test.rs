use super::*;


#[test]
fn identifiers() {
    assert_eq!("car".to_symbol().unwrap().as_str(), "car");
    assert_eq!("list-ref".to_symbol().unwrap().as_str(), "list-ref");
    assert_eq!("null?".to_symbol().unwrap().as_str(), "null?");
    assert_eq!(">=".to_symbol().unwrap().as_str(), ">=");
    assert_eq!("+".to_symbol().unwrap().as_str(), "+");
    assert_eq!("-".to_symbol().unwrap().as_str(), "-");
}

#[test]
fn invalid_identifiers() {
    assert_eq!("".to_symbol(), Err(SymbolError::Empty));
    assert_eq!(
        "1abc".to_symbol(),
        Err(SymbolError::InvalidStart("1abc".to_string()))
    );
    assert_eq!(
        "?x".to_symbol(),
        Err(SymbolError::InvalidStart("?x".to_string()))
    );
    assert_eq!(
        "a+b".to_symbol(),
        Err(SymbolError::InvalidChar("a+b".to_string(), '+'))
    );
}

#[test]
fn booleans() {
    assert!("#t".to_symbol_or_panic().is_true());
    assert!("#f".to_symbol_or_panic().is_false());
    assert!(Symbol::boolean(true).is_boolean());
    assert!(!"#true".to_symbol_or_panic().is_boolean());
    assert_eq!(Symbol::boolean(false).as_str(), FALSE);
}
