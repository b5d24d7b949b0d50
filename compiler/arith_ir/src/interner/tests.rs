use super::*;

#[test]
fn test_intern_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("rate");
    let b = interner.intern("rate");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "rate");
}

#[test]
fn test_distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    assert_ne!(x, y);
    assert_eq!(interner.lookup(x), "x");
    assert_eq!(interner.lookup(y), "y");
}

#[test]
fn test_empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert!(!interner.is_empty());
}

#[test]
fn test_lookup_unknown_name_is_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(10_000)), "");
}

#[test]
fn test_shared_interner_clones_share_table() {
    let shared = SharedInterner::new();
    let other = shared.clone();
    let name = shared.intern("total");
    assert_eq!(other.lookup(name), "total");
    assert_eq!(other.intern("total"), name);
}

#[test]
fn test_get_does_not_intern() {
    let interner = StringInterner::new();
    let before = interner.len();
    assert_eq!(interner.get("missing"), None);
    assert_eq!(interner.len(), before);

    let name = interner.intern("present");
    assert_eq!(interner.get("present"), Some(name));
    assert_eq!(interner.get("return"), Some(interner.intern("return")));
}
