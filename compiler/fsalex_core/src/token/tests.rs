use super::*;

// === TokenKind codes ===

#[test]
fn kind_codes_are_stable() {
    assert_eq!(TokenKind::Identifier.code(), 0);
    assert_eq!(TokenKind::Integer.code(), 1);
    assert_eq!(TokenKind::String.code(), 2);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn value_kind_matches_variant() {
    assert_eq!(
        TokenValue::Identifier("x".into()).kind(),
        TokenKind::Identifier
    );
    assert_eq!(TokenValue::Integer(1).kind(), TokenKind::Integer);
    assert_eq!(TokenValue::String("s".into()).kind(), TokenKind::String);
}

// === Display ===

#[test]
fn token_display_is_code_and_text() {
    let tok = Token::identifier("int", Span::new(0, 3));
    assert_eq!(tok.to_string(), "0, int");
}

#[test]
fn literal_values_display() {
    assert_eq!(TokenValue::Integer(-7).to_string(), "-7");
    assert_eq!(TokenValue::String("a b".into()).to_string(), "\"a b\"");
    assert_eq!(TokenKind::Integer.to_string(), "integer");
}

// === Identifier classification ===

#[test]
fn identifier_classes() {
    for b in [b'a', b'z', b'A', b'Z', b'_'] {
        assert!(is_ident_start(b), "{} should start an identifier", b as char);
    }
    for b in [b'0', b'9', b'=', b' ', b';', 0, 0xC3] {
        assert!(!is_ident_start(b), "{b:#x} should not start an identifier");
    }
    assert!(is_ident_continue(b'7'));
    assert!(!is_ident_continue(0));
}

#[test]
fn identifier_text_validation() {
    assert!(is_identifier("_foo9"));
    assert!(is_identifier("bar_2"));
    assert!(is_identifier("_"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("9lives"));
    assert!(!is_identifier("a-b"));
    assert!(!is_identifier("caf\u{e9}"));
}
