use super::*;

#[test]
fn display_names_follow_token_dump_convention() {
    assert_eq!(TokenKind::Ident.display_name(), "IDENTIFIER");
    assert_eq!(TokenKind::EqEq.display_name(), "EQUALS");
    assert_eq!(TokenKind::Assign.display_name(), "ASSIGN");
    assert_eq!(TokenKind::Eof.display_name(), "END_OF_FILE");
    assert_eq!(TokenKind::Star.to_string(), "MULTIPLY");
}

#[test]
fn fixed_text_only_for_operators_and_delimiters() {
    assert_eq!(TokenKind::GtEq.fixed_text(), Some(">="));
    assert_eq!(TokenKind::Dot.fixed_text(), Some("."));
    assert_eq!(TokenKind::Ident.fixed_text(), None);
    assert_eq!(TokenKind::Def.fixed_text(), None);
    assert_eq!(TokenKind::Indent.fixed_text(), None);
}

#[test]
fn keyword_and_structural_classes_are_disjoint() {
    for kind in [TokenKind::Def, TokenKind::Elif, TokenKind::Continue] {
        assert!(kind.is_keyword());
        assert!(!kind.is_structural());
    }
    for kind in [TokenKind::Indent, TokenKind::Dedent, TokenKind::Newline, TokenKind::Eof] {
        assert!(kind.is_structural());
        assert!(!kind.is_keyword());
    }
    assert!(!TokenKind::Ident.is_keyword());
}

#[test]
fn synthetic_tokens_have_empty_lexeme() {
    let tok = Token::synthetic(TokenKind::Indent, 2, 1);
    assert_eq!(tok.lexeme, "");
    assert_eq!((tok.line, tok.column), (2, 1));
}

#[test]
fn debug_and_display_formats() {
    let tok = Token::new(TokenKind::Ident, "x", 3, 5);
    assert_eq!(format!("{tok:?}"), "Ident(\"x\") @ 3:5");
    assert_eq!(tok.to_string(), "3:5 IDENTIFIER \"x\"");
}

#[test]
fn eof_and_error_predicates() {
    assert!(Token::synthetic(TokenKind::Eof, 1, 1).is_eof());
    assert!(Token::new(TokenKind::Error, "!", 1, 1).is_error());
    assert!(!Token::new(TokenKind::Ident, "x", 1, 1).is_error());
}
